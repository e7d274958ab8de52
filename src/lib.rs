/*! texsample answers "what is stored at this pixel?" for any texture a capture inspector can display.

An inspector that shows arbitrary captured textures only learns a resource's shape and numeric
format at runtime, while the resources themselves are bound as distinct, strongly-typed slots: one
per shape, per numeric interpretation.  This crate is the bridge.  Given a runtime
[`SampleRequest`] it picks the one slot the request names, applies vertical flip and
slice/array/cube addressing, and returns the element as four unsigned integers, four signed
integers or four floats.

| shape      | unsigned | signed | float |
|------------|----------|--------|-------|
| 1D         | yes      | yes    | yes   |
| 1D array   | yes      | yes    | yes   |
| 2D         | yes      | yes    | yes   |
| 2D array   | yes      | yes    | yes   |
| 3D         | yes      | yes    | yes   |
| cube       |          |        | yes   |
| cube array |          |        | yes   |

# Pieces

* [`bindings::slots`]: the binding sets the host populates before sampling
* [`bindings::software`]: CPU-resident textures with shader fetch and sample semantics
* [`cube`]: mapping a face `uv` to a cube direction, and back
* [`dispatch`]: the three entry points

# Example

```
use texsample::{SampleRequest, sample_texture_float4};
use texsample::bindings::coordinates::Position;
use texsample::bindings::shape::ResourceShape;
use texsample::bindings::slots::Bindings;
use texsample::bindings::software::texture::Texture;
use texsample::bindings::software::texture::descriptor::TextureDescriptor;
use texsample::pixel_formats::{Float, Float4};

// every face of this cube is filled with its own index
let cube = Texture::<Float>::new_with(TextureDescriptor::new_cube("sky", 8), |_, t| {
    Float4::new(t.z as f32, 0.0, 0.0, 1.0)
}).unwrap();
let mut bindings = Bindings::default();
bindings.float.bind(cube).unwrap();

// slice 2 is the +Y face
let request = SampleRequest::new(Position::new(4.0, 4.0), ResourceShape::TextureCube).with_slice(2.0);
assert_eq!(sample_texture_float4(&bindings, &request), Ok(Float4::new(2.0, 0.0, 0.0, 1.0)));
```
*/

pub mod bindings;
pub mod cube;
pub mod dispatch;
mod error;
pub mod pixel_formats;

pub use dispatch::{
    SampleRequest, sample_region_float4, sample_region_float4_parallel, sample_region_sint4,
    sample_region_sint4_parallel, sample_region_uint4, sample_region_uint4_parallel, sample_texture_float4,
    sample_texture_sint4, sample_texture_uint4,
};
pub use error::Error;

/// How many tasks a parallel region is split into.
pub use vec_parallel::Strategy;

pub type Priority = some_executor::Priority;
