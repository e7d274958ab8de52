// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
The typed sample dispatcher.

A front end that displays arbitrary captured textures only knows a resource's shape and numeric
interpretation at runtime.  The entry points here take that runtime description, a
[`SampleRequest`], pick the one bound resource it names out of [`Bindings`], and return the
element at the requested position.

There is one entry point per interpretation:

* [`sample_texture_uint4`] reads the unsigned set
* [`sample_texture_sint4`] reads the signed set
* [`sample_texture_float4`] reads the float set, and additionally handles cube shapes and
  filtered sampling

# Addressing

Every call queries the extent of the bound resource at the requested mip level first.  If the
request is flipped and the shape has a vertical axis, `y` becomes `height - y`.  Then:

| shape      | fetch                         | float, linear                       |
|------------|-------------------------------|-------------------------------------|
| 1D         | `x`                           | `x / width`                         |
| 1D array   | `(x, slice)`                  | `(x / width, slice)`                |
| 2D         | `(x, y)`                      | `(x / width, y / height)`           |
| 2D array   | `(x, y, slice)`               | `(x / width, y / height, slice)`    |
| 3D         | `(x, y, slice)`               | `(x / width, y / height, slice)`    |

Fetches truncate the position and slice toward zero.  For the 3D linear path, `slice` is taken as
an already-normalized depth.

Cube shapes divide the position by the face extent to get a face `uv`, take the face from the
slice (and for cube arrays, the cube index too), and sample along the face's direction from
[`cube_coord`].

# Errors

Shapes an interpretation has no binding for (cubes on integer data) and cube face indices outside
`0..6` are errors.  Unbound slots and out-of-range coordinates are not: they read zero.

```
use texsample::{SampleRequest, sample_texture_uint4};
use texsample::bindings::coordinates::Position;
use texsample::bindings::shape::ResourceShape;
use texsample::bindings::slots::Bindings;
use texsample::bindings::software::texture::Texture;
use texsample::bindings::software::texture::descriptor::TextureDescriptor;
use texsample::pixel_formats::{UInt, UInt4};

let mut bindings = Bindings::default();
let texture = Texture::<UInt>::new_with(TextureDescriptor::new_2d("ids", 4, 4), |_, t| {
    UInt4::new(t.x, t.y, 0, 0)
}).unwrap();
bindings.uint.bind(texture).unwrap();

let request = SampleRequest::new(Position::new(2.7, 1.2), ResourceShape::Texture2D);
assert_eq!(sample_texture_uint4(&bindings, &request), Ok(UInt4::new(2, 1, 0, 0)));

let flipped = request.with_flip_y(true);
assert_eq!(sample_texture_uint4(&bindings, &flipped), Ok(UInt4::new(2, 2, 0, 0)));
```
*/

use std::sync::Arc;

use some_executor::hint::Hint;

use crate::Error;
use crate::{Priority, Strategy};
use crate::bindings::coordinates::{Extent, Position};
use crate::bindings::sampler::Filter;
use crate::bindings::shape::{ResourceShape, TexelShape};
use crate::bindings::slots::{BindingSet, Bindings};
use crate::bindings::software::texture::Texture;
use crate::bindings::software::texture::sampling::{
    sample_1d, sample_1d_array, sample_2d, sample_2d_array, sample_3d, sample_cube, sample_cube_array,
};
use crate::bindings::software::texture::vtexture::VTexture;
use crate::cube::{CubeFace, cube_array_address, cube_coord};
use crate::pixel_formats::sealed::PixelFormat;
use crate::pixel_formats::{Float, Float4, NumericInterpretation, SInt4, UInt4};

/// One sampling call's parameters.
///
/// `position` is in texels of the requested mip level, in unflipped resource space.  `slice` is
/// an array layer, a 3D depth index, or a cube face (plus six times the cube index for cube
/// arrays); for the float 3D linear path it is a normalized depth instead.
///
/// # Examples
///
/// ```
/// use texsample::SampleRequest;
/// use texsample::bindings::coordinates::Position;
/// use texsample::bindings::shape::ResourceShape;
///
/// let request = SampleRequest::new(Position::new(4.0, 4.0), ResourceShape::TextureCube)
///     .with_slice(2.0)
///     .with_mip_level(1)
///     .with_linear(true);
/// assert_eq!(request.mip_level, 1);
/// assert!(!request.flip_y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRequest {
    pub position: Position,
    pub shape: ResourceShape,
    pub flip_y: bool,
    pub mip_level: u32,
    pub slice: f32,
    /// Filtered sampling.  Only the float dispatcher reads this.
    pub linear: bool,
}

impl SampleRequest {
    /// A nearest, unflipped request for mip 0, slice 0.
    pub const fn new(position: Position, shape: ResourceShape) -> Self {
        Self {
            position,
            shape,
            flip_y: false,
            mip_level: 0,
            slice: 0.0,
            linear: false,
        }
    }

    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub const fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    pub const fn with_mip_level(mut self, mip_level: u32) -> Self {
        self.mip_level = mip_level;
        self
    }

    pub const fn with_slice(mut self, slice: f32) -> Self {
        self.slice = slice;
        self
    }

    pub const fn with_linear(mut self, linear: bool) -> Self {
        self.linear = linear;
        self
    }

    /// The position to address after the extent query, flipped if requested.
    fn addressed_position(&self, extent: Extent) -> Position {
        if self.flip_y && self.shape.has_vertical_axis() {
            self.position.flipped(extent.height)
        } else {
            self.position
        }
    }
}

/// Samples the unsigned binding set.
///
/// # Errors
///
/// [`Error::InterpretationMismatch`] for cube shapes.
pub fn sample_texture_uint4(bindings: &Bindings, request: &SampleRequest) -> Result<UInt4, Error> {
    log_dispatch(NumericInterpretation::UInt, request);
    fetch_texel(&bindings.uint, request)
}

/// Samples the signed binding set.
///
/// # Errors
///
/// [`Error::InterpretationMismatch`] for cube shapes.
pub fn sample_texture_sint4(bindings: &Bindings, request: &SampleRequest) -> Result<SInt4, Error> {
    log_dispatch(NumericInterpretation::SInt, request);
    fetch_texel(&bindings.sint, request)
}

/// Samples the float binding set.
///
/// With `linear` unset the non-cube shapes fetch exactly like the integer dispatchers.  With it
/// set they take one bilinear sample at the normalized position.  Cube shapes always sample,
/// filtering only when `linear` is set.
///
/// # Errors
///
/// [`Error::InvalidCubeFace`] if a cube request's slice doesn't truncate to a face index.
pub fn sample_texture_float4(bindings: &Bindings, request: &SampleRequest) -> Result<Float4, Error> {
    log_dispatch(NumericInterpretation::Float, request);
    let float = &bindings.float;
    match (request.shape, request.linear) {
        (ResourceShape::TextureCube, _) => sample_cube_face(float.cube(), request),
        (ResourceShape::TextureCubeArray, _) => Ok(sample_cube_array_layer(float.cube_array(), request)),
        (_, false) => fetch_texel(&float.common, request),
        (_, true) => sample_linear(&float.common, request),
    }
}

/// Runs [`sample_texture_uint4`] for every pixel of a `width` x `height` region.
///
/// Pixel `(x, y)` of the region samples at `base.position + (x, y)`; everything else comes from
/// `base`.  The result is row-major.
///
/// # Errors
///
/// The first error any pixel raises.
pub fn sample_region_uint4(
    bindings: &Bindings,
    base: &SampleRequest,
    width: u32,
    height: u32,
) -> Result<Vec<UInt4>, Error> {
    sample_region(base, width, height, |request| sample_texture_uint4(bindings, request))
}

/// Runs [`sample_texture_sint4`] for every pixel of a region.  See [`sample_region_uint4`].
pub fn sample_region_sint4(
    bindings: &Bindings,
    base: &SampleRequest,
    width: u32,
    height: u32,
) -> Result<Vec<SInt4>, Error> {
    sample_region(base, width, height, |request| sample_texture_sint4(bindings, request))
}

/// Runs [`sample_texture_float4`] for every pixel of a region.  See [`sample_region_uint4`].
pub fn sample_region_float4(
    bindings: &Bindings,
    base: &SampleRequest,
    width: u32,
    height: u32,
) -> Result<Vec<Float4>, Error> {
    sample_region(base, width, height, |request| sample_texture_float4(bindings, request))
}

/// Most pixels a region preallocates for; larger regions grow as they go.
const MAX_PREALLOCATED_PIXELS: usize = 1 << 20;

fn sample_region<T>(
    base: &SampleRequest,
    width: u32,
    height: u32,
    mut sample: impl FnMut(&SampleRequest) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let capacity = (width as usize)
        .saturating_mul(height as usize)
        .min(MAX_PREALLOCATED_PIXELS);
    let mut pixels = Vec::with_capacity(capacity);
    for y in 0..height {
        for x in 0..width {
            pixels.push(sample(&region_request(base, x, y))?);
        }
    }
    Ok(pixels)
}

/// The request for pixel `(x, y)` of a region anchored at `base`.
fn region_request(base: &SampleRequest, x: u32, y: u32) -> SampleRequest {
    base.with_position(Position::new(base.position.x + x as f32, base.position.y + y as f32))
}

/// Like [`sample_region_uint4`], but pixels are sampled in parallel on the current executor.
///
/// # Errors
///
/// The error the region's pixels raise, or [`Error::RegionTooLarge`] if the region has more
/// pixels than a `usize` can count.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use texsample::{Priority, SampleRequest, Strategy, sample_region_uint4_parallel};
/// use texsample::bindings::coordinates::Position;
/// use texsample::bindings::shape::ResourceShape;
/// use texsample::bindings::slots::Bindings;
/// use texsample::bindings::software::texture::Texture;
/// use texsample::bindings::software::texture::descriptor::TextureDescriptor;
/// use texsample::pixel_formats::{UInt, UInt4};
///
/// let mut bindings = Bindings::default();
/// let texture = Texture::<UInt>::new_with(TextureDescriptor::new_2d("ids", 8, 8), |_, t| {
///     UInt4::new(t.x, t.y, 0, 0)
/// }).unwrap();
/// bindings.uint.bind(texture).unwrap();
///
/// test_executors::sleep_on(async {
///     let base = SampleRequest::new(Position::new(2.0, 2.0), ResourceShape::Texture2D);
///     let pixels = sample_region_uint4_parallel(
///         Arc::new(bindings), base, 4, 4, Priority::UserInitiated, Strategy::One,
///     ).await.unwrap();
///     assert_eq!(pixels[5], UInt4::new(3, 3, 0, 0));
/// });
/// ```
pub async fn sample_region_uint4_parallel(
    bindings: Arc<Bindings>,
    base: SampleRequest,
    width: u32,
    height: u32,
    priority: Priority,
    strategy: Strategy,
) -> Result<Vec<UInt4>, Error> {
    sample_region_parallel(bindings, base, width, height, priority, strategy, sample_texture_uint4).await
}

/// Like [`sample_region_sint4`], sampled in parallel.  See [`sample_region_uint4_parallel`].
pub async fn sample_region_sint4_parallel(
    bindings: Arc<Bindings>,
    base: SampleRequest,
    width: u32,
    height: u32,
    priority: Priority,
    strategy: Strategy,
) -> Result<Vec<SInt4>, Error> {
    sample_region_parallel(bindings, base, width, height, priority, strategy, sample_texture_sint4).await
}

/// Like [`sample_region_float4`], sampled in parallel.  See [`sample_region_uint4_parallel`].
pub async fn sample_region_float4_parallel(
    bindings: Arc<Bindings>,
    base: SampleRequest,
    width: u32,
    height: u32,
    priority: Priority,
    strategy: Strategy,
) -> Result<Vec<Float4>, Error> {
    sample_region_parallel(bindings, base, width, height, priority, strategy, sample_texture_float4).await
}

async fn sample_region_parallel<T: Send + 'static>(
    bindings: Arc<Bindings>,
    base: SampleRequest,
    width: u32,
    height: u32,
    priority: Priority,
    strategy: Strategy,
    sample: fn(&Bindings, &SampleRequest) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }
    //only the position differs between pixels, so if one pixel fails they all do
    sample(&bindings, &base)?;
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::RegionTooLarge { width, height })?;
    logwise::trace_sync!(
        "sampling {width}x{height} region in parallel",
        width = width,
        height = height
    );
    let build_vec = vec_parallel::build_vec(len, strategy, move |index| {
        let x = (index % width as usize) as u32;
        let y = (index / width as usize) as u32;
        sample(&bindings, &region_request(&base, x, y))
    });
    let mut executor = some_executor::current_executor::current_executor();
    let pixels = build_vec.spawn_on(&mut executor, priority, Hint::CPU).await;
    pixels.into_iter().collect()
}

fn narrow<Format: PixelFormat>(shape: ResourceShape) -> Result<TexelShape, Error> {
    TexelShape::from_shape(shape).map_err(|shape| Error::InterpretationMismatch {
        shape,
        interpretation: Format::INTERPRETATION,
    })
}

/// Looks up the slot for the request's shape.
fn bound<'a, Format: PixelFormat>(
    set: &'a BindingSet<Format>,
    shape: TexelShape,
) -> Option<&'a Texture<Format>> {
    let texture = set.get(shape);
    if texture.is_none() {
        log_unbound(Format::INTERPRETATION, shape.into());
    }
    texture
}

/// The fetch path shared by all three interpretations.
fn fetch_texel<Format: PixelFormat>(
    set: &BindingSet<Format>,
    request: &SampleRequest,
) -> Result<Format::CPixel, Error> {
    let shape = narrow::<Format>(request.shape)?;
    let texture = bound(set, shape);
    let extent = texture.extent(request.mip_level);
    let [x, y] = request.addressed_position(extent).texel();
    let slice = request.slice as i32;
    let coord = match shape {
        TexelShape::Texture1D => [x, 0, 0],
        TexelShape::Texture1DArray => [x, 0, slice],
        TexelShape::Texture2D => [x, y, 0],
        TexelShape::Texture2DArray | TexelShape::Texture3D => [x, y, slice],
    };
    Ok(texture.fetch(coord, request.mip_level))
}

fn sample_linear(set: &BindingSet<Float>, request: &SampleRequest) -> Result<Float4, Error> {
    let shape = narrow::<Float>(request.shape)?;
    let texture = bound(set, shape);
    let mip = request.mip_level;
    let extent = texture.extent(mip);
    let [u, v] = request.addressed_position(extent).normalized(extent);
    let slice = request.slice;
    let filter = Filter::Linear;
    Ok(match shape {
        TexelShape::Texture1D => sample_1d::<_, Float>(&texture, u, mip, filter),
        TexelShape::Texture1DArray => sample_1d_array::<_, Float>(&texture, [u, slice], mip, filter),
        TexelShape::Texture2D => sample_2d::<_, Float>(&texture, [u, v], mip, filter),
        TexelShape::Texture2DArray => sample_2d_array::<_, Float>(&texture, [u, v, slice], mip, filter),
        TexelShape::Texture3D => sample_3d::<_, Float>(&texture, [u, v, slice], mip, filter),
    })
}

fn sample_cube_face(texture: Option<&Texture<Float>>, request: &SampleRequest) -> Result<Float4, Error> {
    let face = CubeFace::try_from(request.slice as i32)?;
    if texture.is_none() {
        log_unbound(NumericInterpretation::Float, ResourceShape::TextureCube);
    }
    let mip = request.mip_level;
    let extent = texture.extent(mip);
    let uv = request.addressed_position(extent).normalized(extent);
    let direction = cube_coord(uv, face);
    Ok(sample_cube::<_, Float>(
        &texture,
        direction,
        mip,
        Filter::from_linear(request.linear),
    ))
}

fn sample_cube_array_layer(texture: Option<&Texture<Float>>, request: &SampleRequest) -> Float4 {
    if texture.is_none() {
        log_unbound(NumericInterpretation::Float, ResourceShape::TextureCubeArray);
    }
    let mip = request.mip_level;
    let extent = texture.extent(mip);
    let uv = request.addressed_position(extent).normalized(extent);
    let (face, cube) = cube_array_address(request.slice as i32);
    let [x, y, z] = cube_coord(uv, face);
    sample_cube_array::<_, Float>(
        &texture,
        [x, y, z, cube as f32],
        mip,
        Filter::from_linear(request.linear),
    )
}

fn log_dispatch(interpretation: NumericInterpretation, request: &SampleRequest) {
    logwise::trace_sync!(
        "sample {interpretation} {shape} mip {mip} slice {slice}",
        interpretation = logwise::privacy::LogIt(&interpretation),
        shape = logwise::privacy::LogIt(&request.shape),
        mip = request.mip_level,
        slice = logwise::privacy::LogIt(&request.slice)
    );
}

fn log_unbound(interpretation: NumericInterpretation, shape: ResourceShape) {
    logwise::trace_sync!(
        "{interpretation} {shape} slot is unbound, reading zero",
        interpretation = logwise::privacy::LogIt(&interpretation),
        shape = logwise::privacy::LogIt(&shape)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::software::texture::descriptor::TextureDescriptor;
    use crate::pixel_formats::{SInt, UInt};

    fn ids(desc: TextureDescriptor) -> Texture<UInt> {
        Texture::new_with(desc, |mip, t| UInt4::new(t.x, t.y, t.z, mip)).unwrap()
    }

    fn float_ids(desc: TextureDescriptor) -> Texture<Float> {
        Texture::new_with(desc, |mip, t| {
            Float4::new(t.x as f32, t.y as f32, t.z as f32, mip as f32)
        })
        .unwrap()
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn fetch_addresses_per_shape() {
        let mut bindings = Bindings::new();
        bindings.uint.bind(ids(TextureDescriptor::new_1d("a", 8))).unwrap();
        bindings
            .uint
            .bind(ids(TextureDescriptor::new_1d_array("b", 8, 4)))
            .unwrap();
        bindings.uint.bind(ids(TextureDescriptor::new_3d("c", 4, 4, 4))).unwrap();
        let at = Position::new(3.9, 2.1);

        let r = SampleRequest::new(at, ResourceShape::Texture1D).with_slice(2.0);
        assert_eq!(sample_texture_uint4(&bindings, &r), Ok(UInt4::new(3, 0, 0, 0)));
        let r = SampleRequest::new(at, ResourceShape::Texture1DArray).with_slice(2.0);
        assert_eq!(sample_texture_uint4(&bindings, &r), Ok(UInt4::new(3, 0, 2, 0)));
        let r = SampleRequest::new(at, ResourceShape::Texture3D).with_slice(1.7);
        assert_eq!(sample_texture_uint4(&bindings, &r), Ok(UInt4::new(3, 2, 1, 0)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn one_dimensional_shapes_ignore_flip() {
        let mut bindings = Bindings::new();
        bindings.uint.bind(ids(TextureDescriptor::new_1d("a", 8))).unwrap();
        let r = SampleRequest::new(Position::new(5.0, 0.0), ResourceShape::Texture1D).with_flip_y(true);
        assert_eq!(sample_texture_uint4(&bindings, &r), Ok(UInt4::new(5, 0, 0, 0)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn flip_uses_the_requested_level() {
        let mut bindings = Bindings::new();
        bindings
            .uint
            .bind(ids(TextureDescriptor::new_2d("a", 8, 8).with_mip_levels(2)))
            .unwrap();
        //level 1 is 4 tall, so y=1 flips to 3
        let r = SampleRequest::new(Position::new(0.0, 1.0), ResourceShape::Texture2D)
            .with_mip_level(1)
            .with_flip_y(true);
        assert_eq!(sample_texture_uint4(&bindings, &r), Ok(UInt4::new(0, 3, 0, 1)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn integer_linear_is_ignored() {
        let mut bindings = Bindings::new();
        bindings
            .sint
            .bind(Texture::<SInt>::new_with(TextureDescriptor::new_2d("s", 4, 4), |_, t| {
                SInt4::new(-(t.x as i32), t.y as i32, 0, 0)
            })
            .unwrap())
            .unwrap();
        let r = SampleRequest::new(Position::new(1.5, 2.5), ResourceShape::Texture2D);
        assert_eq!(
            sample_texture_sint4(&bindings, &r),
            sample_texture_sint4(&bindings, &r.with_linear(true))
        );
        assert_eq!(sample_texture_sint4(&bindings, &r), Ok(SInt4::new(-1, 2, 0, 0)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn integer_dispatchers_reject_cubes() {
        let bindings = Bindings::new();
        for shape in [ResourceShape::TextureCube, ResourceShape::TextureCubeArray] {
            let r = SampleRequest::new(Position::default(), shape);
            assert_eq!(
                sample_texture_uint4(&bindings, &r),
                Err(Error::InterpretationMismatch {
                    shape,
                    interpretation: NumericInterpretation::UInt,
                })
            );
            assert_eq!(
                sample_texture_sint4(&bindings, &r),
                Err(Error::InterpretationMismatch {
                    shape,
                    interpretation: NumericInterpretation::SInt,
                })
            );
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn unbound_reads_zero() {
        let bindings = Bindings::new();
        for shape in ResourceShape::ALL {
            let r = SampleRequest::new(Position::new(1.0, 1.0), shape);
            assert_eq!(sample_texture_float4(&bindings, &r), Ok(Float4::default()), "{shape:?}");
            assert_eq!(
                sample_texture_float4(&bindings, &r.with_linear(true)),
                Ok(Float4::default()),
                "{shape:?}"
            );
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn float_nearest_fetches() {
        let mut bindings = Bindings::new();
        bindings
            .float
            .bind(float_ids(TextureDescriptor::new_2d_array("a", 4, 4, 2)))
            .unwrap();
        let r = SampleRequest::new(Position::new(3.0, 0.5), ResourceShape::Texture2DArray).with_slice(1.0);
        assert_eq!(sample_texture_float4(&bindings, &r), Ok(Float4::new(3.0, 0.0, 1.0, 0.0)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn linear_1d_normalizes_by_width() {
        let mut bindings = Bindings::new();
        bindings.float.bind(float_ids(TextureDescriptor::new_1d("a", 4))).unwrap();
        //x = 2 is the boundary between texels 1 and 2
        let r = SampleRequest::new(Position::new(2.0, 0.0), ResourceShape::Texture1D).with_linear(true);
        let s = sample_texture_float4(&bindings, &r).unwrap();
        assert!((s.r - 1.5).abs() < 1e-6, "{s:?}");
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn linear_3d_depth_is_normalized() {
        let mut bindings = Bindings::new();
        bindings
            .float
            .bind(float_ids(TextureDescriptor::new_3d("v", 4, 4, 4)))
            .unwrap();
        let r = SampleRequest::new(Position::new(0.0, 0.0), ResourceShape::Texture3D)
            .with_linear(true)
            .with_slice(0.9);
        assert_eq!(sample_texture_float4(&bindings, &r).unwrap().b, 3.0);
        //the same slice fetched is an index
        let r = r.with_linear(false).with_slice(1.0);
        assert_eq!(sample_texture_float4(&bindings, &r).unwrap().b, 1.0);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn invalid_cube_face() {
        let bindings = Bindings::new();
        let r = SampleRequest::new(Position::default(), ResourceShape::TextureCube).with_slice(6.0);
        assert_eq!(sample_texture_float4(&bindings, &r), Err(Error::InvalidCubeFace(6)));
        let r = r.with_slice(-1.0);
        assert_eq!(sample_texture_float4(&bindings, &r), Err(Error::InvalidCubeFace(-1)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn cube_array_slice_picks_cube_and_face() {
        let mut bindings = Bindings::new();
        bindings
            .float
            .bind(float_ids(TextureDescriptor::new_cube_array("ca", 8, 2)))
            .unwrap();
        //slice 9 is face 3 (-Y) of cube 1
        let r = SampleRequest::new(Position::new(4.0, 4.0), ResourceShape::TextureCubeArray).with_slice(9.0);
        assert_eq!(sample_texture_float4(&bindings, &r), Ok(Float4::new(4.0, 4.0, 9.0, 0.0)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn region_offsets_from_base() {
        let mut bindings = Bindings::new();
        bindings.uint.bind(ids(TextureDescriptor::new_2d("a", 4, 4))).unwrap();
        let base = SampleRequest::new(Position::new(1.0, 2.0), ResourceShape::Texture2D);
        let pixels = sample_region_uint4(&bindings, &base, 2, 2).unwrap();
        assert_eq!(
            pixels,
            vec![
                UInt4::new(1, 2, 0, 0),
                UInt4::new(2, 2, 0, 0),
                UInt4::new(1, 3, 0, 0),
                UInt4::new(2, 3, 0, 0),
            ]
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn region_stops_at_first_error() {
        let bindings = Bindings::new();
        let base = SampleRequest::new(Position::default(), ResourceShape::TextureCube);
        assert!(sample_region_sint4(&bindings, &base, 3, 3).is_err());
        assert_eq!(sample_region_float4(&bindings, &base, 0, 5), Ok(Vec::new()));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn huge_failing_region_returns_the_error() {
        let bindings = Bindings::new();
        let base = SampleRequest::new(Position::default(), ResourceShape::TextureCube);
        let mismatch = Err(Error::InterpretationMismatch {
            shape: ResourceShape::TextureCube,
            interpretation: NumericInterpretation::SInt,
        });
        assert_eq!(sample_region_sint4(&bindings, &base, u32::MAX, u32::MAX), mismatch);
        let parallel = test_executors::sleep_on(sample_region_sint4_parallel(
            Arc::new(bindings),
            base,
            u32::MAX,
            u32::MAX,
            Priority::UserInitiated,
            Strategy::One,
        ));
        assert_eq!(parallel, mismatch);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn flip_applies_to_layered_and_volume_fetches() {
        let mut bindings = Bindings::new();
        bindings
            .uint
            .bind(ids(TextureDescriptor::new_2d_array("layers", 4, 4, 3)))
            .unwrap();
        bindings.uint.bind(ids(TextureDescriptor::new_3d("volume", 4, 4, 4))).unwrap();

        let r = SampleRequest::new(Position::new(1.0, 1.0), ResourceShape::Texture2DArray)
            .with_slice(2.0)
            .with_flip_y(true);
        assert_eq!(sample_texture_uint4(&bindings, &r), Ok(UInt4::new(1, 3, 2, 0)));

        let r = SampleRequest::new(Position::new(2.0, 0.5), ResourceShape::Texture3D)
            .with_slice(1.0)
            .with_flip_y(true);
        assert_eq!(sample_texture_uint4(&bindings, &r), Ok(UInt4::new(2, 3, 1, 0)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn flip_applies_to_cube_faces() {
        let mut bindings = Bindings::new();
        bindings.float.bind(float_ids(TextureDescriptor::new_cube("sky", 8))).unwrap();
        //+Y face; y = 2 flips to 6
        let r = SampleRequest::new(Position::new(4.0, 2.0), ResourceShape::TextureCube).with_slice(2.0);
        assert_eq!(sample_texture_float4(&bindings, &r), Ok(Float4::new(4.0, 2.0, 2.0, 0.0)));
        assert_eq!(
            sample_texture_float4(&bindings, &r.with_flip_y(true)),
            Ok(Float4::new(4.0, 6.0, 2.0, 0.0))
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn flip_applies_to_cube_arrays() {
        let mut bindings = Bindings::new();
        bindings
            .float
            .bind(float_ids(TextureDescriptor::new_cube_array("skies", 8, 2)))
            .unwrap();
        //slice 8 is +Y of cube 1; y = 1 flips to 7
        let r = SampleRequest::new(Position::new(3.0, 1.0), ResourceShape::TextureCubeArray)
            .with_slice(8.0)
            .with_flip_y(true);
        assert_eq!(sample_texture_float4(&bindings, &r), Ok(Float4::new(3.0, 7.0, 8.0, 0.0)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn linear_array_layers_are_not_normalized() {
        let mut bindings = Bindings::new();
        bindings
            .float
            .bind(float_ids(TextureDescriptor::new_1d_array("lines", 4, 3)))
            .unwrap();
        bindings
            .float
            .bind(float_ids(TextureDescriptor::new_2d_array("layers", 4, 4, 3)))
            .unwrap();

        let r = SampleRequest::new(Position::new(2.0, 0.0), ResourceShape::Texture1DArray)
            .with_linear(true)
            .with_slice(2.0);
        let s = sample_texture_float4(&bindings, &r).unwrap();
        assert!((s.r - 1.5).abs() < 1e-6, "{s:?}");
        assert_eq!(s.b, 2.0);

        let r = SampleRequest::new(Position::new(2.0, 2.0), ResourceShape::Texture2DArray)
            .with_linear(true)
            .with_slice(1.0);
        assert_eq!(sample_texture_float4(&bindings, &r).unwrap().b, 1.0);
        //layers round to the nearest
        assert_eq!(sample_texture_float4(&bindings, &r.with_slice(1.6)).unwrap().b, 2.0);
    }
}
