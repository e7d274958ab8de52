// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
A VTexture is a trait that allows querying extents and fetching texels with shader semantics.

This is most commonly a [`Texture`](crate::bindings::software::texture::Texture).  It is also
implemented for `Option<&T>`, so an empty binding slot behaves like a null resource: zero extent,
and every fetch reads zero.

# Examples

```
use texsample::bindings::software::texture::Texture;
use texsample::bindings::software::texture::descriptor::TextureDescriptor;
use texsample::bindings::software::texture::vtexture::VTexture;
use texsample::bindings::coordinates::Extent;
use texsample::pixel_formats::{UInt, UInt4};

let texture = Texture::<UInt>::new(TextureDescriptor::new_2d("t", 4, 2), UInt4::new(9, 9, 9, 9)).unwrap();
let bound = Some(&texture);
assert_eq!(bound.extent(0), Extent::new(4, 2, 1));
assert_eq!(bound.fetch([3, 1, 0], 0), UInt4::new(9, 9, 9, 9));
// out of range reads zero
assert_eq!(bound.fetch([4, 0, 0], 0), UInt4::default());

let unbound: Option<&Texture<UInt>> = None;
assert_eq!(unbound.extent(0), Extent::ZERO);
assert_eq!(unbound.fetch([0, 0, 0], 0), UInt4::default());
```
 */

use crate::bindings::coordinates::Extent;
use crate::bindings::software::texture::{Texel, Texture};
use crate::pixel_formats::sealed::PixelFormat;

/// The extent-query and fetch primitives that the dispatcher is written against.
///
/// # Type Parameters
///
/// * `Format` - The pixel format of the texture, determining the type of texels returned
pub trait VTexture<Format: PixelFormat> {
    /// Returns the extent of `mip_level`.
    ///
    /// Levels that don't exist report [`Extent::ZERO`].
    fn extent(&self, mip_level: u32) -> Extent;

    /// Fetches the texel at signed integer coordinates `[x, y, z]` of `mip_level`.
    ///
    /// Coordinates outside the level, and levels that don't exist, read the zero element.
    fn fetch(&self, coord: [i32; 3], mip_level: u32) -> Format::CPixel;
}

impl<Format: PixelFormat> VTexture<Format> for Texture<Format> {
    fn extent(&self, mip_level: u32) -> Extent {
        Self::extent(self, mip_level)
    }
    fn fetch(&self, coord: [i32; 3], mip_level: u32) -> Format::CPixel {
        Texel::from_signed(coord)
            .and_then(|texel| self.get(mip_level, texel))
            .copied()
            .unwrap_or_default()
    }
}

impl<Format: PixelFormat, T: VTexture<Format>> VTexture<Format> for Option<&T> {
    fn extent(&self, mip_level: u32) -> Extent {
        match self {
            Some(texture) => texture.extent(mip_level),
            None => Extent::ZERO,
        }
    }
    fn fetch(&self, coord: [i32; 3], mip_level: u32) -> Format::CPixel {
        match self {
            Some(texture) => texture.fetch(coord, mip_level),
            None => Format::CPixel::default(),
        }
    }
}
