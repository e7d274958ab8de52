// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Shape-checked views of a [`Texture`].

Each binding slot holds one of these types, so a slot can only ever contain a resource of its own
shape.  Converting a texture checks its shape once, at bind time.

```
use texsample::bindings::software::texture::Texture;
use texsample::bindings::software::texture::descriptor::TextureDescriptor;
use texsample::bindings::software::texture::views::{Texture2D, Texture3D};
use texsample::pixel_formats::{SInt, SInt4};

let texture = Texture::<SInt>::new(TextureDescriptor::new_2d("mask", 8, 8), SInt4::default()).unwrap();
assert!(Texture3D::try_from(texture.clone()).is_err());
let view = Texture2D::try_from(texture).unwrap();
assert_eq!(view.texture().debug_name(), "mask");
```
*/

use crate::Error;
use crate::bindings::shape::ResourceShape;
use crate::bindings::software::texture::Texture;
use crate::pixel_formats::Float;
use crate::pixel_formats::sealed::PixelFormat;

fn expect_shape<Format: PixelFormat>(
    texture: Texture<Format>,
    expected: ResourceShape,
) -> Result<Texture<Format>, Error> {
    if texture.shape() == expected {
        Ok(texture)
    } else {
        Err(Error::ShapeMismatch {
            name: texture.debug_name().to_owned(),
            expected,
            actual: texture.shape(),
        })
    }
}

/// A 1D texture.
#[derive(Debug, Clone)]
pub struct Texture1D<Format: PixelFormat>(Texture<Format>);

/// An array of 1D textures; layers are the third coordinate.
#[derive(Debug, Clone)]
pub struct Texture1DArray<Format: PixelFormat>(Texture<Format>);

/// A 2D texture.
#[derive(Debug, Clone)]
pub struct Texture2D<Format: PixelFormat>(Texture<Format>);

/// An array of 2D textures.
#[derive(Debug, Clone)]
pub struct Texture2DArray<Format: PixelFormat>(Texture<Format>);

/// A volume texture.
#[derive(Debug, Clone)]
pub struct Texture3D<Format: PixelFormat>(Texture<Format>);

/// A float cube map.  Cube shapes exist only for float data.
#[derive(Debug, Clone)]
pub struct TextureCube(Texture<Float>);

/// An array of float cube maps.
#[derive(Debug, Clone)]
pub struct TextureCubeArray(Texture<Float>);

impl<Format: PixelFormat> Texture1D<Format> {
    pub const SHAPE: ResourceShape = ResourceShape::Texture1D;
    pub fn texture(&self) -> &Texture<Format> {
        &self.0
    }
}

impl<Format: PixelFormat> Texture1DArray<Format> {
    pub const SHAPE: ResourceShape = ResourceShape::Texture1DArray;
    pub fn texture(&self) -> &Texture<Format> {
        &self.0
    }
}

impl<Format: PixelFormat> Texture2D<Format> {
    pub const SHAPE: ResourceShape = ResourceShape::Texture2D;
    pub fn texture(&self) -> &Texture<Format> {
        &self.0
    }
}

impl<Format: PixelFormat> Texture2DArray<Format> {
    pub const SHAPE: ResourceShape = ResourceShape::Texture2DArray;
    pub fn texture(&self) -> &Texture<Format> {
        &self.0
    }
}

impl<Format: PixelFormat> Texture3D<Format> {
    pub const SHAPE: ResourceShape = ResourceShape::Texture3D;
    pub fn texture(&self) -> &Texture<Format> {
        &self.0
    }
}

impl TextureCube {
    pub const SHAPE: ResourceShape = ResourceShape::TextureCube;
    pub fn texture(&self) -> &Texture<Float> {
        &self.0
    }
}

impl TextureCubeArray {
    pub const SHAPE: ResourceShape = ResourceShape::TextureCubeArray;
    pub fn texture(&self) -> &Texture<Float> {
        &self.0
    }
}

impl<Format: PixelFormat> TryFrom<Texture<Format>> for Texture1D<Format> {
    type Error = Error;
    fn try_from(texture: Texture<Format>) -> Result<Self, Self::Error> {
        expect_shape(texture, Self::SHAPE).map(Self)
    }
}

impl<Format: PixelFormat> TryFrom<Texture<Format>> for Texture1DArray<Format> {
    type Error = Error;
    fn try_from(texture: Texture<Format>) -> Result<Self, Self::Error> {
        expect_shape(texture, Self::SHAPE).map(Self)
    }
}

impl<Format: PixelFormat> TryFrom<Texture<Format>> for Texture2D<Format> {
    type Error = Error;
    fn try_from(texture: Texture<Format>) -> Result<Self, Self::Error> {
        expect_shape(texture, Self::SHAPE).map(Self)
    }
}

impl<Format: PixelFormat> TryFrom<Texture<Format>> for Texture2DArray<Format> {
    type Error = Error;
    fn try_from(texture: Texture<Format>) -> Result<Self, Self::Error> {
        expect_shape(texture, Self::SHAPE).map(Self)
    }
}

impl<Format: PixelFormat> TryFrom<Texture<Format>> for Texture3D<Format> {
    type Error = Error;
    fn try_from(texture: Texture<Format>) -> Result<Self, Self::Error> {
        expect_shape(texture, Self::SHAPE).map(Self)
    }
}

impl TryFrom<Texture<Float>> for TextureCube {
    type Error = Error;
    fn try_from(texture: Texture<Float>) -> Result<Self, Self::Error> {
        expect_shape(texture, Self::SHAPE).map(Self)
    }
}

impl TryFrom<Texture<Float>> for TextureCubeArray {
    type Error = Error;
    fn try_from(texture: Texture<Float>) -> Result<Self, Self::Error> {
        expect_shape(texture, Self::SHAPE).map(Self)
    }
}
