// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Resource shapes, and the raw tags the inspection front end speaks.

The front end only knows a texture's shape as an integer.  [`ResourceShape::try_from`] is the one
place that integer is checked; after that every dispatch is an exhaustive `match`.

```
use texsample::bindings::shape::ResourceShape;

let shape = ResourceShape::try_from(6u32).unwrap();
assert_eq!(shape, ResourceShape::Texture2DArray);
assert!(ResourceShape::try_from(0u32).is_err());
assert!(ResourceShape::try_from(8u32).is_err());
```
*/

use crate::Error;

/// The shape of a bound resource.
///
/// Discriminants are the raw tags used by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResourceShape {
    Texture1D = 1,
    Texture2D = 2,
    Texture3D = 3,
    TextureCube = 4,
    Texture1DArray = 5,
    Texture2DArray = 6,
    TextureCubeArray = 7,
}

impl ResourceShape {
    /// Every shape, in tag order.
    pub const ALL: [ResourceShape; 7] = [
        ResourceShape::Texture1D,
        ResourceShape::Texture2D,
        ResourceShape::Texture3D,
        ResourceShape::TextureCube,
        ResourceShape::Texture1DArray,
        ResourceShape::Texture2DArray,
        ResourceShape::TextureCubeArray,
    ];

    /// The raw tag for this shape.
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Whether the shape has a vertical axis that a flip applies to.
    pub const fn has_vertical_axis(self) -> bool {
        !matches!(self, ResourceShape::Texture1D | ResourceShape::Texture1DArray)
    }

    pub const fn is_cube(self) -> bool {
        matches!(self, ResourceShape::TextureCube | ResourceShape::TextureCubeArray)
    }
}

impl TryFrom<u32> for ResourceShape {
    type Error = Error;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(ResourceShape::Texture1D),
            2 => Ok(ResourceShape::Texture2D),
            3 => Ok(ResourceShape::Texture3D),
            4 => Ok(ResourceShape::TextureCube),
            5 => Ok(ResourceShape::Texture1DArray),
            6 => Ok(ResourceShape::Texture2DArray),
            7 => Ok(ResourceShape::TextureCubeArray),
            other => Err(Error::InvalidShape(other)),
        }
    }
}

/**
The subset of shapes that support integer fetches.

Every interpretation can read these.  Converting a cube shape into a `TexelShape` fails, which is
how the integer dispatchers refuse cubes before they look at a binding.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexelShape {
    Texture1D,
    Texture1DArray,
    Texture2D,
    Texture2DArray,
    Texture3D,
}

impl From<TexelShape> for ResourceShape {
    fn from(shape: TexelShape) -> Self {
        match shape {
            TexelShape::Texture1D => ResourceShape::Texture1D,
            TexelShape::Texture1DArray => ResourceShape::Texture1DArray,
            TexelShape::Texture2D => ResourceShape::Texture2D,
            TexelShape::Texture2DArray => ResourceShape::Texture2DArray,
            TexelShape::Texture3D => ResourceShape::Texture3D,
        }
    }
}

impl TexelShape {
    /// Narrows a shape, or returns it back when it is a cube shape.
    pub const fn from_shape(shape: ResourceShape) -> Result<TexelShape, ResourceShape> {
        match shape {
            ResourceShape::Texture1D => Ok(TexelShape::Texture1D),
            ResourceShape::Texture1DArray => Ok(TexelShape::Texture1DArray),
            ResourceShape::Texture2D => Ok(TexelShape::Texture2D),
            ResourceShape::Texture2DArray => Ok(TexelShape::Texture2DArray),
            ResourceShape::Texture3D => Ok(TexelShape::Texture3D),
            cube @ (ResourceShape::TextureCube | ResourceShape::TextureCubeArray) => Err(cube),
        }
    }
}
