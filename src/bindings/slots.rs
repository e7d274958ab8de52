// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Binding slots: where the host puts resources before a dispatch.

There is one [`BindingSet`] per numeric interpretation, and each set has one slot per shape.  The
sets are distinct types, so a signed capture can't be read through the unsigned dispatcher.

Every slot has a fixed identity, a [`Slot`], numbered the way the host's binding table numbers
them:

| interpretation | 1D | 2D | 3D | cube | 1D array | 2D array | cube array |
|----------------|----|----|----|------|----------|----------|------------|
| float          | 1  | 2  | 3  | 4    | 5        | 6        | 7          |
| unsigned       | 9  | 10 | 11 | -    | 13       | 14       | -          |
| signed         | 16 | 17 | 18 | -    | 20       | 21       | -          |

```
use texsample::bindings::slots::{Bindings, Slot};
use texsample::bindings::shape::ResourceShape;
use texsample::bindings::software::texture::Texture;
use texsample::bindings::software::texture::descriptor::TextureDescriptor;
use texsample::pixel_formats::{NumericInterpretation, UInt, UInt4};

let mut bindings = Bindings::default();
let texture = Texture::<UInt>::new(TextureDescriptor::new_2d("ids", 4, 4), UInt4::default()).unwrap();
let slot = bindings.uint.bind(texture).unwrap();
assert_eq!(slot.binding(), 10);
assert!(bindings.is_bound(slot));
assert!(!bindings.is_bound(Slot::new(NumericInterpretation::SInt, ResourceShape::Texture2D).unwrap()));
```
*/

use crate::Error;
use crate::bindings::shape::{ResourceShape, TexelShape};
use crate::bindings::software::texture::Texture;
use crate::bindings::software::texture::views::{
    Texture1D, Texture1DArray, Texture2D, Texture2DArray, Texture3D, TextureCube, TextureCubeArray,
};
use crate::pixel_formats::sealed::PixelFormat;
use crate::pixel_formats::{Float, NumericInterpretation, SInt, UInt};

/// The fixed identity of one binding slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    interpretation: NumericInterpretation,
    shape: ResourceShape,
}

impl Slot {
    /// The slot for `shape` in the `interpretation` set.
    ///
    /// # Errors
    ///
    /// [`Error::InterpretationMismatch`] for cube shapes outside the float set.
    pub fn new(interpretation: NumericInterpretation, shape: ResourceShape) -> Result<Slot, Error> {
        if shape.is_cube() && !interpretation.supports_cubes() {
            return Err(Error::InterpretationMismatch {
                shape,
                interpretation,
            });
        }
        Ok(Slot {
            interpretation,
            shape,
        })
    }

    pub const fn interpretation(&self) -> NumericInterpretation {
        self.interpretation
    }

    pub const fn shape(&self) -> ResourceShape {
        self.shape
    }

    /// The binding number the host uses for this slot.
    pub const fn binding(&self) -> u32 {
        let base = match self.interpretation {
            NumericInterpretation::Float => 0,
            NumericInterpretation::UInt => 8,
            NumericInterpretation::SInt => 15,
        };
        base + self.shape.tag()
    }
}

/// The five non-cube slots of one interpretation.
///
/// Fields are public so a host can bind a view directly; [`BindingSet::bind`] picks the slot
/// from the texture's shape instead.
#[derive(Debug, Clone)]
pub struct BindingSet<Format: PixelFormat> {
    pub texture_1d: Option<Texture1D<Format>>,
    pub texture_1d_array: Option<Texture1DArray<Format>>,
    pub texture_2d: Option<Texture2D<Format>>,
    pub texture_2d_array: Option<Texture2DArray<Format>>,
    pub texture_3d: Option<Texture3D<Format>>,
}

impl<Format: PixelFormat> Default for BindingSet<Format> {
    fn default() -> Self {
        Self {
            texture_1d: None,
            texture_1d_array: None,
            texture_2d: None,
            texture_2d_array: None,
            texture_3d: None,
        }
    }
}

impl<Format: PixelFormat> BindingSet<Format> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `texture` into the slot for its shape, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// [`Error::InterpretationMismatch`] for cube textures, which have no slot here.
    pub fn bind(&mut self, texture: Texture<Format>) -> Result<Slot, Error> {
        let shape = TexelShape::from_shape(texture.shape()).map_err(|shape| {
            Error::InterpretationMismatch {
                shape,
                interpretation: Format::INTERPRETATION,
            }
        })?;
        log_bind(texture.debug_name(), shape.into(), Format::INTERPRETATION);
        match shape {
            TexelShape::Texture1D => self.texture_1d = Some(texture.try_into()?),
            TexelShape::Texture1DArray => self.texture_1d_array = Some(texture.try_into()?),
            TexelShape::Texture2D => self.texture_2d = Some(texture.try_into()?),
            TexelShape::Texture2DArray => self.texture_2d_array = Some(texture.try_into()?),
            TexelShape::Texture3D => self.texture_3d = Some(texture.try_into()?),
        }
        Slot::new(Format::INTERPRETATION, shape.into())
    }

    /// Empties the slot for `shape`.
    pub fn unbind(&mut self, shape: TexelShape) {
        match shape {
            TexelShape::Texture1D => self.texture_1d = None,
            TexelShape::Texture1DArray => self.texture_1d_array = None,
            TexelShape::Texture2D => self.texture_2d = None,
            TexelShape::Texture2DArray => self.texture_2d_array = None,
            TexelShape::Texture3D => self.texture_3d = None,
        }
    }

    /// The resource in the slot for `shape`, if any.
    #[inline]
    pub fn get(&self, shape: TexelShape) -> Option<&Texture<Format>> {
        match shape {
            TexelShape::Texture1D => self.texture_1d.as_ref().map(Texture1D::texture),
            TexelShape::Texture1DArray => self.texture_1d_array.as_ref().map(Texture1DArray::texture),
            TexelShape::Texture2D => self.texture_2d.as_ref().map(Texture2D::texture),
            TexelShape::Texture2DArray => self.texture_2d_array.as_ref().map(Texture2DArray::texture),
            TexelShape::Texture3D => self.texture_3d.as_ref().map(Texture3D::texture),
        }
    }
}

/// The float slots: the five shared shapes plus the two cube shapes.
#[derive(Debug, Clone, Default)]
pub struct FloatBindings {
    pub common: BindingSet<Float>,
    pub texture_cube: Option<TextureCube>,
    pub texture_cube_array: Option<TextureCubeArray>,
}

impl FloatBindings {
    /// Binds `texture` into the slot for its shape, replacing whatever was there.
    pub fn bind(&mut self, texture: Texture<Float>) -> Result<Slot, Error> {
        match texture.shape() {
            ResourceShape::TextureCube => {
                log_bind(texture.debug_name(), ResourceShape::TextureCube, NumericInterpretation::Float);
                self.texture_cube = Some(texture.try_into()?);
                Slot::new(NumericInterpretation::Float, ResourceShape::TextureCube)
            }
            ResourceShape::TextureCubeArray => {
                log_bind(
                    texture.debug_name(),
                    ResourceShape::TextureCubeArray,
                    NumericInterpretation::Float,
                );
                self.texture_cube_array = Some(texture.try_into()?);
                Slot::new(NumericInterpretation::Float, ResourceShape::TextureCubeArray)
            }
            _ => self.common.bind(texture),
        }
    }

    /// Empties the slot for `shape`.
    pub fn unbind(&mut self, shape: ResourceShape) {
        match TexelShape::from_shape(shape) {
            Ok(shape) => self.common.unbind(shape),
            Err(ResourceShape::TextureCube) => self.texture_cube = None,
            Err(_) => self.texture_cube_array = None,
        }
    }

    pub fn cube(&self) -> Option<&Texture<Float>> {
        self.texture_cube.as_ref().map(TextureCube::texture)
    }

    pub fn cube_array(&self) -> Option<&Texture<Float>> {
        self.texture_cube_array.as_ref().map(TextureCubeArray::texture)
    }
}

/// Every slot of every interpretation.
///
/// Dispatch borrows this immutably, so nothing can be rebound while a sample is in flight.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    pub uint: BindingSet<UInt>,
    pub sint: BindingSet<SInt>,
    pub float: FloatBindings,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a resource is attached at `slot`.
    pub fn is_bound(&self, slot: Slot) -> bool {
        let texel_shape = TexelShape::from_shape(slot.shape());
        match (slot.interpretation(), texel_shape) {
            (NumericInterpretation::UInt, Ok(shape)) => self.uint.get(shape).is_some(),
            (NumericInterpretation::SInt, Ok(shape)) => self.sint.get(shape).is_some(),
            (NumericInterpretation::Float, Ok(shape)) => self.float.common.get(shape).is_some(),
            (NumericInterpretation::Float, Err(ResourceShape::TextureCube)) => self.float.cube().is_some(),
            (NumericInterpretation::Float, Err(_)) => self.float.cube_array().is_some(),
            //Slot::new refuses integer cube slots
            (NumericInterpretation::UInt | NumericInterpretation::SInt, Err(_)) => false,
        }
    }
}

fn log_bind(name: &str, shape: ResourceShape, interpretation: NumericInterpretation) {
    logwise::info_sync!(
        "binding {name} to {interpretation} {shape}",
        name = logwise::privacy::LogIt(name),
        interpretation = logwise::privacy::LogIt(&interpretation),
        shape = logwise::privacy::LogIt(&shape)
    );
}
