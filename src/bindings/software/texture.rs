// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Software texture implementation for CPU-based texture inspection.

This module provides textures that live entirely in CPU memory and answer the same two questions a
bound GPU resource answers: "how big is mip level m?" and "what is stored at this coordinate?".

# Overview

The software texture system is useful for:
- Inspecting captured texture data without a GPU
- Testing sampling and addressing logic deterministically
- Building resources for the dispatcher in [`crate::dispatch`]

# Key Types

- [`Texture`] - A full mip chain of 1D, 2D, 3D, array or cube data
- [`Texel`] - Integer texture coordinates (x, y, z), where z is a depth slice or layer
- [`descriptor::TextureDescriptor`] - Shape, size and mip count
- [`views`] - Shape-checked wrappers that the binding slots hold
- [`vtexture::VTexture`] - The fetch primitive, also implemented for unbound slots
- [`sampling`] - Normalized-coordinate sampling primitives for float data

# Coordinate Systems

- Origin (0, 0) is at the top-left
- X increases to the right
- Y increases downward
- Z selects a depth slice (3D) or a layer (arrays and cubes; cube faces are layers)

# Example

```
use texsample::bindings::software::texture::{Texture, Texel};
use texsample::bindings::software::texture::descriptor::TextureDescriptor;
use texsample::pixel_formats::{UInt, UInt4};

// A 4x4 texture with two mip levels, each texel recording where it lives
let desc = TextureDescriptor::new_2d("ids", 4, 4).with_mip_levels(2);
let texture = Texture::<UInt>::new_with(desc, |mip, texel| {
    UInt4::new(texel.x, texel.y, texel.z, mip)
}).unwrap();

assert_eq!(texture.get(1, Texel::new(1, 1, 0)), Some(&UInt4::new(1, 1, 0, 1)));
assert_eq!(texture.get(1, Texel::new(2, 0, 0)), None);
```
*/

use crate::Error;
use crate::bindings::coordinates::Extent;
use crate::bindings::shape::ResourceShape;
use crate::bindings::software::texture::descriptor::TextureDescriptor;
use crate::pixel_formats::sealed::PixelFormat;

pub mod descriptor;
pub mod sampling;
pub mod views;
pub mod vtexture;

/// A software texture that provides GPU-like storage on the CPU.
///
/// Holds every mip level of a resource of any [`ResourceShape`].  Textures are immutable once
/// built; binding one shares it read-only with every sampling call.
///
/// # Memory Layout
///
/// Each level is stored slice-major, then row-major (Z, then Y, then X-minor).
#[derive(Debug, Clone)]
pub struct Texture<Format: PixelFormat> {
    descriptor: TextureDescriptor,
    levels: Vec<Level<Format>>,
}

#[derive(Debug, Clone)]
struct Level<Format: PixelFormat> {
    extent: Extent,
    data: Vec<Format::CPixel>,
}

/// Integer texture coordinates within one mip level.
///
/// # Examples
///
/// ```
/// use texsample::bindings::software::texture::Texel;
///
/// let texel = Texel::new(10, 20, 1);
/// assert_eq!(Texel::ZERO, Texel::new(0, 0, 0));
/// assert_eq!(Texel::from_signed([10, 20, 1]), Some(texel));
/// assert_eq!(Texel::from_signed([-1, 0, 0]), None);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Texel {
    /// X coordinate (horizontal position)
    pub x: u32,
    /// Y coordinate (vertical position)
    pub y: u32,
    /// Depth slice or array layer
    pub z: u32,
}

impl Texel {
    /// The origin texel at coordinates (0, 0, 0).
    pub const ZERO: Texel = Texel { x: 0, y: 0, z: 0 };

    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Converts shader-style signed coordinates, or `None` if any is negative.
    pub fn from_signed(coord: [i32; 3]) -> Option<Self> {
        Some(Self {
            x: u32::try_from(coord[0]).ok()?,
            y: u32::try_from(coord[1]).ok()?,
            z: u32::try_from(coord[2]).ok()?,
        })
    }

    const fn is_inside(&self, extent: Extent) -> bool {
        self.x < extent.width && self.y < extent.height && self.z < extent.depth_or_layers
    }

    /// Converts texel coordinates to a linear array index.
    const fn vec_offset(&self, extent: Extent) -> usize {
        let row = extent.width as usize;
        let slice = row * extent.height as usize;
        slice * self.z as usize + row * self.y as usize + self.x as usize
    }

    /// Converts a linear array index back to texel coordinates.
    const fn from_vec_offset(extent: Extent, offset: usize) -> Texel {
        let row = extent.width as usize;
        let slice = row * extent.height as usize;
        let z = offset / slice;
        let y = (offset % slice) / row;
        let x = offset % row;
        Texel {
            x: x as u32,
            y: y as u32,
            z: z as u32,
        }
    }
}

impl<Format: PixelFormat> Texture<Format> {
    /// Creates a new texture with every texel of every level set to the same value.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDescriptor`] if the descriptor doesn't validate.
    pub fn new(descriptor: TextureDescriptor, initialize_element: Format::CPixel) -> Result<Self, Error> {
        Self::new_with(descriptor, |_, _| initialize_element)
    }

    /// Creates a new texture with texels initialized by a function of `(mip_level, texel)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use texsample::bindings::software::texture::{Texture, Texel};
    /// use texsample::bindings::software::texture::descriptor::TextureDescriptor;
    /// use texsample::pixel_formats::{Float, Float4};
    ///
    /// // A checkerboard on every face of a cube
    /// let texture = Texture::<Float>::new_with(TextureDescriptor::new_cube("sky", 16), |_, texel| {
    ///     let on = (texel.x / 4 + texel.y / 4) % 2 == 0;
    ///     if on { Float4::new(1.0, 1.0, 1.0, 1.0) } else { Float4::default() }
    /// }).unwrap();
    /// assert_eq!(texture.get(0, Texel::new(0, 0, 5)).unwrap().r, 1.0);
    /// ```
    pub fn new_with<F: Fn(u32, Texel) -> Format::CPixel>(
        descriptor: TextureDescriptor,
        initialize_with: F,
    ) -> Result<Self, Error> {
        descriptor.validate()?;
        let mut levels = Vec::with_capacity(descriptor.mip_level_count() as usize);
        for mip_level in 0..descriptor.mip_level_count() {
            let (extent, len) = Self::checked_extent(&descriptor, mip_level)?;
            let mut data = Vec::with_capacity(len);
            for offset in 0..len {
                data.push(initialize_with(mip_level, Texel::from_vec_offset(extent, offset)));
            }
            levels.push(Level { extent, data });
        }
        Ok(Self::built(descriptor, levels))
    }

    /// Creates a texture from already-laid-out level data, level 0 first.
    ///
    /// Each level must be in the memory layout described on [`Texture`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDescriptor`] if the descriptor doesn't validate, or if the number of levels
    /// differs from its mip count; [`Error::DataLength`] if a level has the wrong texel count.
    pub fn from_levels(
        descriptor: TextureDescriptor,
        level_data: Vec<Vec<Format::CPixel>>,
    ) -> Result<Self, Error> {
        descriptor.validate()?;
        if level_data.len() != descriptor.mip_level_count() as usize {
            return Err(Error::InvalidDescriptor {
                name: descriptor.debug_name().to_owned(),
                reason: "level data count differs from mip level count",
            });
        }
        let mut levels = Vec::with_capacity(level_data.len());
        for (mip_level, data) in (0..).zip(level_data) {
            let (extent, len) = Self::checked_extent(&descriptor, mip_level)?;
            if data.len() != len {
                return Err(Error::DataLength {
                    name: descriptor.debug_name().to_owned(),
                    mip_level,
                    expected: len,
                    actual: data.len(),
                });
            }
            levels.push(Level { extent, data });
        }
        Ok(Self::built(descriptor, levels))
    }

    /// The extent and texel count of one level, refusing levels too large to allocate.
    fn checked_extent(descriptor: &TextureDescriptor, mip_level: u32) -> Result<(Extent, usize), Error> {
        let invalid = |reason| Error::InvalidDescriptor {
            name: descriptor.debug_name().to_owned(),
            reason,
        };
        let extent = descriptor
            .level_extent(mip_level)
            .ok_or_else(|| invalid("mip level count out of range"))?;
        let len = extent
            .texel_count()
            .filter(|len| {
                len.checked_mul(size_of::<Format::CPixel>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| invalid("texture is too large to allocate"))?;
        Ok((extent, len))
    }

    fn built(descriptor: TextureDescriptor, levels: Vec<Level<Format>>) -> Self {
        logwise::info_sync!(
            "built texture {name}: {shape} {interpretation} with {levels} levels",
            name = logwise::privacy::LogIt(descriptor.debug_name()),
            shape = logwise::privacy::LogIt(&descriptor.shape()),
            interpretation = logwise::privacy::LogIt(&Format::INTERPRETATION),
            levels = descriptor.mip_level_count()
        );
        Self { descriptor, levels }
    }

    pub fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn shape(&self) -> ResourceShape {
        self.descriptor.shape()
    }

    pub fn debug_name(&self) -> &str {
        self.descriptor.debug_name()
    }

    pub fn mip_level_count(&self) -> u32 {
        self.descriptor.mip_level_count()
    }

    /// The extent of `mip_level`, or [`Extent::ZERO`] past the last level.
    #[inline]
    pub fn extent(&self, mip_level: u32) -> Extent {
        self.levels
            .get(mip_level as usize)
            .map_or(Extent::ZERO, |level| level.extent)
    }

    /// The texel at `texel` in `mip_level`, or `None` if either is out of range.
    #[inline]
    pub fn get(&self, mip_level: u32, texel: Texel) -> Option<&Format::CPixel> {
        let level = self.levels.get(mip_level as usize)?;
        if !texel.is_inside(level.extent) {
            return None;
        }
        level.data.get(texel.vec_offset(level.extent))
    }

    /// Raw data of one level, in the layout described on [`Texture`].
    pub fn level_data(&self, mip_level: u32) -> Option<&[Format::CPixel]> {
        self.levels.get(mip_level as usize).map(|level| level.data.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_formats::{SInt, SInt4};

    #[test]
    fn offsets_round_trip() {
        let extent = Extent::new(3, 4, 5);
        for offset in 0..extent.texel_count().unwrap() {
            let texel = Texel::from_vec_offset(extent, offset);
            assert!(texel.is_inside(extent));
            assert_eq!(texel.vec_offset(extent), offset);
        }
    }

    #[test]
    fn from_levels_checks_lengths() {
        let desc = TextureDescriptor::new_2d("t", 2, 2).with_mip_levels(2);
        let err = Texture::<SInt>::from_levels(
            desc.clone(),
            vec![vec![SInt4::default(); 4], vec![SInt4::default(); 2]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::DataLength {
                name: "t".to_owned(),
                mip_level: 1,
                expected: 1,
                actual: 2
            }
        );
        assert!(Texture::<SInt>::from_levels(desc.clone(), vec![vec![SInt4::default(); 4]]).is_err());
        let ok = Texture::<SInt>::from_levels(
            desc,
            vec![
                (0..4).map(|i| SInt4::new(i, -i, 0, 0)).collect(),
                vec![SInt4::new(-7, 0, 0, 0)],
            ],
        )
        .unwrap();
        assert_eq!(ok.get(0, Texel::new(1, 1, 0)), Some(&SInt4::new(3, -3, 0, 0)));
        assert_eq!(ok.get(1, Texel::ZERO), Some(&SInt4::new(-7, 0, 0, 0)));
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let t = Texture::<SInt>::new(TextureDescriptor::new_2d_array("a", 2, 2, 3), SInt4::new(1, 1, 1, 1))
            .unwrap();
        assert!(t.get(0, Texel::new(1, 1, 2)).is_some());
        assert!(t.get(0, Texel::new(2, 0, 0)).is_none());
        assert!(t.get(0, Texel::new(0, 0, 3)).is_none());
        assert!(t.get(1, Texel::ZERO).is_none());
        assert_eq!(t.extent(1), Extent::ZERO);
    }

    #[test]
    fn oversized_textures_are_refused() {
        let huge = TextureDescriptor::new_3d("huge", u32::MAX, u32::MAX, u32::MAX);
        assert!(matches!(
            Texture::<SInt>::new(huge, SInt4::default()),
            Err(Error::InvalidDescriptor { .. })
        ));
        //the count fits a usize on 64-bit targets, the bytes don't
        let wide = TextureDescriptor::new_2d("wide", u32::MAX, u32::MAX);
        assert!(matches!(
            Texture::<SInt>::from_levels(wide, vec![Vec::new()]),
            Err(Error::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn invalid_descriptor_is_refused() {
        let desc = TextureDescriptor::new_cube("c", 4).with_depth_or_layers(4);
        assert!(Texture::<SInt>::new(desc, SInt4::default()).is_err());
    }
}
