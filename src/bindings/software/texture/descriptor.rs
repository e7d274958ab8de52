// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Builder pattern for describing software textures.

use crate::Error;
use crate::bindings::coordinates::Extent;
use crate::bindings::shape::ResourceShape;
use crate::cube::CUBE_FACE_COUNT;

/// Shape, size and mip count of a software texture.
///
/// Start from one of the shape constructors and adjust with the `with_` methods.  Nothing is
/// checked until the descriptor is used to build a texture.
///
/// # Examples
///
/// ```
/// use texsample::bindings::software::texture::descriptor::TextureDescriptor;
/// use texsample::bindings::coordinates::Extent;
///
/// let desc = TextureDescriptor::new_2d_array("shadow cascades", 64, 32, 4).with_mip_levels(3);
/// assert_eq!(desc.level_extent(2), Some(Extent::new(16, 8, 4)));
/// assert_eq!(desc.level_extent(3), None);
/// assert!(desc.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescriptor {
    shape: ResourceShape,
    width: u32,
    height: u32,
    depth_or_layers: u32,
    mip_level_count: u32,
    debug_name: String,
}

impl TextureDescriptor {
    /// Create a descriptor with required parameters.
    ///
    /// Height, depth/layer count and mip count start at 1.
    pub fn new(shape: ResourceShape, width: u32, debug_name: &str) -> Self {
        Self {
            shape,
            width,
            height: 1,
            depth_or_layers: 1,
            mip_level_count: 1,
            debug_name: debug_name.to_owned(),
        }
    }

    pub fn new_1d(debug_name: &str, width: u32) -> Self {
        Self::new(ResourceShape::Texture1D, width, debug_name)
    }

    pub fn new_1d_array(debug_name: &str, width: u32, layers: u32) -> Self {
        Self::new(ResourceShape::Texture1DArray, width, debug_name).with_depth_or_layers(layers)
    }

    pub fn new_2d(debug_name: &str, width: u32, height: u32) -> Self {
        Self::new(ResourceShape::Texture2D, width, debug_name).with_height(height)
    }

    pub fn new_2d_array(debug_name: &str, width: u32, height: u32, layers: u32) -> Self {
        Self::new(ResourceShape::Texture2DArray, width, debug_name)
            .with_height(height)
            .with_depth_or_layers(layers)
    }

    pub fn new_3d(debug_name: &str, width: u32, height: u32, depth: u32) -> Self {
        Self::new(ResourceShape::Texture3D, width, debug_name)
            .with_height(height)
            .with_depth_or_layers(depth)
    }

    /// A cube with square faces of `size`; six layers.
    pub fn new_cube(debug_name: &str, size: u32) -> Self {
        Self::new(ResourceShape::TextureCube, size, debug_name)
            .with_height(size)
            .with_depth_or_layers(CUBE_FACE_COUNT as u32)
    }

    /// An array of `cubes` cubes; `6 * cubes` layers.
    pub fn new_cube_array(debug_name: &str, size: u32, cubes: u32) -> Self {
        Self::new(ResourceShape::TextureCubeArray, size, debug_name)
            .with_height(size)
            .with_depth_or_layers(cubes.saturating_mul(CUBE_FACE_COUNT as u32))
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_depth_or_layers(mut self, depth_or_layers: u32) -> Self {
        self.depth_or_layers = depth_or_layers;
        self
    }

    pub fn with_mip_levels(mut self, mip_level_count: u32) -> Self {
        self.mip_level_count = mip_level_count;
        self
    }

    pub fn shape(&self) -> ResourceShape {
        self.shape
    }

    pub fn mip_level_count(&self) -> u32 {
        self.mip_level_count
    }

    pub fn debug_name(&self) -> &str {
        &self.debug_name
    }

    /// The extent of mip level `mip_level`, or `None` past the last level.
    ///
    /// Width and height halve per level (never below 1); 1D shapes keep a height of 1.  Depth
    /// halves only for 3D textures; layer counts never shrink.
    pub fn level_extent(&self, mip_level: u32) -> Option<Extent> {
        if mip_level >= self.mip_level_count {
            return None;
        }
        let shrink = |n: u32| n.checked_shr(mip_level).unwrap_or(0).max(1);
        let height = match self.shape {
            ResourceShape::Texture1D | ResourceShape::Texture1DArray => 1,
            _ => shrink(self.height),
        };
        let depth_or_layers = match self.shape {
            ResourceShape::Texture3D => shrink(self.depth_or_layers),
            _ => self.depth_or_layers,
        };
        Some(Extent::new(shrink(self.width), height, depth_or_layers))
    }

    /// The most mip levels a texture of this size can have.
    pub fn max_mip_levels(&self) -> u32 {
        let largest = match self.shape {
            ResourceShape::Texture1D | ResourceShape::Texture1DArray => self.width,
            ResourceShape::Texture3D => self.width.max(self.height).max(self.depth_or_layers),
            _ => self.width.max(self.height),
        };
        u32::BITS - largest.leading_zeros()
    }

    /// Checks that the descriptor describes a texture of its shape.
    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |reason: &'static str| Error::InvalidDescriptor {
            name: self.debug_name.clone(),
            reason,
        };
        if self.width == 0 || self.height == 0 || self.depth_or_layers == 0 {
            return Err(invalid("zero-sized extent"));
        }
        match self.shape {
            ResourceShape::Texture1D | ResourceShape::Texture1DArray if self.height != 1 => {
                return Err(invalid("1D textures have a height of 1"));
            }
            ResourceShape::Texture1D | ResourceShape::Texture2D if self.depth_or_layers != 1 => {
                return Err(invalid("non-array textures have a single layer"));
            }
            ResourceShape::TextureCube | ResourceShape::TextureCubeArray
                if self.width != self.height =>
            {
                return Err(invalid("cube faces are square"));
            }
            ResourceShape::TextureCube if self.depth_or_layers != CUBE_FACE_COUNT as u32 => {
                return Err(invalid("a cube has six faces"));
            }
            ResourceShape::TextureCubeArray
                if self.depth_or_layers % CUBE_FACE_COUNT as u32 != 0 =>
            {
                return Err(invalid("cube array layers come in multiples of six"));
            }
            _ => {}
        }
        if self.mip_level_count == 0 || self.mip_level_count > self.max_mip_levels() {
            return Err(invalid("mip level count out of range"));
        }
        //level 0 is the largest
        if self.level_extent(0).and_then(|extent| extent.texel_count()).is_none() {
            return Err(invalid("texel count overflows"));
        }
        Ok(())
    }
}
