// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/**
Pixel position as supplied by the inspection front end.

Uses the standard coordinate system:

```text
           x
      0 ────────▶
      │ ┌───────┐
    y │ │       │
      │ │       │
      │ │       │
      ▼ └───────┘
 ```

Positions are real-valued element coordinates, not normalized.  Fetch paths truncate them toward
zero, so callers that want texel centers must round first.
*/
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Mirrors the vertical coordinate against `height`.
    #[inline]
    pub fn flipped(self, height: u32) -> Self {
        Self {
            x: self.x,
            y: height as f32 - self.y,
        }
    }

    /// Divides by the first two extent components.
    #[inline]
    pub fn normalized(self, extent: Extent) -> [f32; 2] {
        [self.x / extent.width as f32, self.y / extent.height as f32]
    }

    /// Truncates toward zero, like a shader's float-to-int conversion.
    #[inline]
    pub fn texel(self) -> [i32; 2] {
        [self.x as i32, self.y as i32]
    }
}

/**
The size of one mip level of a resource.

The third component is the depth for volume textures and the layer count for array and cube
textures (counting faces for cubes, so a cube array of `n` cubes has `6 * n`).  1D resources
report a height of 1.  Unbound resources report all zeros.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
    pub depth_or_layers: u32,
}

impl Extent {
    pub const ZERO: Extent = Extent {
        width: 0,
        height: 0,
        depth_or_layers: 0,
    };

    pub const fn new(width: u32, height: u32, depth_or_layers: u32) -> Self {
        Self {
            width,
            height,
            depth_or_layers,
        }
    }

    /// Texels in the level, or `None` if the count overflows `usize`.
    pub const fn texel_count(&self) -> Option<usize> {
        match (self.width as usize).checked_mul(self.height as usize) {
            Some(slice) => slice.checked_mul(self.depth_or_layers as usize),
            None => None,
        }
    }
}
