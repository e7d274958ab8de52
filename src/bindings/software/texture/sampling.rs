// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Normalized-coordinate sampling primitives.

These are the software equivalents of a shader's `texture`/`textureLod` calls, one per shape.
Each takes coordinates in the shape's own convention:

| shape      | coordinate                          |
|------------|-------------------------------------|
| 1D         | `u`                                 |
| 1D array   | `[u, layer]`                        |
| 2D         | `[u, v]`                            |
| 2D array   | `[u, v, layer]`                     |
| 3D         | `[u, v, w]`                         |
| cube       | direction `[x, y, z]`               |
| cube array | `[x, y, z, cube]`                   |

`u`, `v` and `w` are normalized to `[0, 1]`.  Layers and cube indices are not normalized: they
round to the nearest layer and clamp to the layers that exist.

Addressing clamps to edge.  [`Filter::Linear`] is a single bilinear tap within one level and one
layer or depth slice; `w` picks the nearest depth slice.  Unbound or out-of-range levels read
zero.
*/

use crate::bindings::sampler::Filter;
use crate::bindings::software::texture::vtexture::VTexture;
use crate::cube::{CUBE_FACE_COUNT, select_face};
use crate::pixel_formats::Float4;
use crate::pixel_formats::sealed::PixelFormat;

/// Trait for pixel types that can be sampled with filtering.
///
/// Filtering computes a weighted average of nearby texels.  Only float data implements this;
/// integer formats can only be fetched.
///
/// # Examples
///
/// ```
/// use texsample::bindings::software::texture::sampling::Sampleable;
/// use texsample::pixel_formats::Float4;
///
/// let samples = [(0.25, Float4::new(4.0, 0.0, 0.0, 1.0)), (0.75, Float4::new(0.0, 4.0, 0.0, 1.0))];
/// let avg = Float4::avg(&samples);
/// assert_eq!(avg, Float4::new(1.0, 3.0, 0.0, 1.0));
/// ```
pub trait Sampleable: Sized + Copy {
    /// Calculates a weighted average of samples.
    ///
    /// # Arguments
    ///
    /// * `elements` - Slice of (weight, value) pairs where weights should sum to 1.0
    fn avg(elements: &[(f32, Self)]) -> Self;
}

impl Sampleable for Float4 {
    fn avg(elements: &[(f32, Self)]) -> Self {
        let mut avg = Float4::default();
        for element in elements {
            avg.r += element.0 * element.1.r;
            avg.g += element.0 * element.1.g;
            avg.b += element.0 * element.1.b;
            avg.a += element.0 * element.1.a;
        }
        avg
    }
}

/// Performs bilinear sampling within slice `z` of `mip_level`.
///
/// Interpolates between the four texels around `uv`, with texel centers at half-integer
/// positions, clamping to edge.
///
/// # Algorithm
///
/// The function computes a weighted average of the four nearest texels:
/// - Top-left (weight: (1-fx) * (1-fy))
/// - Top-right (weight: fx * (1-fy))
/// - Bottom-left (weight: (1-fx) * fy)
/// - Bottom-right (weight: fx * fy)
///
/// Where fx and fy are the fractional distances past the top-left texel center.
pub fn sample_bilinear<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    uv: [f32; 2],
    z: i32,
    mip_level: u32,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    let extent = texture.extent(mip_level);
    if extent.width == 0 || extent.height == 0 {
        return Format::CPixel::default();
    }
    let (x0, x1, fx) = bilinear_axis(uv[0], extent.width);
    let (y0, y1, fy) = bilinear_axis(uv[1], extent.height);
    let w11 = (1.0 - fx) * (1.0 - fy); //0,0
    let w12 = (1.0 - fx) * fy; //0,1
    let w21 = fx * (1.0 - fy); //1,0
    let w22 = fx * fy; //1,1
    let v11 = texture.fetch([x0, y0, z], mip_level);
    let v12 = texture.fetch([x0, y1, z], mip_level);
    let v21 = texture.fetch([x1, y0, z], mip_level);
    let v22 = texture.fetch([x1, y1, z], mip_level);
    Format::CPixel::avg(&[(w11, v11), (w12, v12), (w21, v21), (w22, v22)])
}

/// Returns the texel containing `uv` within slice `z` of `mip_level`, clamping to edge.
pub fn sample_nearest<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    uv: [f32; 2],
    z: i32,
    mip_level: u32,
) -> Format::CPixel {
    let extent = texture.extent(mip_level);
    let x = nearest_axis(uv[0], extent.width);
    let y = nearest_axis(uv[1], extent.height);
    texture.fetch([x, y, z], mip_level)
}

fn filtered<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    uv: [f32; 2],
    z: i32,
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    match filter {
        Filter::Nearest => sample_nearest::<T, Format>(texture, uv, z, mip_level),
        Filter::Linear => sample_bilinear::<T, Format>(texture, uv, z, mip_level),
    }
}

//(first texel, second texel, weight of the second)
fn bilinear_axis(coord: f32, length: u32) -> (i32, i32, f32) {
    let last = length as i32 - 1;
    let texel_space = coord * length as f32 - 0.5;
    let base = texel_space.floor();
    let frac = if texel_space.is_finite() { texel_space - base } else { 0.0 };
    let i0 = base as i32;
    (i0.clamp(0, last), (i0.saturating_add(1)).clamp(0, last), frac)
}

fn nearest_axis(coord: f32, length: u32) -> i32 {
    let last = (length as i32 - 1).max(0);
    ((coord * length as f32).floor() as i32).clamp(0, last)
}

/// Rounds an unnormalized layer coordinate to an existing layer.
pub fn select_layer(layer: f32, layers: u32) -> i32 {
    let last = (layers as i32 - 1).max(0);
    ((layer + 0.5).floor() as i32).clamp(0, last)
}

/// Picks the depth slice containing a normalized depth coordinate.
pub fn select_depth(w: f32, depth: u32) -> i32 {
    nearest_axis(w, depth)
}

pub fn sample_1d<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    u: f32,
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    filtered::<T, Format>(texture, [u, 0.5], 0, mip_level, filter)
}

pub fn sample_1d_array<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    coord: [f32; 2],
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    let layer = select_layer(coord[1], texture.extent(mip_level).depth_or_layers);
    filtered::<T, Format>(texture, [coord[0], 0.5], layer, mip_level, filter)
}

pub fn sample_2d<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    uv: [f32; 2],
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    filtered::<T, Format>(texture, uv, 0, mip_level, filter)
}

pub fn sample_2d_array<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    coord: [f32; 3],
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    let layer = select_layer(coord[2], texture.extent(mip_level).depth_or_layers);
    filtered::<T, Format>(texture, [coord[0], coord[1]], layer, mip_level, filter)
}

pub fn sample_3d<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    coord: [f32; 3],
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    let slice = select_depth(coord[2], texture.extent(mip_level).depth_or_layers);
    filtered::<T, Format>(texture, [coord[0], coord[1]], slice, mip_level, filter)
}

/// Samples a cube along `direction`.  The direction need not be normalized.
pub fn sample_cube<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    direction: [f32; 3],
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    let (face, uv) = select_face(direction);
    filtered::<T, Format>(texture, uv, face.index(), mip_level, filter)
}

/// Samples cube `coord[3]` of a cube array along the direction `coord[0..3]`.
pub fn sample_cube_array<T: VTexture<Format>, Format: PixelFormat>(
    texture: &T,
    coord: [f32; 4],
    mip_level: u32,
    filter: Filter,
) -> Format::CPixel
where
    Format::CPixel: Sampleable,
{
    let cubes = texture.extent(mip_level).depth_or_layers / CUBE_FACE_COUNT as u32;
    let cube = select_layer(coord[3], cubes);
    let (face, uv) = select_face([coord[0], coord[1], coord[2]]);
    let layer = cube * CUBE_FACE_COUNT + face.index();
    filtered::<T, Format>(texture, uv, layer, mip_level, filter)
}
