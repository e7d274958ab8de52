// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Type-safe pixel format definitions for sampled textures.
//!
//! A captured texture is read through exactly one of three numeric interpretations.
//! Each interpretation is a zero-sized format type with an associated element type:
//!
//! - [`UInt`] - four 32-bit unsigned integer channels, read as [`UInt4`]
//! - [`SInt`] - four 32-bit signed integer channels, read as [`SInt4`]
//! - [`Float`] - four 32-bit float channels, read as [`Float4`]
//!
//! # Design Philosophy
//!
//! Formats are types rather than enum values so that a `Texture<UInt>` can never be bound
//! where a `Texture<Float>` is expected.  The runtime tag, [`NumericInterpretation`], exists
//! only at the boundary where a caller picks which dispatcher to call.
//!
//! # Examples
//!
//! ```
//! use texsample::pixel_formats::{Float4, f16};
//!
//! // Half-float captures widen to Float4 before they are stored.
//! let wide = Float4::from([f16::from_f32(0.5), f16::ONE, f16::ZERO, f16::ONE]);
//! assert_eq!(wide.r, 0.5);
//! assert_eq!(wide.g, 1.0);
//! ```

/*
Quick note on type design.  We could describe interpretations with an enum alone, and store
texels in a `Vec<[u32; 4]>` that gets reinterpreted per call.  The inspection front end only
knows the interpretation as a runtime value anyway.

The issue is that the bindings must stay statically distinct: a signed capture must not be
readable through the unsigned set.  So the runtime value picks the entry point, and everything
after the entry point is typed.
 */

use crate::pixel_formats::sealed::PixelFormat;

pub use half::f16;

/// Sealed traits for pixel format type safety.
///
/// Only the formats defined in this crate can be used with texture APIs.
pub(crate) mod sealed {
    use std::fmt::Debug;

    /// Core trait for pixel format types.
    pub trait PixelFormat: Debug + Send + Sync + 'static {
        /// Which binding set this format is read through.
        const INTERPRETATION: super::NumericInterpretation;

        /// The concrete element type stored in, and returned from, textures of this format.
        type CPixel: Copy + Debug + Default + PartialEq + Send + Sync + 'static;
    }
}

/// The runtime tag for a numeric interpretation.
///
/// Selects one of three disjoint binding sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericInterpretation {
    /// Unsigned integer channels.
    UInt,
    /// Signed integer channels.
    SInt,
    /// Floating point channels.
    Float,
}

impl NumericInterpretation {
    /// Whether this interpretation has cube and cube-array bindings.
    ///
    /// Integer data can't be filtered, and cube addressing is a sampling operation, so only
    /// the float interpretation exposes cube shapes.
    pub const fn supports_cubes(self) -> bool {
        matches!(self, NumericInterpretation::Float)
    }
}

/// Unsigned integer format with four 32-bit channels.
#[derive(Debug, Clone, Copy)]
pub struct UInt;
impl PixelFormat for UInt {
    const INTERPRETATION: NumericInterpretation = NumericInterpretation::UInt;
    type CPixel = UInt4;
}

/// Signed integer format with four 32-bit channels.
#[derive(Debug, Clone, Copy)]
pub struct SInt;
impl PixelFormat for SInt {
    const INTERPRETATION: NumericInterpretation = NumericInterpretation::SInt;
    type CPixel = SInt4;
}

/// Floating point format with four 32-bit channels.
///
/// The only format that supports filtered sampling and cube shapes.
#[derive(Debug, Clone, Copy)]
pub struct Float;
impl PixelFormat for Float {
    const INTERPRETATION: NumericInterpretation = NumericInterpretation::Float;
    type CPixel = Float4;
}

/// Element type for [`UInt`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UInt4 {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

/// Element type for [`SInt`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SInt4 {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

/// Element type for [`Float`].
///
/// # Examples
///
/// ```
/// use texsample::pixel_formats::Float4;
///
/// let c = Float4::new(1.0, 0.5, 0.25, 1.0);
/// assert_eq!(c.to_array(), [1.0, 0.5, 0.25, 1.0]);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Float4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl UInt4 {
    pub const fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn to_array(self) -> [u32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl SInt4 {
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn to_array(self) -> [i32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Float4 {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u32; 4]> for UInt4 {
    fn from(v: [u32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<[i32; 4]> for SInt4 {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<[f32; 4]> for Float4 {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<[f16; 4]> for Float4 {
    /// Widen a half-float pixel.  Every f16 is exactly representable as f32.
    fn from(v: [f16; 4]) -> Self {
        Self::new(v[0].to_f32(), v[1].to_f32(), v[2].to_f32(), v[3].to_f32())
    }
}
