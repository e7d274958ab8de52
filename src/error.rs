// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::bindings::shape::ResourceShape;
use crate::pixel_formats::NumericInterpretation;

/// Errors raised at the boundary of the sampling dispatcher and while building software textures.
///
/// Out-of-range coordinates and unbound slots are deliberately absent: those are handled by
/// the addressing primitives, which read zero.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A raw shape tag outside the enumerated set.
    #[error("invalid resource shape tag {0}")]
    InvalidShape(u32),
    /// A shape that the interpretation has no binding for (cubes on integer data).
    #[error("{shape:?} has no {interpretation:?} binding")]
    InterpretationMismatch {
        shape: ResourceShape,
        interpretation: NumericInterpretation,
    },
    /// A cube face index outside `0..6`.
    #[error("cube face index {0} is outside 0..6")]
    InvalidCubeFace(i32),
    /// A descriptor that can't describe any texture of its shape.
    #[error("texture {name}: {reason}")]
    InvalidDescriptor { name: String, reason: &'static str },
    /// Level data whose length disagrees with the descriptor.
    #[error("texture {name} mip {mip_level}: expected {expected} texels, got {actual}")]
    DataLength {
        name: String,
        mip_level: u32,
        expected: usize,
        actual: usize,
    },
    /// A texture bound into a slot of a different shape.
    #[error("texture {name} is {actual:?}, slot expects {expected:?}")]
    ShapeMismatch {
        name: String,
        expected: ResourceShape,
        actual: ResourceShape,
    },
    /// A region with more pixels than a `usize` can count.
    #[error("region {width}x{height} has too many pixels")]
    RegionTooLarge { width: u32, height: u32 },
}
