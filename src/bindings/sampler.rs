// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/// How a normalized coordinate is turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    ///The texel containing the coordinate.
    #[default]
    Nearest,
    ///A single bilinear tap on one level.  Only float data can be filtered.
    Linear,
}

impl Filter {
    pub const fn from_linear(linear: bool) -> Self {
        if linear { Filter::Linear } else { Filter::Nearest }
    }
}
