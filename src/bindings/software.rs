// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! CPU-side resources that stand in for bound GPU textures. */

pub mod texture;
