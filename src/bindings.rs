/*! Defines binding types */

pub mod coordinates;
pub mod sampler;
pub mod shape;
pub mod slots;
pub mod software;

pub use slots::Bindings;
