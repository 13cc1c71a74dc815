//! Array coercion and numeric helpers shared by the aeolis simulation code.

pub mod coerce;
pub mod domain;
pub mod numerics;

pub use coerce::{ArrayLike, isarray, isiterable, makeiterable};
pub use numerics::{
    InterpOptions, InterpolationError, NormalizeError, NormalizeOptions, interp, interp_array,
    normalize,
};
