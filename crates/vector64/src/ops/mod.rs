//! Operation families on [`Vector64`](crate::Vector64)
//!
//! Every family is a set of inherent methods; this module only groups them.
//!
//! - `arithmetic`: wrapping and saturating arithmetic, the min/max family, `lerp`
//! - `bitwise`: bitwise logic, `conditional_select`, integer shifts
//! - `compare`: comparison masks, their `_all`/`_any` reductions, classification masks
//! - `math`: square root, rounding, transcendentals
//! - `memory`: loads, stores, slice and byte transfers
//! - `reduce`: sums, counts, searches, most-significant-bit extraction
//! - `shape`: widen, narrow, shuffles, reinterpretation, numeric conversion
//! - `operators`: `core::ops` impls

mod arithmetic;
mod bitwise;
mod compare;
mod math;
mod memory;
mod operators;
mod reduce;
mod shape;

pub use memory::ALIGNMENT;
