#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! vector64: fixed-width 64-bit SIMD vectors over the primitive numeric types
//!
//! # Features
//!
//! - **One generic type**: `Vector64<T>` for every primitive whose size divides 8 bytes
//! - **Closed element set**: unsupported lane types are rejected at compile time
//! - **Bit-exact fallback**: every operation has a scalar lane loop that native kernels match
//! - **Runtime dispatch**: SSE4.1/SSSE3 on x86_64 and NEON on aarch64, detected once and cached
//! - **No allocations**: `no_std`, every value lives in a single 8-byte register

// Scalar element capability table
pub mod element;

// Backend implementations
pub mod backends;

// CPU feature detection
pub mod dispatch;

// Operation families
pub mod ops;

mod error;
mod vector;
mod vector128;

pub use backends::{Backend, NativeBackend, ScalarBackend};
pub use dispatch::{is_hardware_accelerated, Acceleration, CpuFeatures};
pub use element::{
    ConvertToFloat, ConvertToInteger, Element, ElementKind, FloatElement, IntElement, Narrow,
    Widen,
};
pub use error::{Result, VectorError};
pub use vector::Vector64;
pub use vector128::Vector128;
