#![forbid(unsafe_code)]

//! Bit-exact numeric core of the Espresso (PowerPC 750 family) FPU model.
//!
//! The 750-line estimate instructions return implementation-defined,
//! ROM-driven approximations, and guest code depends on the exact result
//! bits. This crate reproduces that datapath:
//! - [`fres`] / [`frsqrte`]: the reciprocal and reciprocal-square-root
//!   estimates, table lookup plus linear interpolation on raw bit patterns
//! - [`classify_f64`] / [`classify_f32`]: operand classification as reported
//!   in the FPSCR's FPRF field, with [`FpClass`] carrying the architected
//!   five-bit encodings
//!
//! Instruction decode, FPSCR bookkeeping, and the paired-single register
//! model live in the interpreter crates; everything here is pure and
//! allocation-free.

pub mod bits;
pub mod classify;
pub mod estimate;

pub use classify::{classify_f32, classify_f64, FpClass, Fprf, InvalidFpClass};
pub use estimate::{fres, frsqrte};
