//! Filtering strategy implementations
//!
//! Each submodule implements one family from the engine's strategy set:
//!
//! - [`lowpass`] - fixed-point Chebyshev and Bessel IIR approximations
//! - [`median`] - median-of-three impulse rejection, three variants
//! - [`tracking`] - adaptive growing-shrinking trackers
//!
//! The functions here are pure over the state they are handed and carry no
//! strategy selection; [`crate::engine::FilterEngine`] owns the state and the
//! dispatch. They are public so callers with their own state management can
//! use a single strategy without the engine wrapper.

pub mod lowpass;
pub mod median;
pub mod tracking;
