//! Utility functions for audio analysis.
//!
//! This module provides a collection of utility functions that make common
//! audio analysis tasks more convenient and intuitive.
//!
//! # Modules
//!
//! - [`audio_math`] - Decibel, frequency-axis, and time-axis conversions
//! - [`generation`] - Audio signal generation utilities

pub mod audio_math;
pub mod generation;

// Re-export common utilities
pub use audio_math::*;
pub use generation::*;
