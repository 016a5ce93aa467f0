//! Core types shared across showoff.
//!
//! Currently this is the error layer: [`SlideError`] for typed handling and
//! [`ErrorContext`] / [`user_friendly_error`] for reporting.

pub mod error;

pub use error::{ErrorContext, SlideError, user_friendly_error};
