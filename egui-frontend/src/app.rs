//! # App Module
//!
//! Central import point for all UI functionality. Other modules can pull in
//! everything they need with `use crate::ui::*`.

// Re-export all UI components for easy access
pub use crate::ui::*;
