//! # UI Components Module
//!
//! ## Module Organization:
//! - `header` - Application header with title, pretty date and summary label
//! - `schedule_grid` - Week grid rendering (hour rows × day columns)

pub mod header;
pub mod schedule_grid;

pub use schedule_grid::*;
