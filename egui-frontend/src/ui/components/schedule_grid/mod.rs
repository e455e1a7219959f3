pub mod rendering;
pub mod styling;
pub mod types;

// Re-export types and styling for easy access
pub use styling::*;
pub use types::*;
