pub mod schedule_state;

pub use schedule_state::*;
