pub mod guard_decision;
pub mod guard_state;
