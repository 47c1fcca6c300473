pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod session_context;
pub mod session_store;
