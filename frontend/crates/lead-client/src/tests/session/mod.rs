mod file_store;
mod memory_store;
mod session_context;
