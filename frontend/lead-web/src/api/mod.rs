pub mod admin;
pub mod error;
pub mod extractors;
pub mod unsubscribe;
pub mod unsubscribe_request;
