mod error;
mod unsubscribe;
