use crate::SessionResult;

/// Key/value storage the session lives in.
///
/// Implementations take `&self` so one store can be shared between the
/// client, the dispatcher and whatever view is running.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removing a key that is not present is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;
}
