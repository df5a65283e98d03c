use std::env;

/// The environment variable holding the expected administrator API key.
pub const ADMIN_API_KEY_VAR: &str = "ADMIN_API_KEY";

/// A named-value configuration source for the authorizer.
///
/// Abstracting the lookup lets tests supply arbitrary configurations without
/// mutating real process state.
pub trait ConfigSource {
    /// Get the value of a configuration entry, or `None` when it is unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// A [`ConfigSource`] backed by the process environment.
///
/// Values are read fresh on every lookup rather than cached at startup.
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}
