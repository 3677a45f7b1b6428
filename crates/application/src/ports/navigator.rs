//! Session navigator port

/// Receives the instruction to send the user back to re-authenticate.
///
/// Called once per session termination, after the credential store
/// has been cleared.
pub trait SessionNavigator: Send + Sync {
    /// Navigates to the given entry point (e.g. `/login`).
    fn redirect_to(&self, entry_point: &str);
}

/// Navigator that does nothing; for headless consumers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl SessionNavigator for NoopNavigator {
    fn redirect_to(&self, _entry_point: &str) {}
}
