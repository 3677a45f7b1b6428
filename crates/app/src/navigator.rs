//! Terminal rendering of "go back to the login page"

use gradely_application::ports::SessionNavigator;

/// Prints a sign-in hint when the session is terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliNavigator;

impl SessionNavigator for CliNavigator {
    fn redirect_to(&self, entry_point: &str) {
        eprintln!("Your session has ended ({entry_point}). Run `gradely login` to sign in again.");
    }
}
