//! User accounts as seen by the client

use serde::{Deserialize, Serialize};

/// The authenticated user (`/api/me/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User id
    pub id: u64,
    /// Login email
    pub email: String,
    /// Staff members act as supervisors
    #[serde(default)]
    pub is_staff: bool,
}

impl CurrentUser {
    /// Returns true if the user can supervise projects and review submissions.
    #[must_use]
    pub const fn is_supervisor(&self) -> bool {
        self.is_staff
    }
}

/// An entry of the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// User id
    pub id: u64,
    /// Login email
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_decoding() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"id":4,"email":"prof@uni.fr","is_staff":true}"#).unwrap();
        assert!(user.is_supervisor());

        let user: CurrentUser = serde_json::from_str(r#"{"id":5,"email":"s@uni.fr"}"#).unwrap();
        assert!(!user.is_supervisor());
    }
}
