//! Authenticated session handed to every protected call.

use std::fmt;

use serde::Deserialize;

/// Public part of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

/// A bearer token plus the identity it was issued for.
///
/// Sessions are plain values passed explicitly into each call; nothing is
/// stored globally.
#[derive(Clone, Deserialize)]
pub struct Session {
    token: String,
    user: Option<UserInfo>,
}

impl Session {
    /// Resume from a token obtained earlier. The identity is unknown until the
    /// server resolves it.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: None,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[redacted]")
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_auth_response() {
        let session: Session = serde_json::from_str(
            r#"{"token":"abc.def.ghi","user":{"name":"Ada","email":"ada@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(session.token(), "abc.def.ghi");
        assert_eq!(session.user().unwrap().name, "Ada");
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::from_token("abc.def.ghi");
        assert!(!format!("{:?}", session).contains("abc.def.ghi"));
        assert!(session.user().is_none());
    }
}
