//! Mock authentication records.
//!
//! There is no backend: login and signup fabricate a user after a simulated
//! delay (the delay lives in the web layer) and persist it under one key.
//! The wire form keeps the stored blob's camelCase names.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Local-storage key holding the serialized user record.
pub const USER_KEY: &str = "campusCatalystUser";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub email_verified: bool,
    pub created_at: String,
}

impl User {
    /// Login derives the display name from the email local part and treats
    /// the address as already verified.
    pub fn for_login(email: &str, id: String, created_at: String) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id,
            email: email.to_string(),
            name,
            wallet_address: None,
            email_verified: true,
            created_at,
        }
    }

    /// Signup keeps the given name and starts unverified.
    pub fn for_signup(name: &str, email: &str, id: String, created_at: String) -> Self {
        Self {
            id,
            email: email.to_string(),
            name: name.to_string(),
            wallet_address: None,
            email_verified: false,
            created_at,
        }
    }
}

/// The persisted session, one user record under [`USER_KEY`].
pub struct Session<S> {
    backend: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The stored user, if any. Unlike the campaign list, a corrupt user
    /// record is an error: the caller clears it and returns to login.
    pub fn current(&self) -> Result<Option<User>, StoreError> {
        let Some(raw) = self.backend.get(USER_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(format!("user record: {e}")))
    }

    pub fn save(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| StoreError::Backend(format!("serialize user: {e}")))?;
        self.backend.set(USER_KEY, &raw)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn login_takes_name_from_email_local_part() {
        let u = User::for_login("ada@campus.edu", "abc123".into(), "2025-06-01".into());
        assert_eq!(u.name, "ada");
        assert!(u.email_verified);
        assert!(u.wallet_address.is_none());
    }

    #[test]
    fn signup_starts_unverified() {
        let u = User::for_signup("Ada", "ada@campus.edu", "abc123".into(), "2025-06-01".into());
        assert_eq!(u.name, "Ada");
        assert!(!u.email_verified);
    }

    #[test]
    fn session_round_trips_under_the_user_key() {
        let session = Session::new(MemoryStore::new());
        assert_eq!(session.current().unwrap(), None);

        let u = User::for_login("ada@campus.edu", "abc123".into(), "2025-06-01".into());
        session.save(&u).unwrap();
        assert_eq!(session.current().unwrap(), Some(u));

        session.clear().unwrap();
        assert_eq!(session.current().unwrap(), None);
    }

    #[test]
    fn wallet_address_is_omitted_until_connected() {
        let session = Session::new(MemoryStore::new());
        let mut u = User::for_login("ada@campus.edu", "abc123".into(), "2025-06-01".into());
        session.save(&u).unwrap();
        let raw = session.backend.get(USER_KEY).unwrap().unwrap();
        assert!(!raw.contains("walletAddress"));

        u.wallet_address = Some("ADDR".into());
        session.save(&u).unwrap();
        let raw = session.backend.get(USER_KEY).unwrap().unwrap();
        assert!(raw.contains("\"walletAddress\":\"ADDR\""));
    }

    #[test]
    fn corrupt_user_record_is_an_error() {
        let session = Session::new(MemoryStore::seed(USER_KEY, "{broken"));
        assert!(matches!(session.current(), Err(StoreError::Corrupt(_))));
    }
}
