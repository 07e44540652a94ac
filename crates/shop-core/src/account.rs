//! # Account Directory
//!
//! User registration and authentication for one running process. One
//! directory exists per process and is passed by reference to whoever
//! needs it; accounts do not persist across restarts.
//!
//! Credentials are stored and compared as plain text. That matches the
//! simulated scope of this crate; hardening (hashing, rate limits) is
//! explicitly out of scope.

use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Minimum length for usernames and passwords
const MIN_CREDENTIAL_LEN: usize = 3;

/// The active user handed to checkout. A value snapshot of the stored
/// account; mutating it does not touch the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique username (>= 3 chars)
    pub username: String,

    /// Validated email address
    pub email: String,

    /// Shipping address, set before checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

/// A stored account record
#[derive(Debug, Clone)]
struct Account {
    username: String,
    password: String,
    email: String,
    shipping_address: Option<String>,
}

impl Account {
    fn to_user(&self) -> User {
        User {
            username: self.username.clone(),
            email: self.email.clone(),
            shipping_address: self.shipping_address.clone(),
        }
    }
}

/// Registry of accounts for one running process
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Register a new account.
    ///
    /// Fails with `WeakCredential` if username or password is shorter
    /// than 3 characters, `DuplicateUsername` if the username is taken,
    /// or `InvalidEmailFormat` if the email does not validate. On success
    /// the account is stored and a `User` with no shipping address is
    /// returned.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        email: &str,
    ) -> ShopResult<User> {
        if username.len() < MIN_CREDENTIAL_LEN {
            return Err(ShopError::WeakCredential { field: "Username" });
        }
        if password.len() < MIN_CREDENTIAL_LEN {
            return Err(ShopError::WeakCredential { field: "Password" });
        }
        if self.find(username).is_some() {
            return Err(ShopError::DuplicateUsername {
                username: username.to_string(),
            });
        }
        if !is_valid_email(email) {
            return Err(ShopError::InvalidEmailFormat {
                email: email.to_string(),
            });
        }

        let account = Account {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            shipping_address: None,
        };
        let user = account.to_user();
        self.accounts.push(account);

        info!("Registered user '{}'", username);
        Ok(user)
    }

    /// Authenticate against a stored account.
    ///
    /// Fails with `InvalidCredentials` unless both fields match exactly.
    /// The returned `User` carries whatever shipping address was last set
    /// for that account in this process, so an address survives re-login.
    pub fn authenticate(&self, username: &str, password: &str) -> ShopResult<User> {
        let account = self
            .find(username)
            .filter(|a| a.password == password)
            .ok_or(ShopError::InvalidCredentials)?;

        info!("User '{}' logged in", username);
        Ok(account.to_user())
    }

    /// Persist a shipping address on the stored account.
    ///
    /// Fails with `InvalidCredentials` if the username is unknown, which
    /// cannot happen for a username obtained from this directory.
    pub fn set_shipping_address(&mut self, username: &str, address: &str) -> ShopResult<()> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.username == username)
            .ok_or(ShopError::InvalidCredentials)?;

        account.shipping_address = Some(address.to_string());
        Ok(())
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if no accounts are registered
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }
}

/// An email is valid when it has an '@' that is neither first nor last,
/// followed somewhere later by a '.' that is not the final character.
pub fn is_valid_email(email: &str) -> bool {
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 || at == email.len() - 1 {
        return false;
    }
    match email[at..].find('.') {
        Some(rel_dot) => at + rel_dot != email.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_authenticate_round_trip() {
        let mut directory = AccountDirectory::new();
        let registered = directory.register("alice", "pw123", "a@b.com").unwrap();
        assert_eq!(registered.username, "alice");
        assert_eq!(registered.email, "a@b.com");
        assert!(registered.shipping_address.is_none());

        let user = directory.authenticate("alice", "pw123").unwrap();
        assert_eq!(user.username, registered.username);
        assert_eq!(user.email, registered.email);

        assert_eq!(
            directory.authenticate("alice", "wrong"),
            Err(ShopError::InvalidCredentials)
        );
        assert_eq!(
            directory.authenticate("nobody", "pw123"),
            Err(ShopError::InvalidCredentials)
        );
    }

    #[test]
    fn test_register_validations() {
        let mut directory = AccountDirectory::new();

        assert_eq!(
            directory.register("al", "pw123", "a@b.com"),
            Err(ShopError::WeakCredential { field: "Username" })
        );
        assert_eq!(
            directory.register("alice", "pw", "a@b.com"),
            Err(ShopError::WeakCredential { field: "Password" })
        );
        assert_eq!(
            directory.register("alice", "pw123", "not-an-email"),
            Err(ShopError::InvalidEmailFormat {
                email: "not-an-email".to_string()
            })
        );

        directory.register("alice", "pw123", "a@b.com").unwrap();
        assert_eq!(
            directory.register("alice", "other", "c@d.com"),
            Err(ShopError::DuplicateUsername {
                username: "alice".to_string()
            })
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@shop.example"));

        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@b."));

        // The first dot after the '@' only has to be non-trailing
        assert!(is_valid_email("a@b.co."));
    }

    #[test]
    fn test_shipping_address_survives_relogin() {
        let mut directory = AccountDirectory::new();
        directory.register("alice", "pw123", "a@b.com").unwrap();
        directory
            .set_shipping_address("alice", "Manila, Metro Manila")
            .unwrap();

        let user = directory.authenticate("alice", "pw123").unwrap();
        assert_eq!(
            user.shipping_address.as_deref(),
            Some("Manila, Metro Manila")
        );
    }

    #[test]
    fn test_set_address_unknown_user() {
        let mut directory = AccountDirectory::new();
        assert_eq!(
            directory.set_shipping_address("ghost", "Nowhere"),
            Err(ShopError::InvalidCredentials)
        );
    }
}
