//! Pin hashing and the username/pin authentication flows.

use sha2::{Digest, Sha256};
use sqlx::{Pool, Sqlite};

use crate::database::db::queries::user::{self, UserChanges};
use crate::database::models::User;
use crate::error::{AppError, AuthFailure};

/// One-way digest of a pin: SHA-256 over the pin concatenated with the
/// process-wide secret, as a lowercase hex string. Deterministic for a fixed
/// secret, so stored digests can be compared directly.
pub fn hash_pin(secret: &str, pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verifies a claimed username/pin pair against the stored digest.
pub async fn authenticate(
    pool: &Pool<Sqlite>,
    secret: &str,
    username: &str,
    pin: &str,
) -> Result<User, AppError> {
    let supplied_digest = hash_pin(secret, pin);

    let user = user::get_by_username(pool, username)
        .await?
        .ok_or(AppError::Auth(AuthFailure::UnknownUser))?;

    match &user.pin {
        Some(stored) if *stored == supplied_digest => Ok(user),
        _ => Err(AppError::Auth(AuthFailure::WrongPin)),
    }
}

/// Resets the stored digest to the hash of the username itself, so the
/// account can be recovered by entering the username as the pin.
///
/// TODO: replace with a random one-time token; a reset pin derived from the
/// username is guessable by anyone who knows the account exists.
pub async fn reset_pin(
    pool: &Pool<Sqlite>,
    secret: &str,
    username: &str,
) -> Result<bool, AppError> {
    let digest = hash_pin(secret, username);
    let changes = UserChanges {
        pin: Some(digest),
        ..UserChanges::default()
    };
    match user::update_by_username(pool, username, changes).await {
        Ok(_) => Ok(true),
        Err(AppError::NotFound) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Replaces the stored digest with `hash(new_pin)`, but only after the old
/// pin authenticates. Returns `false` without touching the row when it does
/// not.
pub async fn change_pin(
    pool: &Pool<Sqlite>,
    secret: &str,
    username: &str,
    old_pin: &str,
    new_pin: &str,
) -> Result<bool, AppError> {
    match authenticate(pool, secret, username, old_pin).await {
        Ok(_) => {}
        Err(AppError::Auth(_)) => return Ok(false),
        Err(err) => return Err(err),
    }

    let changes = UserChanges {
        pin: Some(hash_pin(secret, new_pin)),
        ..UserChanges::default()
    };
    match user::update_by_username(pool, username, changes).await {
        Ok(_) => Ok(true),
        Err(AppError::NotFound) => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_pin_is_deterministic() {
        assert_eq!(hash_pin("salt", "1234"), hash_pin("salt", "1234"));
    }

    #[test]
    fn hash_pin_depends_on_the_secret() {
        assert_ne!(hash_pin("salt-a", "1234"), hash_pin("salt-b", "1234"));
    }

    #[test]
    fn hash_pin_emits_lowercase_hex_sha256() {
        let digest = hash_pin("salt", "1234");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // "1234salt" hashed with a reference implementation.
        assert_eq!(
            digest,
            "4b3bed8af7b7612e8c1e25f63ba24496f5b16b2df44efb2db7ce3cb24b7e96f7"
        );
    }
}
