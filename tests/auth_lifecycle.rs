//! Store-level coverage of the account lifecycle: hashing, authentication,
//! uniqueness, partial updates and idempotent deletion.

mod common;

use std::str::FromStr;

use budget_diary::auth;
use budget_diary::database::db::queries::user::{self, UserChanges};
use budget_diary::error::{AppError, AuthFailure};
use rust_decimal::Decimal;

use common::{test_pool, TEST_SECRET};

#[tokio::test]
async fn create_stores_digest_and_authenticates() {
    let pool = test_pool().await;

    let digest = auth::hash_pin(TEST_SECRET, "1234");
    let created = user::create(&pool, "alice", &digest).await.unwrap();
    assert_eq!(created.discord_username, "alice");
    assert_eq!(created.pin.as_deref(), Some(digest.as_str()));
    assert_eq!(created.balance, Decimal::from_str("0.00").unwrap());

    let authenticated = auth::authenticate(&pool, TEST_SECRET, "alice", "1234")
        .await
        .unwrap();
    assert_eq!(authenticated.id, created.id);
}

#[tokio::test]
async fn authenticate_rejects_wrong_pin() {
    let pool = test_pool().await;
    let digest = auth::hash_pin(TEST_SECRET, "1234");
    user::create(&pool, "alice", &digest).await.unwrap();

    let result = auth::authenticate(&pool, TEST_SECRET, "alice", "0000").await;
    assert!(matches!(
        result,
        Err(AppError::Auth(AuthFailure::WrongPin))
    ));
}

#[tokio::test]
async fn authenticate_rejects_unknown_user() {
    let pool = test_pool().await;

    let result = auth::authenticate(&pool, TEST_SECRET, "nobody", "1234").await;
    assert!(matches!(
        result,
        Err(AppError::Auth(AuthFailure::UnknownUser))
    ));
}

#[tokio::test]
async fn duplicate_username_is_rejected_and_row_count_stays_one() {
    let pool = test_pool().await;
    let digest = auth::hash_pin(TEST_SECRET, "1234");

    user::create(&pool, "bob", &digest).await.unwrap();
    let second = user::create(&pool, "bob", &digest).await;
    assert!(matches!(second, Err(AppError::Duplicate)));

    let all = user::get_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn update_with_balance_only_keeps_username_and_digest() {
    let pool = test_pool().await;
    let digest = auth::hash_pin(TEST_SECRET, "1234");
    let created = user::create(&pool, "alice", &digest).await.unwrap();

    let changes = UserChanges {
        balance: Some(Decimal::from_str("42.50").unwrap()),
        ..UserChanges::default()
    };
    let updated = user::update_by_id(&pool, created.id, changes).await.unwrap();

    assert_eq!(updated.balance, Decimal::from_str("42.50").unwrap());
    assert_eq!(updated.discord_username, "alice");
    assert_eq!(updated.pin.as_deref(), Some(digest.as_str()));
    assert_eq!(updated.date_created, created.date_created);
}

#[tokio::test]
async fn rename_to_taken_username_is_a_duplicate() {
    let pool = test_pool().await;
    let digest = auth::hash_pin(TEST_SECRET, "1234");
    user::create(&pool, "alice", &digest).await.unwrap();
    let bob = user::create(&pool, "bob", &digest).await.unwrap();

    let changes = UserChanges {
        discord_username: Some("alice".to_string()),
        ..UserChanges::default()
    };
    let result = user::update_by_id(&pool, bob.id, changes).await;
    assert!(matches!(result, Err(AppError::Duplicate)));

    // Rolled back: bob still holds his name.
    let bob_again = user::get_by_id(&pool, bob.id).await.unwrap().unwrap();
    assert_eq!(bob_again.discord_username, "bob");
}

#[tokio::test]
async fn update_of_missing_user_is_not_found() {
    let pool = test_pool().await;

    let result = user::update_by_id(&pool, 999, UserChanges::default()).await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let result = user::update_by_username(&pool, "ghost", UserChanges::default()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_of_missing_rows_reports_false_without_error() {
    let pool = test_pool().await;

    assert!(!user::delete_by_id(&pool, 999).await.unwrap());
    assert!(!user::delete_by_username(&pool, "carol").await.unwrap());
}

#[tokio::test]
async fn delete_frees_the_username_for_reuse() {
    let pool = test_pool().await;
    let digest = auth::hash_pin(TEST_SECRET, "1234");

    let first = user::create(&pool, "alice", &digest).await.unwrap();
    assert!(user::delete_by_username(&pool, "alice").await.unwrap());
    assert!(user::get_by_id(&pool, first.id).await.unwrap().is_none());

    let second = user::create(&pool, "alice", &digest).await.unwrap();
    assert_ne!(second.id, first.id);
}

#[tokio::test]
async fn change_pin_requires_the_old_pin() {
    let pool = test_pool().await;
    let digest = auth::hash_pin(TEST_SECRET, "1234");
    user::create(&pool, "alice", &digest).await.unwrap();

    // Wrong old pin: refused, digest untouched.
    assert!(!auth::change_pin(&pool, TEST_SECRET, "alice", "0000", "5678")
        .await
        .unwrap());
    let unchanged = user::get_by_username(&pool, "alice").await.unwrap().unwrap();
    assert_eq!(unchanged.pin.as_deref(), Some(digest.as_str()));

    // Right old pin: digest replaced with the hash of the new pin.
    assert!(auth::change_pin(&pool, TEST_SECRET, "alice", "1234", "5678")
        .await
        .unwrap());
    auth::authenticate(&pool, TEST_SECRET, "alice", "5678")
        .await
        .unwrap();
    let stale = auth::authenticate(&pool, TEST_SECRET, "alice", "1234").await;
    assert!(matches!(stale, Err(AppError::Auth(AuthFailure::WrongPin))));
}

#[tokio::test]
async fn reset_pin_falls_back_to_the_username() {
    let pool = test_pool().await;
    let digest = auth::hash_pin(TEST_SECRET, "1234");
    user::create(&pool, "alice", &digest).await.unwrap();

    assert!(auth::reset_pin(&pool, TEST_SECRET, "alice").await.unwrap());
    auth::authenticate(&pool, TEST_SECRET, "alice", "alice")
        .await
        .unwrap();

    assert!(!auth::reset_pin(&pool, TEST_SECRET, "ghost").await.unwrap());
}
