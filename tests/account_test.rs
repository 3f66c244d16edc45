mod common;

use alumni_jobs_core::dto::account_dto::{LoginPayload, RegisterPayload};
use alumni_jobs_core::error::Error;
use alumni_jobs_core::models::user::{User, UserRole};
use alumni_jobs_core::store::USERS_KEY;
use validator::Validate;

fn payload(username: &str, password: &str, role: UserRole) -> RegisterPayload {
    RegisterPayload {
        username: username.to_string(),
        password: password.to_string(),
        role,
    }
}

#[test]
fn register_assigns_id_and_persists() {
    let state = common::app_state();

    let user = state
        .account_service
        .register(payload("alice", "secret1", UserRole::JobSeeker))
        .expect("register");

    assert!(!user.id.is_empty());
    assert_eq!(user.role, UserRole::JobSeeker);

    let found = state
        .account_service
        .find_by_username("alice")
        .expect("lookup")
        .expect("alice exists");
    assert_eq!(found.id, user.id);
}

#[test]
fn duplicate_username_rejected_and_directory_unchanged() {
    let state = common::app_state();

    state
        .account_service
        .register(payload("alice", "secret1", UserRole::JobSeeker))
        .expect("first register");

    let err = state
        .account_service
        .register(payload("alice", "other", UserRole::JobPoster))
        .expect_err("second register must fail");
    assert!(matches!(err, Error::DuplicateUsername(name) if name == "alice"));

    let users: Vec<User> = state
        .store
        .read(USERS_KEY)
        .expect("read users")
        .unwrap_or_default();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, UserRole::JobSeeker);
}

#[test]
fn username_uniqueness_is_case_sensitive() {
    let state = common::app_state();

    state
        .account_service
        .register(payload("alice", "secret1", UserRole::JobSeeker))
        .expect("register alice");

    // Different case is a different username.
    state
        .account_service
        .register(payload("Alice", "secret1", UserRole::JobPoster))
        .expect("register Alice");
}

#[test]
fn password_is_stored_hashed() {
    let state = common::app_state();

    let user = state
        .account_service
        .register(payload("bob", "hunter22", UserRole::JobPoster))
        .expect("register");

    assert_ne!(user.password_hash, "hunter22");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[test]
fn wrong_password_is_invalid_credentials() {
    let state = common::app_state();

    state
        .account_service
        .register(payload("alice", "secret1", UserRole::JobSeeker))
        .expect("register");

    let err = state
        .account_service
        .find_by_credentials("alice", "wrong")
        .expect_err("wrong password");
    assert!(matches!(err, Error::InvalidCredentials));
}

#[test]
fn unknown_username_is_invalid_credentials() {
    let state = common::app_state();

    let err = state
        .account_service
        .find_by_credentials("nobody", "secret1")
        .expect_err("unknown user");
    assert!(matches!(err, Error::InvalidCredentials));
}

#[test]
fn correct_credentials_return_the_user() {
    let state = common::app_state();

    let registered = state
        .account_service
        .register(payload("alice", "secret1", UserRole::JobSeeker))
        .expect("register");

    let found = state
        .account_service
        .find_by_credentials("alice", "secret1")
        .expect("login lookup");
    assert_eq!(found.id, registered.id);
}

#[test]
fn register_payload_carries_the_form_rules() {
    assert!(payload("  ", "secret1", UserRole::JobSeeker)
        .validate()
        .is_err());
    assert!(payload("alice", "short", UserRole::JobSeeker)
        .validate()
        .is_err());
    assert!(payload("alice", "secret1", UserRole::JobSeeker)
        .validate()
        .is_ok());

    let blank_login = LoginPayload {
        username: " ".to_string(),
        password: String::new(),
    };
    assert!(blank_login.validate().is_err());
}
