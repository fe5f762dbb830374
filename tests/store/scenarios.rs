//! End-to-end store scenarios
//!
//! Each test drives a fresh store through a short sequence of operations and
//! checks both the returned outcome and the resulting state.

use keystone_store::{CreateUser, User, UserStore, UserUpdate};

fn john() -> CreateUser {
    CreateUser::new("John Doe", "john@example.com")
}

fn jane() -> CreateUser {
    CreateUser::new("Jane Doe", "jane@example.com")
}

fn created(store: &mut UserStore, request: CreateUser) -> User {
    store.create(request).success().unwrap()
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn create_valid_user() {
    let mut store = UserStore::new();
    let user = created(&mut store, john());

    assert!(user.id() > 0);
    assert_eq!(user.name(), "John Doe");
    assert_eq!(user.email(), "john@example.com");
}

#[test]
fn create_with_empty_name() {
    let mut store = UserStore::new();
    let outcome = store.create(CreateUser::new("", "john@example.com"));

    assert!(outcome.is_error());
    assert!(outcome.error().unwrap().contains("Name cannot be empty"));
    assert!(store.is_empty());
}

#[test]
fn create_with_invalid_email() {
    let mut store = UserStore::new();
    let outcome = store.create(CreateUser::new("A", "invalid-email"));

    assert!(outcome.error().unwrap().contains("Invalid email format"));
}

#[test]
fn create_with_duplicate_email() {
    let mut store = UserStore::new();
    created(&mut store, john());
    let outcome = store.create(CreateUser::new("Johnny", "john@example.com"));

    assert!(
        outcome
            .error()
            .unwrap()
            .contains("User with this email already exists")
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn create_with_long_name() {
    let mut store = UserStore::new();
    let outcome = store.create(CreateUser::new("x".repeat(51), "long@example.com"));
    assert_eq!(outcome.error(), Some("Name cannot exceed 50 characters"));

    let fits = store.create(CreateUser::new("x".repeat(50), "long@example.com"));
    assert!(fits.is_success());
}

#[test]
fn create_with_empty_email() {
    let mut store = UserStore::new();
    let outcome = store.create(CreateUser::new("A", ""));
    assert_eq!(outcome.error(), Some("Email cannot be empty"));
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn get_deleted_user() {
    let mut store = UserStore::new();
    let user = created(&mut store, john());
    let id = user.id().to_string();

    assert_eq!(store.delete(&id).success(), Some(true));

    let outcome = store.get_by_id(&id);
    assert!(
        outcome
            .error()
            .unwrap()
            .contains(&format!("User not found with ID: {id}"))
    );
}

#[test]
fn get_with_malformed_id() {
    let store = UserStore::new();
    let outcome = store.get_by_id("abc");
    assert!(outcome.error().unwrap().starts_with("Invalid ID format: "));
}

#[test]
fn get_with_fractional_id() {
    let mut store = UserStore::new();
    created(&mut store, john());
    assert_eq!(
        store.get_by_id("1.5").error(),
        Some("User not found with ID: 1.5")
    );
    assert_eq!(store.get_by_id(" 1 ").success().map(|u| u.id()), Some(1));
}

#[test]
fn list_in_creation_order() {
    let mut store = UserStore::new();
    created(&mut store, john());
    created(&mut store, jane());
    created(&mut store, CreateUser::new("Kim", "kim@example.com"));
    store.delete("2").success().unwrap();

    let names: Vec<String> = store
        .list()
        .unwrap_or_default()
        .iter()
        .map(|u| u.name().to_string())
        .collect();
    assert_eq!(names, ["John Doe", "Kim"]);
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn update_to_email_in_use() {
    let mut store = UserStore::new();
    let a = created(&mut store, john());
    let b = created(&mut store, jane());

    let outcome = store.update(
        &b.id().to_string(),
        UserUpdate::new().with_email("john@example.com"),
    );

    assert!(
        outcome
            .error()
            .unwrap()
            .contains("Email is already in use by another user")
    );
    assert_eq!(store.get(a.id()), Some(&a));
    assert_eq!(store.get(b.id()), Some(&b));
}

#[test]
fn update_to_own_email_is_allowed() {
    let mut store = UserStore::new();
    let a = created(&mut store, john());

    let outcome = store.update(
        "1",
        UserUpdate::new()
            .with_name("John Q. Doe")
            .with_email("john@example.com"),
    );

    let updated = outcome.success().unwrap();
    assert_eq!(updated.id(), a.id());
    assert_eq!(updated.name(), "John Q. Doe");
}

#[test]
fn update_with_no_fields_keeps_record() {
    let mut store = UserStore::new();
    let a = created(&mut store, john());
    assert_eq!(store.update("1", UserUpdate::new()).success(), Some(a));
}

#[test]
fn update_rejects_explicit_empty_name() {
    let mut store = UserStore::new();
    let a = created(&mut store, john());

    let outcome = store.update("1", UserUpdate::new().with_name(""));
    assert_eq!(outcome.error(), Some("Name cannot be empty"));
    assert_eq!(store.get(1), Some(&a));
}

#[test]
fn update_missing_user() {
    let mut store = UserStore::new();
    let outcome = store.update("9", UserUpdate::new().with_name("Nobody"));
    assert_eq!(outcome.error(), Some("User not found with ID: 9"));
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn delete_missing_user() {
    let mut store = UserStore::new();
    assert_eq!(store.delete("3").error(), Some("User not found with ID: 3"));
}

#[test]
fn deleted_email_can_be_reused() {
    let mut store = UserStore::new();
    created(&mut store, john());
    store.delete("1").success().unwrap();

    let again = created(&mut store, john());
    assert_eq!(again.id(), 2);
}
