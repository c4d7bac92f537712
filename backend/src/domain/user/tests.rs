//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn valid_id() -> String {
    VALID_ID.to_owned()
}

#[fixture]
fn valid_username() -> String {
    "fcc_test".to_owned()
}

#[rstest]
fn accepts_maximum_length(valid_id: String) {
    let name = "a".repeat(USERNAME_MAX);
    let user = User::try_from_strings(valid_id, name.clone()).expect("username at boundary");
    assert_eq!(user.username().as_ref(), name);
}

#[rstest]
fn rejects_username_over_maximum_length(valid_id: String) {
    let result = User::try_from_strings(valid_id, "a".repeat(USERNAME_MAX + 1));
    assert!(matches!(
        result,
        Err(UserValidationError::UsernameTooLong { max }) if max == USERNAME_MAX
    ));
}

#[rstest]
fn length_is_counted_in_characters(valid_id: String) {
    let name = "é".repeat(USERNAME_MAX);
    assert!(User::try_from_strings(valid_id, name).is_ok());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn rejects_blank_usernames(valid_id: String, #[case] name: &str) {
    let result = User::try_from_strings(valid_id, name);
    assert!(matches!(result, Err(UserValidationError::EmptyUsername)));
}

#[rstest]
fn trims_surrounding_whitespace() {
    let username = Username::new("  runner  ").expect("valid username");
    assert_eq!(username.as_ref(), "runner");
}

#[rstest]
fn trimming_happens_before_length_check() {
    let padded = format!("  {}  ", "a".repeat(USERNAME_MAX));
    assert!(Username::new(padded).is_ok());
}

#[rstest]
fn try_new_rejects_invalid_uuid(valid_username: String) {
    let result = User::try_from_strings("not-a-uuid", valid_username);
    assert!(matches!(result, Err(UserValidationError::InvalidId)));
}

#[rstest]
fn try_new_rejects_empty_id(valid_username: String) {
    let result = User::try_from_strings("", valid_username);
    assert!(matches!(result, Err(UserValidationError::EmptyId)));
}

#[rstest]
fn try_new_rejects_uuid_with_whitespace(valid_username: String) {
    let id = format!(" {VALID_ID} ");
    let result = User::try_from_strings(id, valid_username);
    assert!(matches!(result, Err(UserValidationError::InvalidId)));
}

#[rstest]
fn user_id_from_uuid_avoids_round_trip_parse() {
    let uuid = uuid::Uuid::parse_str(VALID_ID).expect("valid UUID");
    let user_id = UserId::from_uuid(uuid);

    assert_eq!(user_id.as_uuid(), &uuid);
    assert_eq!(user_id.as_ref(), VALID_ID);
}

#[rstest]
fn register_generates_distinct_ids(valid_username: String) {
    let username = Username::new(valid_username).expect("valid username");
    let first = User::register(username.clone());
    let second = User::register(username);
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn serde_round_trips(valid_id: String, valid_username: String) {
    let payload = json!({ "id": valid_id, "username": valid_username });
    let user: User = serde_json::from_value(payload.clone()).expect("valid user");
    assert_eq!(serde_json::to_value(user).expect("serialise"), payload);
}

#[rstest]
fn serde_rejects_invalid_username(valid_id: String) {
    let payload = json!({ "id": valid_id, "username": "a".repeat(USERNAME_MAX + 1) });
    assert!(serde_json::from_value::<User>(payload).is_err());
}
