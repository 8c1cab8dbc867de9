use crate::account::Account;
use crate::location::Location;
use crate::message::Message;
use crate::schema::FieldType;
use crate::user::User;
use crate::Model;
use anyhow::Result;

/// Every schema field reads back as null on a fresh record.
fn assert_blank<M: Model>() -> Result<()> {
    let record = M::default();
    assert!(record.id().is_none(), "{} starts without id", M::TYPE_NAME);
    assert!(record.is_new());
    for name in M::schema().names() {
        assert!(record.field(name)?.is_null(), "{}.{} should start null", M::TYPE_NAME, name);
    }
    Ok(())
}

#[test]
fn new_records_are_blank() -> Result<()> {
    assert_blank::<User>()?;
    assert_blank::<Account>()?;
    assert_blank::<Message>()?;
    assert_blank::<Location>()?;
    Ok(())
}

#[test]
fn user_schema() {
    assert_eq!(User::TYPE_NAME, "User");
    assert_eq!(User::schema().fields(), &[("username", FieldType::Text), ("password", FieldType::Text)]);
}

#[test]
fn account_schema() {
    assert_eq!(Account::TYPE_NAME, "Account");
    assert_eq!(
        Account::schema().fields(),
        &[
            ("user", FieldType::Reference("User")),
            ("accountNumber", FieldType::Number),
            ("address", FieldType::Text),
            ("balance", FieldType::Number),
        ]
    );
}

#[test]
fn message_schema() {
    assert_eq!(Message::TYPE_NAME, "Message");
    assert_eq!(
        Message::schema().fields(),
        &[
            ("from", FieldType::Reference("User")),
            ("to", FieldType::Reference("User")),
            ("message", FieldType::Text),
            ("sent", FieldType::Timestamp),
        ]
    );
}

#[test]
fn location_schema() {
    assert_eq!(Location::TYPE_NAME, "Location");
    assert_eq!(Location::schema().fields(), &[("lat", FieldType::Number), ("lng", FieldType::Number)]);
}

/// Serialized keys are exactly `id` plus the schema names.
#[test]
fn serialized_keys_match_schema() -> Result<()> {
    fn keys<M: Model>() -> Result<Vec<String>> {
        let value = serde_json::to_value(M::default())?;
        let mut keys: Vec<String> = value.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();
        keys.sort();
        Ok(keys)
    }
    fn expected<M: Model>() -> Vec<String> {
        let mut names: Vec<String> = M::schema().names().map(str::to_string).collect();
        names.push("id".to_string());
        names.sort();
        names
    }

    assert_eq!(keys::<User>()?, expected::<User>());
    assert_eq!(keys::<Account>()?, expected::<Account>());
    assert_eq!(keys::<Message>()?, expected::<Message>());
    assert_eq!(keys::<Location>()?, expected::<Location>());
    Ok(())
}
