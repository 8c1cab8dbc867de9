use crate::account::Account;
use crate::errors::ModelError;
use crate::location::Location;
use crate::user::User;
use crate::Model;
use anyhow::Result;
use serde_json::json;

#[test]
fn field_reads_assigned_values() -> Result<()> {
    let mut owner = User::default();
    owner.username = Some("username1".into());
    owner.set_id(1);

    let account = Account {
        user: Some(owner.clone()),
        account_number: Some(1234),
        address: Some("1234 HI".into()),
        balance: Some(12.34),
        ..Default::default()
    };

    assert_eq!(account.field("accountNumber")?, json!(1234));
    assert_eq!(account.field("address")?, json!("1234 HI"));
    assert_eq!(account.field("balance")?, json!(12.34));
    assert_eq!(account.field("user")?["username"], json!("username1"));
    assert_eq!(account.field("user")?["id"], json!(1));
    Ok(())
}

#[test]
fn field_rejects_names_outside_schema() {
    let location = Location::default();
    match location.field("altitude") {
        Err(ModelError::UnknownField { model, field }) => {
            assert_eq!(model, "Location");
            assert_eq!(field, "altitude");
        }
        other => panic!("expected UnknownField, got {other:?}"),
    }
    // id is an attribute, not a schema field
    assert!(location.field("id").is_err());
}

#[test]
fn set_id_marks_record_persisted() {
    let mut user = User::default();
    assert!(user.is_new());
    user.set_id(7);
    assert_eq!(user.id(), Some(7));
    assert!(!user.is_new());
}
