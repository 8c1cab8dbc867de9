use serde::{Deserialize, Serialize};

use crate::model::{Id, Model};
use crate::schema::{FieldType, Schema};
use crate::user::User;

pub static SCHEMA: Schema = Schema::new(&[
    ("user", FieldType::Reference(User::TYPE_NAME)),
    ("accountNumber", FieldType::Number),
    ("address", FieldType::Text),
    ("balance", FieldType::Number),
]);

/// Account owned by a user; `user` embeds the owning record itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Option<Id>,
    pub user: Option<User>,
    pub account_number: Option<i64>,
    pub address: Option<String>,
    pub balance: Option<f64>,
}

impl Model for Account {
    const TYPE_NAME: &'static str = "Account";

    fn schema() -> &'static Schema { &SCHEMA }

    fn id(&self) -> Option<Id> { self.id }

    fn set_id(&mut self, id: Id) { self.id = Some(id); }
}
