use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Id, Model};
use crate::schema::{FieldType, Schema};
use crate::user::User;

pub static SCHEMA: Schema = Schema::new(&[
    ("from", FieldType::Reference(User::TYPE_NAME)),
    ("to", FieldType::Reference(User::TYPE_NAME)),
    ("message", FieldType::Text),
    ("sent", FieldType::Timestamp),
]);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Option<Id>,
    pub from: Option<User>,
    pub to: Option<User>,
    pub message: Option<String>,
    pub sent: Option<DateTime<Utc>>,
}

impl Model for Message {
    const TYPE_NAME: &'static str = "Message";

    fn schema() -> &'static Schema { &SCHEMA }

    fn id(&self) -> Option<Id> { self.id }

    fn set_id(&mut self, id: Id) { self.id = Some(id); }
}
