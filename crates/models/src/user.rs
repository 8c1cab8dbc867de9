use serde::{Deserialize, Serialize};

use crate::model::{Id, Model};
use crate::schema::{FieldType, Schema};

pub static SCHEMA: Schema = Schema::new(&[
    ("username", FieldType::Text),
    ("password", FieldType::Text),
]);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<Id>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Model for User {
    const TYPE_NAME: &'static str = "User";

    fn schema() -> &'static Schema { &SCHEMA }

    fn id(&self) -> Option<Id> { self.id }

    fn set_id(&mut self, id: Id) { self.id = Some(id); }
}
