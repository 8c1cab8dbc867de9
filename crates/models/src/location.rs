use serde::{Deserialize, Serialize};

use crate::model::{Id, Model};
use crate::schema::{FieldType, Schema};

pub static SCHEMA: Schema = Schema::new(&[
    ("lat", FieldType::Number),
    ("lng", FieldType::Number),
]);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<Id>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Model for Location {
    const TYPE_NAME: &'static str = "Location";

    fn schema() -> &'static Schema { &SCHEMA }

    fn id(&self) -> Option<Id> { self.id }

    fn set_id(&mut self, id: Id) { self.id = Some(id); }
}
