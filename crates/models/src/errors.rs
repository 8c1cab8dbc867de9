use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{model} has no field named `{field}`")]
    UnknownField { model: &'static str, field: String },
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
