use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store space `{type_name}` does not hold `{requested}` records")]
    SpaceMismatch { type_name: &'static str, requested: &'static str },
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl StoreError {
    pub fn mismatch<M: models::Model>() -> Self {
        Self::SpaceMismatch { type_name: M::TYPE_NAME, requested: std::any::type_name::<M>() }
    }
}
