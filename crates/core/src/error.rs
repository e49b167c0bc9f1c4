#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found.")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Template error: {0}")]
    Template(String),
}
