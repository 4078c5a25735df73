use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcoComputeError {
    #[error("Dataset error: {0}")]
    Dataset(String),
}

impl From<EcoComputeError> for String {
    fn from(err: EcoComputeError) -> Self {
        err.to_string()
    }
}
