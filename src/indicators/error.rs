use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("insufficient data: need at least {required} bars, got {available}")]
    InsufficientData { required: usize, available: usize },
}
