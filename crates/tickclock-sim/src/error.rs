use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("requested {requested} ticks exceeds limit of {limit}")]
    TickLimitExceeded { requested: u32, limit: u32 },
    #[error("target state not reached within {limit} ticks")]
    TargetUnreachable { limit: u32 },
}
