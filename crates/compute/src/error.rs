#[derive(Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// An estimator was handed no values; callers must filter empty layers first.
    EmptyInput,
    InvalidConfig(String),
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsError::EmptyInput => write!(f, "cannot estimate bounds of an empty sequence"),
            BoundsError::InvalidConfig(msg) => write!(f, "invalid bounds configuration: {msg}"),
        }
    }
}

impl std::error::Error for BoundsError {}
