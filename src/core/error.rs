use thiserror::Error;

/// Errors reported by the data core.
///
/// Every operation validates its input and fails synchronously. Nothing is
/// retried and nothing is fatal: each call is independent of every other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NovationError {
    #[error("invalid argument `{name}` = {value}: {constraint}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        constraint: String,
    },
}

impl NovationError {
    /// Create an `InvalidArgument` for parameter `name`.
    pub fn invalid_argument(
        name: &'static str,
        value: impl ToString,
        constraint: impl Into<String>,
    ) -> Self {
        NovationError::InvalidArgument {
            name,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Name of the parameter that was rejected.
    pub fn argument_name(&self) -> &'static str {
        match self {
            NovationError::InvalidArgument { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, NovationError>;

/// Reject `value` unless it is at least `minimum`.
pub(crate) fn require_at_least(name: &'static str, value: i64, minimum: i64) -> Result<()> {
    if value < minimum {
        return Err(NovationError::invalid_argument(
            name,
            value,
            format!("must be at least {}", minimum),
        ));
    }
    Ok(())
}
