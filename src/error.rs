use thiserror::Error;

/// Errors raised while turning a setting into register requests.
///
/// Every variant describes bad caller input. None of them come from the device or the
/// transport, and a call that fails has emitted no requests at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{name} ({value}) must be in [{min}-{max}]")]
    InvalidParameter {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("invalid time of day: {0}")]
    InvalidTime(String),

    #[error("unknown inverter model: {0}")]
    UnknownModel(String),

    #[error("unknown discharge mode: {0} (expected max-power or match-demand)")]
    UnknownDischargeMode(String),
}

impl CommandError {
    pub fn invalid_parameter(name: &'static str, value: i32, min: i32, max: i32) -> Self {
        Self::InvalidParameter {
            name,
            value,
            min,
            max,
        }
    }

    pub fn unknown_setting(name: impl Into<String>) -> Self {
        Self::UnknownSetting(name.into())
    }

    pub fn invalid_time(value: impl ToString) -> Self {
        Self::InvalidTime(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
