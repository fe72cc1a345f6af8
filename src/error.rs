use thiserror::Error;

use crate::core::AxisKey;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("absolute maximum ({maximum}) must be larger than absolute minimum ({minimum})")]
    InvalidAbsoluteRange { minimum: f64, maximum: f64 },

    #[error("polar axis `{key}` has no companion axis of the complementary kind")]
    MissingCompanion { key: AxisKey },

    #[error("polar axis misuse: {0}")]
    PolarAxisMisuse(String),

    #[error("invalid tick arguments: minimum={minimum}, maximum={maximum}, step={step}")]
    InvalidTickArguments {
        minimum: f64,
        maximum: f64,
        step: f64,
    },

    #[error("invalid axis configuration: {0}")]
    InvalidConfiguration(String),

    #[error("axis `{key}` is already registered")]
    DuplicateAxis { key: AxisKey },

    #[error("axis `{key}` is not registered")]
    UnknownAxis { key: AxisKey },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
