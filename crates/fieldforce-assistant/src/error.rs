use fieldforce_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("message is empty")]
    BlankInput,

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
