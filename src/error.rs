use thiserror::Error;

use crate::render::backend::ShaderStage;
use crate::render::pipeline::Stage;

/// Everything that can stop the bootstrap. None of these are retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BootstrapError {
    #[error("Your browser does not support WebGL")]
    ContextUnavailable,

    #[error("Drawing surface '{0}' not found or not a canvas")]
    SurfaceNotFound(String),

    #[error("ERROR compiling {stage} shader! {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("ERROR linking program! {log}")]
    ProgramLink { log: String },

    #[error("ERROR validating program! {log}")]
    ProgramValidate { log: String },

    #[error("Failed to create {0}")]
    ResourceCreation(&'static str),

    #[error("Attribute '{0}' not found in linked program")]
    AttributeNotFound(&'static str),

    #[error("Bootstrap cannot move from {from:?} to {to:?}")]
    InvalidTransition { from: Stage, to: Stage },

    #[error("Invalid scene config: {0}")]
    InvalidConfig(String),
}

impl From<serde_yaml::Error> for BootstrapError {
    fn from(err: serde_yaml::Error) -> Self {
        BootstrapError::InvalidConfig(format!("YAML parse error: {}", err))
    }
}
