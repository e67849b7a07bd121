use thiserror::Error;
use wasm_bindgen::JsValue;

/// Shader pipeline stage, used to label compile diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Errors raised while setting up the scene
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("WebGL2 context unavailable")]
    ContextUnavailable,
    #[error("An error occurred compiling the {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("Unable to initialize the shader program: {0}")]
    ProgramLink(String),
    #[error("Shader slot '{0}' not found in linked program")]
    MissingSlot(String),
    #[error("Failed to create {0}")]
    Resource(&'static str),
    #[error("Scene config error: {0}")]
    Config(String),
    #[error("Host error: {0}")]
    Host(String),
}

impl RenderError {
    /// Shader build failures are shown to the user, everything else only reaches the log
    pub fn is_user_facing(&self) -> bool {
        matches!(self, RenderError::ShaderCompile { .. } | RenderError::ProgramLink(_))
    }
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        RenderError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
