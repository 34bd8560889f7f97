/// Simplified error system - mathematical degeneracies are values, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    RenderingError(String),
    StorageError(String),
    BrowserApiError(String),
    ConfigError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage Error: {}", msg),
            AppError::BrowserApiError(msg) => write!(f, "Browser API Error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

// Simple convenience type aliases
pub type RenderingResult<T> = Result<T, AppError>;
pub type StorageResult<T> = Result<T, AppError>;
pub type ConfigResult<T> = Result<T, AppError>;
