use thiserror::Error;

// App Errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
  #[error("Storage unavailable: {0}")]
  StorageUnavailable(String),
  #[error("Storage read error: {0}")]
  StorageReadError(String),
  #[error("Storage write error: {0}")]
  StorageWriteError(String),
  #[error("Config error: {0}")]
  ConfigError(String),
  #[error("Wasm error: {0}")]
  WasmError(String),
}
