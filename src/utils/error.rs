use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    /// 是否為設定相關錯誤
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ApiError::ConfigError { .. } | ApiError::InvalidConfigValueError { .. }
        )
    }

    /// CLI 結束碼：設定或設定檔問題為 1，請求失敗為 2
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::IoError(_) => 1,
            e if e.is_config_error() => 1,
            _ => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::RequestError(e) if e.is_connect() => {
                "Could not reach the Wise Routes backend".to_string()
            }
            ApiError::RequestError(_) => "The backend request failed".to_string(),
            ApiError::SerializationError(_) => "The backend returned invalid JSON".to_string(),
            ApiError::UrlError(e) => format!("Invalid endpoint URL: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
