//! Error definitions for the model listing client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {}", error_chain(.source))]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Auth error (status {status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("{message}")]
    Timeout { message: String },
}

impl Error {
    /// 错误类别的简短标签，仅用于日志。
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::HttpClient { .. } => "network",
            Self::ApiError { .. } => "api",
            Self::Auth { .. } => "auth",
            Self::InvalidConfig { .. } => "config",
            Self::Parse { .. } => "parse",
            Self::Timeout { .. } => "timeout",
        }
    }

    /// 将传输层错误归类：超时单独成类（文本取最内层原因），其余保留原始 reqwest 错误。
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                message: root_cause(&err),
            }
        } else {
            Self::HttpClient { source: err }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// 拼接错误及其 `source()` 链，已包含在前文中的原因不重复输出。
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = cause.source();
    }
    message
}

fn root_cause(err: &dyn std::error::Error) -> String {
    let mut current = err;
    while let Some(cause) = current.source() {
        current = cause;
    }
    current.to_string()
}
