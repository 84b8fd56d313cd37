//! Credential and settings loading from the process environment.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::client::{Client, ClientBuilder};
use crate::error::Result;

/// 凭据所在的环境变量名。
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const BASE_URL_ENVS: [&str; 2] = ["GENAI_BASE_URL", "GEMINI_BASE_URL"];
const API_VERSION_ENV: &str = "GENAI_API_VERSION";

/// API Key 凭据。非空；`Debug` 输出不含明文。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// 空串或仅含空白时返回 `None`。
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// 通过给定的查找函数读取凭据。
pub fn load_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<ApiKey> {
    lookup(API_KEY_ENV).and_then(ApiKey::new)
}

/// 从进程环境读取凭据。
#[must_use]
pub fn load_api_key_from_env() -> Option<ApiKey> {
    load_api_key(env_lookup)
}

/// 进程环境查找；非 UTF-8 的值视为缺失。
#[must_use]
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// 加载 `.env` 文件到进程环境。已存在的变量不会被覆盖。
///
/// 未指定路径时从当前目录向上查找 `.env`；找不到不算错误。
/// 返回实际加载的文件路径。
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => match dotenvy::from_path(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "loaded env file");
                Some(path.to_path_buf())
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to load env file");
                None
            }
        },
        None => match dotenvy::dotenv() {
            Ok(found) => {
                tracing::debug!(path = %found.display(), "loaded .env");
                Some(found)
            }
            Err(err) if err.not_found() => None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse .env");
                None
            }
        },
    }
}

/// 客户端与列举的可选覆盖项。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub timeout: Option<u64>,
    pub page_size: Option<i32>,
}

impl Settings {
    /// 从环境变量读取覆盖项；空值忽略。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            base_url: BASE_URL_ENVS.iter().find_map(|name| non_empty(*name)),
            api_version: non_empty(API_VERSION_ENV),
            timeout: None,
            page_size: None,
        }
    }

    /// 用 `overrides` 中已设置的字段覆盖当前值。
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            base_url: overrides.base_url.or(self.base_url),
            api_version: overrides.api_version.or(self.api_version),
            timeout: overrides.timeout.or(self.timeout),
            page_size: overrides.page_size.or(self.page_size),
        }
    }

    #[must_use]
    pub fn client_builder(&self, api_key: &ApiKey) -> ClientBuilder {
        let mut builder = Client::builder().api_key(api_key.expose());
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(api_version) = &self.api_version {
            builder = builder.api_version(api_version);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// 构建客户端。
    ///
    /// # Errors
    /// 当 API Key 含非法字符或 HTTP 客户端构建失败时返回错误。
    pub fn build_client(&self, api_key: &ApiKey) -> Result<Client> {
        self.client_builder(api_key).build()
    }
}
