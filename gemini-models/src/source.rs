//! Model source abstraction used by the enumerator.

use async_trait::async_trait;
use gemini_models_types::models::{ListModelsConfig, Model};

use crate::client::Client;
use crate::error::Result;

/// 可列出模型的来源；真实实现为 [`Client`]，测试中可替换。
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// 一次性取回全部模型，保持服务端顺序。
    async fn list_models(&self) -> Result<Vec<Model>>;
}

#[async_trait]
impl ModelSource for Client {
    async fn list_models(&self) -> Result<Vec<Model>> {
        self.models().all().await
    }
}

/// 带分页配置的来源（`--page-size`）。
pub struct PagedSource {
    client: Client,
    page_size: Option<i32>,
}

impl PagedSource {
    #[must_use]
    pub const fn new(client: Client, page_size: Option<i32>) -> Self {
        Self { client, page_size }
    }
}

#[async_trait]
impl ModelSource for PagedSource {
    async fn list_models(&self) -> Result<Vec<Model>> {
        let config = ListModelsConfig {
            page_size: self.page_size,
            page_token: None,
        };
        self.client.models().all_with_config(config).await
    }
}
