//! Models API: model listing with automatic pagination.

use std::sync::Arc;

use gemini_models_types::models::{ListModelsConfig, ListModelsResponse, Model};
use reqwest::StatusCode;

use crate::client::ClientInner;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型（单页）。
    ///
    /// # Errors
    /// 网络失败、非 2xx 状态或响应体无法解析时返回错误。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（带配置，单页）。
    ///
    /// # Errors
    /// 网络失败、非 2xx 状态或响应体无法解析时返回错误。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status, message));
        }
        let body = response.text().await.map_err(Error::from_transport)?;
        serde_json::from_str::<ListModelsResponse>(&body).map_err(|err| Error::Parse {
            message: format!("invalid ListModels response: {err}"),
        })
    }

    /// 列出所有模型（自动翻页，按服务端顺序拼接）。
    ///
    /// # Errors
    /// 任意一页失败即整体失败，不返回部分结果。
    pub async fn all(&self) -> Result<Vec<Model>> {
        self.all_with_config(ListModelsConfig::default()).await
    }

    /// 列出所有模型（带配置，自动翻页）。
    ///
    /// # Errors
    /// 任意一页失败即整体失败，不返回部分结果；服务端重复返回同一翻页令牌时返回解析错误。
    pub async fn all_with_config(&self, mut config: ListModelsConfig) -> Result<Vec<Model>> {
        let mut models = Vec::new();
        let mut page = 0usize;
        loop {
            let response = self.list_with_config(config.clone()).await?;
            page += 1;
            if let Some(items) = response.models {
                tracing::debug!(page, count = items.len(), "received models page");
                models.extend(items);
            }
            match response.next_page_token {
                Some(token)
                    if !token.is_empty()
                        && config.page_token.as_deref() == Some(token.as_str()) =>
                {
                    return Err(Error::Parse {
                        message: format!("ListModels repeated nextPageToken {token}"),
                    });
                }
                Some(token) if !token.is_empty() => {
                    config.page_token = Some(token);
                }
                _ => break,
            }
        }
        Ok(models)
    }
}

fn status_error(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Auth {
            status: status.as_u16(),
            message,
        },
        _ => Error::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

fn build_models_list_url(inner: &ClientInner, config: &ListModelsConfig) -> Result<String> {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    add_list_query_params(format!("{base}{version}/models"), config)
}

fn add_list_query_params(url: String, config: &ListModelsConfig) -> Result<String> {
    let mut url = reqwest::Url::parse(&url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    if config.page_size.is_some() || config.page_token.is_some() {
        let mut pairs = url.query_pairs_mut();
        if let Some(page_size) = config.page_size {
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        if let Some(page_token) = &config.page_token {
            pairs.append_pair("pageToken", page_token);
        }
    }
    Ok(url.to_string())
}
