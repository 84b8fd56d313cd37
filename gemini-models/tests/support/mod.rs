#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use gemini_models::types::models::Model;
use gemini_models::{Client, Error, ModelSource, Result};

pub fn build_gemini_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn model(name: &str, display_name: &str, methods: &[&str]) -> Model {
    Model {
        name: Some(name.to_string()),
        display_name: Some(display_name.to_string()),
        supported_generation_methods: methods.iter().map(|m| (*m).to_string()).collect(),
        ..Default::default()
    }
}

pub fn model_json(name: &str, display_name: &str, methods: &[&str]) -> Value {
    json!({
        "name": name,
        "displayName": display_name,
        "supportedGenerationMethods": methods,
    })
}

/// 预置结果的来源，并记录被调用次数。
pub struct StubSource {
    result: std::sync::Mutex<Option<Result<Vec<Model>>>>,
    pub calls: Arc<AtomicUsize>,
}

impl StubSource {
    pub fn ok(models: Vec<Model>) -> Self {
        Self::with_result(Ok(models))
    }

    pub fn err(err: Error) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<Vec<Model>>) -> Self {
        Self {
            result: std::sync::Mutex::new(Some(result)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ModelSource for StubSource {
    async fn list_models(&self) -> Result<Vec<Model>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("stub source queried more than once")
    }
}

pub fn lookup_with_key(key: Option<&str>) -> impl Fn(&str) -> Option<String> {
    let key = key.map(ToString::to_string);
    move |name| {
        if name == "GEMINI_API_KEY" {
            key.clone()
        } else {
            None
        }
    }
}

pub fn output_text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}
