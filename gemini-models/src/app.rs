//! Top-level run sequence: credential gate, then a single enumeration.

use std::io::{self, Write};

use crate::config::{load_api_key, ApiKey};
use crate::enumerate::{fetch_and_print, report_fetch_failure, write_progress};
use crate::error::{Error, Result};
use crate::source::ModelSource;

pub const MISSING_KEY_MESSAGE: &str = "❌ Error: API Key not found in .env file.";

/// 一次运行的结果。二进制入口对所有结果都正常退出。
#[derive(Debug)]
pub enum Outcome {
    /// 未找到凭据，未发起任何网络请求。
    MissingCredential,
    /// 列举成功，`shown` 为输出的模型数。
    Listed { shown: usize },
    /// 远端调用失败（含客户端构建失败）。
    FetchFailed(Error),
}

/// 读取凭据；缺失时输出提示并结束，否则用 `connect` 建立来源并列举一次。
///
/// `connect` 只在凭据存在时调用。
///
/// # Errors
/// 仅在写入输出失败时返回 IO 错误。
pub async fn run<L, C, S, W>(lookup: L, connect: C, out: &mut W) -> io::Result<Outcome>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&ApiKey) -> Result<S>,
    S: ModelSource,
    W: Write,
{
    let Some(api_key) = load_api_key(lookup) else {
        tracing::debug!("credential lookup returned nothing");
        writeln!(out, "{MISSING_KEY_MESSAGE}")?;
        out.flush()?;
        return Ok(Outcome::MissingCredential);
    };

    write_progress(out)?;
    let source = match connect(&api_key) {
        Ok(source) => source,
        Err(err) => return report_fetch_failure(out, err),
    };
    fetch_and_print(&source, out).await
}
