//! Model enumeration: fetch, keep content-generation models, print.

use std::io::{self, Write};

use gemini_models_types::models::Model;

use crate::app::Outcome;
use crate::error::Error;
use crate::source::ModelSource;

/// 内容生成能力的方法名。
pub const GENERATE_CONTENT: &str = "generateContent";

pub const PROGRESS_LINE: &str = "Fetching available models...";
pub const FETCH_ERROR_PREFIX: &str = "❌ Error fetching models: ";

const SEPARATOR: &str = "------------------------------";

#[must_use]
pub fn supports_generate_content(model: &Model) -> bool {
    model.supports_method(GENERATE_CONTENT)
}

/// 保留支持内容生成的模型，顺序不变。
pub fn filter_generate_content<'a, I>(models: I) -> impl Iterator<Item = &'a Model>
where
    I: IntoIterator<Item = &'a Model>,
{
    models.into_iter().filter(|model| supports_generate_content(model))
}

/// 输出单个模型的四行块。
///
/// # Errors
/// 写入失败时返回 IO 错误。
pub fn render_model<W: Write>(out: &mut W, model: &Model) -> io::Result<()> {
    writeln!(out, "Model Name: {}", model.name.as_deref().unwrap_or_default())?;
    writeln!(
        out,
        "Display Name: {}",
        model.display_name.as_deref().unwrap_or_default()
    )?;
    writeln!(out, "Methods: {:?}", model.supported_generation_methods)?;
    writeln!(out, "{SEPARATOR}")
}

/// # Errors
/// 写入失败时返回 IO 错误。
pub fn write_progress<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{PROGRESS_LINE}")?;
    writeln!(out)
}

/// 打印唯一一行失败信息；具体错误类别只进日志。
///
/// # Errors
/// 写入失败时返回 IO 错误。
pub fn report_fetch_failure<W: Write>(out: &mut W, err: Error) -> io::Result<Outcome> {
    tracing::warn!(kind = err.kind(), error = %err, "model listing failed");
    writeln!(out, "{FETCH_ERROR_PREFIX}{err}")?;
    Ok(Outcome::FetchFailed(err))
}

/// 取回全部模型后再输出；取回失败时不输出任何模型。
///
/// # Errors
/// 仅在写入输出失败时返回 IO 错误；远端失败体现在 [`Outcome::FetchFailed`]。
pub async fn fetch_and_print<S, W>(source: &S, out: &mut W) -> io::Result<Outcome>
where
    S: ModelSource + ?Sized,
    W: Write,
{
    let models = match source.list_models().await {
        Ok(models) => models,
        Err(err) => return report_fetch_failure(out, err),
    };
    tracing::debug!(total = models.len(), "fetched models");

    let mut shown = 0usize;
    for model in filter_generate_content(&models) {
        render_model(out, model)?;
        shown += 1;
    }
    out.flush()?;
    Ok(Outcome::Listed { shown })
}

/// 进度行 + 取回 + 过滤 + 输出。
///
/// # Errors
/// 仅在写入输出失败时返回 IO 错误。
pub async fn enumerate_models<S, W>(source: &S, out: &mut W) -> io::Result<Outcome>
where
    S: ModelSource + ?Sized,
    W: Write,
{
    write_progress(out)?;
    fetch_and_print(source, out).await
}
