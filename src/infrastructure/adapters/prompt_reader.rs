//! 프롬프트 입력 포트 구현 어댑터(파일/stdin JSON).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::PromptSource;
use crate::domain::prompt::ReviewPrompt;

/// `-` 경로는 stdin으로 취급한다.
pub struct JsonPromptReader;

impl PromptSource for JsonPromptReader {
    fn read(&self, path: Option<&Path>) -> Result<ReviewPrompt> {
        match path.filter(|p| p.as_os_str() != "-") {
            Some(path) => {
                let raw = fs::read_to_string(path).with_context(|| {
                    format!("failed to read review prompt at {}", path.display())
                })?;
                debug!(path = %path.display(), bytes = raw.len(), "read review prompt file");
                parse_prompt(&raw, &path.display().to_string())
            }
            None => read_prompt_from(io::stdin().lock(), "stdin"),
        }
    }
}

fn read_prompt_from<R: Read>(mut reader: R, label: &str) -> Result<ReviewPrompt> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .with_context(|| format!("failed to read review prompt from {label}"))?;
    debug!(source = label, bytes = raw.len(), "read review prompt");
    parse_prompt(&raw, label)
}

fn parse_prompt(raw: &str, label: &str) -> Result<ReviewPrompt> {
    ReviewPrompt::from_json_str(raw)
        .with_context(|| format!("failed to parse review prompt JSON from {label}"))
}
