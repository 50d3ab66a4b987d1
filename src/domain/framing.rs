//! 메시지 본문 프레이밍 템플릿.
//! 라벨/펜스/헤더 문자열은 여기서만 정의한다.

use serde::Serialize;

use crate::domain::file::FileDescriptor;
use crate::domain::prompt::Rule;

pub const RULES_HEADER: &str = "The code review rules:";
pub const SINGLE_FILE_HEADER: &str = "Here is the file, presented as json and a code block:";
pub const FILE_METADATA_LABEL: &str = "=== FILE METADATA ===";
pub const FILE_CONTENT_LABEL: &str = "=== FILE CONTENT ===";
pub const CODE_FENCE: &str = "```";

#[derive(Serialize)]
struct RuleEntry<'a> {
    id: Option<i64>,
    code: Option<&'a str>,
    description: Option<&'a str>,
}

/// 파일 개수에 맞는 안내 헤더. 파일이 없으면 `None`.
pub fn files_header(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some(SINGLE_FILE_HEADER.to_string()),
        n => Some(format!(
            "Here are the {n} files, each presented as json and a code block:"
        )),
    }
}

/// 규칙 목록을 `{id, code, description}` 배열의 한 줄 JSON으로 만든다.
pub fn rules_json(rules: &[Rule]) -> String {
    let entries: Vec<RuleEntry<'_>> = rules
        .iter()
        .map(|rule| RuleEntry {
            id: rule.rule_key.id,
            code: rule.rule_key.code.as_deref(),
            description: rule.description.as_deref(),
        })
        .collect();
    compact_json(&entries)
}

pub fn file_metadata_json(file: &FileDescriptor) -> String {
    compact_json(&file.summary())
}

/// 언어 태그가 붙은 코드 펜스 블록.
pub fn fenced_code_block(language: &str, content: &str) -> String {
    format!("{CODE_FENCE}{language}\n{content}\n{CODE_FENCE}")
}

/// 메타데이터와 본문을 라벨로 묶은 파일 단위 메시지 본문.
pub fn combined_file_section(metadata_json: &str, code_block: &str) -> String {
    format!("{FILE_METADATA_LABEL}\n{metadata_json}\n\n{FILE_CONTENT_LABEL}\n{code_block}")
}

// 문자열/정수 필드만 가진 값이라 직렬화 오류가 나지 않는다.
fn compact_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
