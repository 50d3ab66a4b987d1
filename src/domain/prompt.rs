//! 호스트가 전달하는 리뷰 프롬프트 입력 모델.
//!
//! 누락/`null` 필드는 역직렬화 시점에 기본값으로 정규화한다.
//! 단, 규칙의 `ruleKey`는 필수이며 없으면 역직렬화 자체가 실패한다.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPrompt {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub system_prompt_texts: Vec<String>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub review_prompt_texts: Vec<String>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub review_target_prompt_texts: Vec<String>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub file_group_prompt_texts: Vec<String>,
    #[serde(default, deserialize_with = "rules_or_empty")]
    pub rules: Vec<Rule>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub files: Vec<SourceFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub rule_key: RuleKey,
    #[serde(default)]
    pub description: Option<String>,
    /// 호스트 측 심각도. 메시지에는 포함하지 않는다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleKey {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceFile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<FileMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_name_extension: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed_at: Option<String>,
}

impl ReviewPrompt {
    /// JSON 문자열에서 프롬프트를 읽는다.
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// `null` 리스트는 빈 리스트로, `null` 원소는 기본값으로 바꾼다.
fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// 규칙 원소는 기본값이 없으므로 리스트 자체의 `null`만 허용한다.
fn rules_or_empty<'de, D>(deserializer: D) -> Result<Vec<Rule>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Rule>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
