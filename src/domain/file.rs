//! 소스 파일을 메시지용 서술자로 정규화한다.

use serde::Serialize;

use crate::domain::language;
use crate::domain::prompt::SourceFile;

/// 파일 하나에 대한 정규화된 투영. 조립 중 파일마다 한 번 만들고 버린다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescriptor {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub path: Option<String>,
    pub size: Option<u64>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
    pub content: String,
}

/// 메시지에 싣는 메타데이터 JSON. 키 순서가 곧 출력 순서다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary<'a> {
    pub id: Option<i64>,
    pub name: Option<&'a str>,
    #[serde(rename = "type")]
    pub language: String,
    pub path: Option<&'a str>,
    pub size: Option<u64>,
    pub created_at: Option<&'a str>,
    pub modified_at: Option<&'a str>,
}

impl FileDescriptor {
    /// 빈 문자열 메타데이터는 값이 없는 것으로 본다. 내용이 없으면 빈 문자열.
    pub fn from_source(file: &SourceFile) -> Self {
        let metadata = file.metadata.as_ref();
        Self {
            id: file.id,
            name: metadata.and_then(|m| present(&m.file_name)),
            extension: metadata.and_then(|m| present(&m.file_name_extension)),
            path: metadata.and_then(|m| present(&m.file_path)),
            size: metadata.and_then(|m| m.file_size),
            created_at: metadata.and_then(|m| present(&m.created_at)),
            modified_at: metadata.and_then(|m| present(&m.modified_at)),
            content: file.content.clone().unwrap_or_default(),
        }
    }

    pub fn language(&self) -> String {
        language::classify(self.extension.as_deref(), self.name.as_deref())
    }

    pub fn summary(&self) -> FileSummary<'_> {
        FileSummary {
            id: self.id,
            name: self.name.as_deref(),
            language: self.language(),
            path: self.path.as_deref(),
            size: self.size,
            created_at: self.created_at.as_deref(),
            modified_at: self.modified_at.as_deref(),
        }
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
