//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

use crate::domain::review::FileLayout;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 파일 메시지 배치(combined/split)
    pub file_layout: Option<String>,
    /// 공백뿐인 메시지 제거 여부(기본 false)
    pub skip_blank_messages: Option<bool>,
    /// 출력 JSON 들여쓰기 여부(기본 false)
    pub pretty: Option<bool>,
}

impl Config {
    pub fn file_layout(&self) -> FileLayout {
        FileLayout::from_config(self.defaults.file_layout.as_deref())
    }

    pub fn skip_blank_messages(&self) -> bool {
        self.defaults.skip_blank_messages.unwrap_or(false)
    }

    pub fn pretty(&self) -> bool {
        self.defaults.pretty.unwrap_or(false)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.file_layout.is_some() {
            self.file_layout = other.file_layout;
        }
        if other.skip_blank_messages.is_some() {
            self.skip_blank_messages = other.skip_blank_messages;
        }
        if other.pretty.is_some() {
            self.pretty = other.pretty;
        }
    }
}
