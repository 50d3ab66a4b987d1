//! 매핑 실행 옵션과 파일 배치 정책.

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// 프롬프트 JSON 경로. `None`이면 stdin
    pub input: Option<PathBuf>,
    /// 설정값을 덮어쓰는 배치 정책
    pub layout: Option<FileLayout>,
    pub pretty: bool,
    pub skip_blank: bool,
}

/// 파일 하나를 몇 개의 메시지로 내보낼지 정하는 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLayout {
    /// 메타데이터와 본문을 라벨로 묶어 한 메시지로 보낸다.
    #[default]
    Combined,
    /// 메타데이터 JSON과 코드 블록을 각각의 메시지로 보낸다.
    Split,
}

impl FileLayout {
    /// 설정 문자열을 배치 정책으로 변환한다.
    /// 지원값: combined/single, split/separate (미지정/알수없음은 combined)
    pub fn from_config(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::Combined;
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "split" | "separate" => Self::Split,
            "combined" | "single" => Self::Combined,
            _ => Self::Combined,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Combined => "combined",
            Self::Split => "split",
        }
    }
}
