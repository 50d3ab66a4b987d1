//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;

use crate::application::config::Config;
use crate::domain::message::ChatMessage;
use crate::domain::prompt::ReviewPrompt;
use crate::domain::review::FileLayout;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 리뷰 프롬프트 입력 포트. `None`이면 표준 입력.
pub trait PromptSource: Send + Sync {
    fn read(&self, path: Option<&Path>) -> Result<ReviewPrompt>;
}

/// 프롬프트를 메시지 목록으로 바꾸는 매퍼 포트.
pub trait MessagesMapper: Send + Sync {
    fn map(&self, prompt: &ReviewPrompt, layout: FileLayout) -> Vec<ChatMessage>;
}

/// 완성된 메시지 목록 출력 포트.
pub trait MessageSink: Send + Sync {
    fn write(&self, messages: &[ChatMessage], pretty: bool) -> Result<()>;
}
