//! revmsg library root.
//! 코드 리뷰 프롬프트를 LLM 채팅 메시지 목록으로 변환한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use domain::language::classify;
pub use domain::message::{ChatMessage, Role};
pub use domain::policy::assemble_messages;
pub use domain::prompt::{FileMetadata, ReviewPrompt, Rule, RuleKey, SourceFile};
pub use domain::review::{FileLayout, RunOptions};

use interface::composition::AppComposition;

/// 기본(combined) 배치로 메시지를 조립한다.
pub fn map_prompt_to_messages(prompt: &ReviewPrompt) -> Vec<ChatMessage> {
    assemble_messages(prompt, FileLayout::default())
}

/// 라이브러리 직접 호출용 실행 함수. 출력한 메시지 개수를 반환한다.
pub fn run(options: RunOptions) -> Result<usize> {
    let composition = AppComposition::default();
    composition.map_messages_usecase().execute(options)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
