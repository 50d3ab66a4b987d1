//! 프롬프트 입력부터 메시지 출력까지의 매핑 유스케이스.

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::application::ports::{ConfigRepository, MessageSink, MessagesMapper, PromptSource};
use crate::domain::policy::drop_blank_messages;
use crate::domain::review::RunOptions;

/// 설정 로딩 → 프롬프트 읽기 → 매핑 → (선택) 빈 메시지 제거 → 출력.
pub struct MapMessagesUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub prompt_source: &'a dyn PromptSource,
    pub mapper: &'a dyn MessagesMapper,
    pub sink: &'a dyn MessageSink,
}

impl<'a> MapMessagesUseCase<'a> {
    /// 실행 옵션은 설정값보다 우선한다. 출력한 메시지 개수를 반환한다.
    pub fn execute(&self, options: RunOptions) -> Result<usize> {
        let config = self
            .config_repo
            .load()
            .context("failed to load revmsg config")?;

        let layout = options.layout.unwrap_or_else(|| config.file_layout());
        let skip_blank = options.skip_blank || config.skip_blank_messages();
        let pretty = options.pretty || config.pretty();
        debug!(layout = layout.code(), skip_blank, pretty, "resolved mapping options");

        let prompt = self
            .prompt_source
            .read(options.input.as_deref())
            .context("failed to read review prompt")?;
        debug!(
            system = prompt.system_prompt_texts.len(),
            rules = prompt.rules.len(),
            files = prompt.files.len(),
            "loaded review prompt"
        );

        let mut messages = self.mapper.map(&prompt, layout);
        let mapped = messages.len();
        if skip_blank {
            messages = drop_blank_messages(messages);
        }
        debug!(mapped, kept = messages.len(), "mapped review prompt to messages");

        for (idx, message) in messages.iter().enumerate() {
            trace!(idx, role = message.role.as_str(), size = message.content.len(), "message");
        }

        self.sink
            .write(&messages, pretty)
            .context("failed to write messages")?;
        Ok(messages.len())
    }
}
