//! 도메인 조립 정책 기반 매퍼 어댑터.

use crate::application::ports::MessagesMapper;
use crate::domain::message::ChatMessage;
use crate::domain::policy::assemble_messages;
use crate::domain::prompt::ReviewPrompt;
use crate::domain::review::FileLayout;

pub struct AssemblingMessagesMapper;

impl MessagesMapper for AssemblingMessagesMapper {
    fn map(&self, prompt: &ReviewPrompt, layout: FileLayout) -> Vec<ChatMessage> {
        assemble_messages(prompt, layout)
    }
}
