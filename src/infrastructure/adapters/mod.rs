//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod message_writer;
mod messages_mapper;
mod prompt_reader;

pub use config_repository::JsonConfigRepository;
pub use message_writer::StdoutMessageWriter;
pub use messages_mapper::AssemblingMessagesMapper;
pub use prompt_reader::JsonPromptReader;
