//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::map_messages::MapMessagesUseCase;
use crate::infrastructure::adapters::{
    AssemblingMessagesMapper, JsonConfigRepository, JsonPromptReader, StdoutMessageWriter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    prompt_source: JsonPromptReader,
    mapper: AssemblingMessagesMapper,
    sink: StdoutMessageWriter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            prompt_source: JsonPromptReader,
            mapper: AssemblingMessagesMapper,
            sink: StdoutMessageWriter,
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 메시지 매핑 유스케이스를 생성한다.
    pub fn map_messages_usecase(&self) -> MapMessagesUseCase<'_> {
        MapMessagesUseCase {
            config_repo: &self.config_repo,
            prompt_source: &self.prompt_source,
            mapper: &self.mapper,
            sink: &self.sink,
        }
    }
}
