//! Domain layer
//! 리뷰 프롬프트 모델과 메시지 조립 규칙을 외부 의존성 없이 표현한다.

pub mod file;
pub mod framing;
pub mod language;
pub mod message;
pub mod policy;
pub mod prompt;
pub mod review;
