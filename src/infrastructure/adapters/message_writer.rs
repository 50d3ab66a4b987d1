//! 메시지 출력 포트 구현 어댑터(stdout JSON).

use std::io::{self, Write};

use anyhow::Result;

use crate::application::ports::MessageSink;
use crate::domain::message::ChatMessage;

/// `[{role, content}, ...]` 배열을 stdout에 쓴다.
pub struct StdoutMessageWriter;

impl MessageSink for StdoutMessageWriter {
    fn write(&self, messages: &[ChatMessage], pretty: bool) -> Result<()> {
        let mut out = io::stdout().lock();
        write_messages(&mut out, messages, pretty)?;
        out.flush()?;
        Ok(())
    }
}

fn write_messages<W: Write>(out: &mut W, messages: &[ChatMessage], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, messages)?;
    } else {
        serde_json::to_writer(&mut *out, messages)?;
    }
    writeln!(out)?;
    Ok(())
}
