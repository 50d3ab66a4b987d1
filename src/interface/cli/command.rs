//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::review::{FileLayout, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "revmsg")]
#[command(about = "Map a code review prompt (JSON) to LLM chat messages")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Review prompt JSON file (`-` or omitted: stdin)
    input: Option<PathBuf>,

    /// How each file is laid out in messages (overrides config)
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Pretty-print the message array
    #[arg(long)]
    pretty: bool,

    /// Drop messages whose content is empty or whitespace
    #[arg(long)]
    skip_blank: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and searched paths
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    Combined,
    Split,
}

impl From<LayoutArg> for FileLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Combined => FileLayout::Combined,
            LayoutArg::Split => FileLayout::Split,
        }
    }
}

pub enum CliAction {
    InspectConfig,
    Map(RunOptions),
}

impl Cli {
    /// 잘못된 인자는 clap이 직접 출력하고 종료한다(exit 2).
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::Map(RunOptions {
                input: self.input,
                layout: self.layout.map(FileLayout::from),
                pretty: self.pretty,
                skip_blank: self.skip_blank,
            }),
        }
    }
}
