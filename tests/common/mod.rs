use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 사용자/프로젝트 설정이 섞이지 않도록 HOME과 작업 디렉터리를 임시 경로로 격리한다.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("work");
        let home = tmp.path().join("home");
        fs::create_dir_all(&root).expect("create work dir");
        fs::create_dir_all(&home).expect("create isolated home");

        Self {
            _tmp: tmp,
            root,
            home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("revmsg");
        cmd.current_dir(&self.root)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("REVMSG_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, body).expect("write fixture");
        path
    }

    pub fn run_json(&self, args: &[&str], stdin: Option<&str>) -> Value {
        let mut cmd = self.cmd();
        cmd.args(args);
        if let Some(input) = stdin {
            cmd.write_stdin(input);
        }
        let out = cmd.assert().success().get_output().stdout.clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn sample_prompt() -> String {
    serde_json::json!({
        "systemPromptTexts": ["You are a code reviewer."],
        "reviewPromptTexts": ["Review the files."],
        "reviewTargetPromptTexts": ["Focus on safety."],
        "fileGroupPromptTexts": ["Backend group"],
        "rules": [
            {"ruleKey": {"id": 1, "code": "NPE"}, "description": "Avoid null dereference", "severity": "CRITICAL"}
        ],
        "files": [
            {
                "id": 11,
                "content": "x=1",
                "metadata": {
                    "fileName": "main.py",
                    "fileNameExtension": "py",
                    "filePath": "src/main.py",
                    "fileSize": 3,
                    "createdAt": "2024-01-01T00:00:00",
                    "modifiedAt": "2024-01-02T00:00:00"
                }
            },
            {
                "id": 12,
                "content": "fn main() {}",
                "metadata": {"fileName": "main.rs", "fileNameExtension": "RS"}
            }
        ]
    })
    .to_string()
}

pub fn contents(messages: &Value) -> Vec<String> {
    messages
        .as_array()
        .expect("message array")
        .iter()
        .map(|m| m["content"].as_str().expect("string content").to_string())
        .collect()
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}
