//! 파일 확장자/이름을 코드 펜스용 언어 태그로 변환하는 분류기.
//!
//! 모호한 확장자는 내용 분석 없이 고정값으로 정한다(`h` → `c`, `m` → `matlab`).

use std::collections::HashMap;
use std::sync::LazyLock;

pub const PLAINTEXT: &str = "plaintext";

const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("java", "java"),
    ("html", "html"),
    ("css", "css"),
    ("json", "json"),
    ("xml", "xml"),
    ("c", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("h", "c"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("php", "php"),
    ("rb", "ruby"),
    ("go", "go"),
    ("swift", "swift"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("zsh", "shell"),
    ("ksh", "shell"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("yml", "yaml"),
    ("yaml", "yaml"),
    ("ini", "ini"),
    ("toml", "toml"),
    ("rs", "rust"),
    ("scala", "scala"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("dart", "dart"),
    ("sql", "sql"),
    ("pl", "perl"),
    ("lua", "lua"),
    ("r", "r"),
    ("m", "matlab"),
    ("vb", "vbnet"),
    ("asm", "assembly"),
    ("s", "assembly"),
    ("scss", "scss"),
    ("less", "less"),
    ("styl", "stylus"),
    ("vue", "vue"),
    ("coffee", "coffeescript"),
    ("dockerfile", "docker"),
    ("makefile", "makefile"),
    ("cmake", "cmake"),
    ("bat", "batch"),
    ("ps1", "powershell"),
    ("groovy", "groovy"),
    ("gradle", "gradle"),
    ("tex", "latex"),
    ("latex", "latex"),
    ("svg", "svg"),
    ("txt", PLAINTEXT),
    ("log", PLAINTEXT),
];

static LANGUAGE_BY_EXTENSION: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EXTENSION_LANGUAGES.iter().copied().collect());

/// 확장자로 언어 태그를 찾는다. 확장자가 비어 있으면 파일명을 태그로 쓴다.
/// 알 수 없는 확장자는 항상 `plaintext`.
pub fn classify(extension: Option<&str>, name: Option<&str>) -> String {
    if let Some(ext) = non_blank(extension) {
        let key = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
        return lookup(&key).unwrap_or(PLAINTEXT).to_string();
    }

    match non_blank(name) {
        // Dockerfile, Makefile 처럼 이름 자체가 표에 있는 경우
        Some(name) => {
            let key = name.to_lowercase();
            match lookup(&key) {
                Some(tag) => tag.to_string(),
                None => key,
            }
        }
        None => PLAINTEXT.to_string(),
    }
}

/// 확장자만으로 태그를 조회한다.
pub fn lookup(extension: &str) -> Option<&'static str> {
    LANGUAGE_BY_EXTENSION.get(extension).copied()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
