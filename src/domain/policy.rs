//! 도메인 정책(메시지 조립 순서, 파일 배치, 빈 메시지 정리).

use crate::domain::file::FileDescriptor;
use crate::domain::framing::{
    RULES_HEADER, combined_file_section, fenced_code_block, file_metadata_json, files_header,
    rules_json,
};
use crate::domain::message::ChatMessage;
use crate::domain::prompt::ReviewPrompt;
use crate::domain::review::FileLayout;

/// 리뷰 프롬프트를 순서가 고정된 채팅 메시지 목록으로 조립한다.
///
/// 순서: system 텍스트 → review → review target → file group → 규칙 헤더 →
/// 규칙 JSON → 파일 헤더(파일이 있을 때) → 파일별 메시지.
pub fn assemble_messages(prompt: &ReviewPrompt, layout: FileLayout) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(estimated_len(prompt, layout));

    messages.extend(prompt.system_prompt_texts.iter().map(ChatMessage::system));
    messages.extend(prompt.review_prompt_texts.iter().map(ChatMessage::user));
    messages.extend(prompt.review_target_prompt_texts.iter().map(ChatMessage::user));
    messages.extend(prompt.file_group_prompt_texts.iter().map(ChatMessage::user));

    messages.push(ChatMessage::user(RULES_HEADER));
    messages.push(ChatMessage::user(rules_json(&prompt.rules)));

    if let Some(header) = files_header(prompt.files.len()) {
        messages.push(ChatMessage::user(header));
    }

    for file in &prompt.files {
        let descriptor = FileDescriptor::from_source(file);
        let metadata = file_metadata_json(&descriptor);
        let code_block = fenced_code_block(&descriptor.language(), &descriptor.content);

        match layout {
            FileLayout::Combined => {
                messages.push(ChatMessage::user(combined_file_section(&metadata, &code_block)));
            }
            FileLayout::Split => {
                messages.push(ChatMessage::user(metadata));
                messages.push(ChatMessage::user(code_block));
            }
        }
    }

    messages
}

/// 본문이 비었거나 공백뿐인 메시지를 제거한다.
pub fn drop_blank_messages(messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    messages.into_iter().filter(|m| !m.is_blank()).collect()
}

fn estimated_len(prompt: &ReviewPrompt, layout: FileLayout) -> usize {
    let per_file = match layout {
        FileLayout::Combined => 1,
        FileLayout::Split => 2,
    };
    prompt.system_prompt_texts.len()
        + prompt.review_prompt_texts.len()
        + prompt.review_target_prompt_texts.len()
        + prompt.file_group_prompt_texts.len()
        + 3
        + prompt.files.len() * per_file
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::framing::{FILE_CONTENT_LABEL, FILE_METADATA_LABEL, SINGLE_FILE_HEADER};
    use crate::domain::message::Role;
    use crate::domain::prompt::{FileMetadata, Rule, RuleKey, SourceFile};
    use pretty_assertions::assert_eq;

    fn texts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn python_file(id: i64, content: &str) -> SourceFile {
        SourceFile {
            id: Some(id),
            content: Some(content.to_string()),
            metadata: Some(FileMetadata {
                file_name: Some("main.py".to_string()),
                file_name_extension: Some("py".to_string()),
                file_path: Some("/repo/main.py".to_string()),
                file_size: Some(content.len() as u64),
                created_at: Some("2024-05-01T10:00:00".to_string()),
                modified_at: Some("2024-05-02T11:00:00".to_string()),
                accessed_at: None,
            }),
        }
    }

    fn rule(id: i64, code: &str, description: &str) -> Rule {
        Rule {
            rule_key: RuleKey {
                id: Some(id),
                code: Some(code.to_string()),
            },
            description: Some(description.to_string()),
            severity: None,
        }
    }

    #[test]
    fn empty_prompt_yields_rules_header_and_empty_array() {
        let messages = assemble_messages(&ReviewPrompt::default(), FileLayout::Combined);
        assert_eq!(
            messages,
            vec![ChatMessage::user(RULES_HEADER), ChatMessage::user("[]")]
        );
    }

    #[test]
    fn text_groups_are_emitted_in_fixed_order() {
        let prompt = ReviewPrompt {
            system_prompt_texts: texts(&["s1", "s2"]),
            review_prompt_texts: texts(&["r1"]),
            review_target_prompt_texts: texts(&["t1"]),
            file_group_prompt_texts: texts(&["g1", "g2"]),
            ..ReviewPrompt::default()
        };
        let messages = assemble_messages(&prompt, FileLayout::Combined);

        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["s1", "s2", "r1", "t1", "g1", "g2", RULES_HEADER, "[]"]
        );
        let system_count = messages.iter().filter(|m| m.role == Role::System).count();
        assert_eq!(system_count, 2);
        assert!(messages[..2].iter().all(|m| m.role == Role::System));
    }

    #[test]
    fn rules_message_parses_back_to_input_rules() {
        let prompt = ReviewPrompt {
            rules: vec![rule(1, "NPE", "avoid nulls"), rule(2, "SQL", "no injection")],
            ..ReviewPrompt::default()
        };
        let messages = assemble_messages(&prompt, FileLayout::Combined);
        let parsed: serde_json::Value = serde_json::from_str(&messages[1].content).unwrap();
        let items = parsed.as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 1);
        assert_eq!(items[0]["code"], "NPE");
        assert_eq!(items[1]["description"], "no injection");
    }

    #[test]
    fn single_file_uses_singular_header_and_combined_section() {
        let prompt = ReviewPrompt {
            files: vec![python_file(10, "x=1")],
            ..ReviewPrompt::default()
        };
        let messages = assemble_messages(&prompt, FileLayout::Combined);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].content, SINGLE_FILE_HEADER);
        assert!(messages[2].content.contains("Here is the file"));

        let body = &messages[3].content;
        assert!(body.starts_with(FILE_METADATA_LABEL));
        assert!(body.contains(FILE_CONTENT_LABEL));
        assert!(body.ends_with("```python\nx=1\n```"));

        let json_line = body.lines().nth(1).unwrap();
        let metadata: serde_json::Value = serde_json::from_str(json_line).unwrap();
        assert_eq!(metadata["id"], 10);
        assert_eq!(metadata["name"], "main.py");
        assert_eq!(metadata["type"], "python");
        assert_eq!(metadata["path"], "/repo/main.py");
        assert_eq!(metadata["size"], 3);
        assert_eq!(metadata["createdAt"], "2024-05-01T10:00:00");
        assert_eq!(metadata["modifiedAt"], "2024-05-02T11:00:00");
    }

    #[test]
    fn many_files_interpolate_count_into_header() {
        let prompt = ReviewPrompt {
            files: vec![python_file(1, "a"), python_file(2, "b"), python_file(3, "c")],
            ..ReviewPrompt::default()
        };
        let messages = assemble_messages(&prompt, FileLayout::Combined);

        assert_eq!(messages.len(), 2 + 1 + 3);
        assert!(messages[2].content.contains("Here are the 3 files"));
        assert!(messages[3].content.ends_with("```python\na\n```"));
        assert!(messages[5].content.ends_with("```python\nc\n```"));
    }

    #[test]
    fn split_layout_emits_two_messages_per_file() {
        let prompt = ReviewPrompt {
            files: vec![python_file(1, "x=1"), SourceFile::default()],
            ..ReviewPrompt::default()
        };
        let messages = assemble_messages(&prompt, FileLayout::Split);

        assert_eq!(messages.len(), 2 + 1 + 4);
        assert!(messages[3].content.starts_with("{\"id\":1,"));
        assert_eq!(messages[4].content, "```python\nx=1\n```");
        assert_eq!(
            messages[5].content,
            r#"{"id":null,"name":null,"type":"plaintext","path":null,"size":null,"createdAt":null,"modifiedAt":null}"#
        );
        assert_eq!(messages[6].content, "```plaintext\n\n```");
    }

    #[test]
    fn assembling_twice_is_identical() {
        let prompt = ReviewPrompt {
            system_prompt_texts: texts(&["sys"]),
            rules: vec![rule(9, "X", "y")],
            files: vec![python_file(1, "x=1"), python_file(2, "y=2")],
            ..ReviewPrompt::default()
        };
        assert_eq!(
            assemble_messages(&prompt, FileLayout::Combined),
            assemble_messages(&prompt, FileLayout::Combined)
        );
    }

    #[test]
    fn blank_filter_keeps_non_blank_in_order() {
        let messages = vec![
            ChatMessage::system(""),
            ChatMessage::user("a"),
            ChatMessage::user("  "),
            ChatMessage::user("b"),
        ];
        assert_eq!(
            drop_blank_messages(messages),
            vec![ChatMessage::user("a"), ChatMessage::user("b")]
        );
    }
}
