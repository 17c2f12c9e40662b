//! Plain-text views for the terminal front end.

use crate::core::response::PromptResponse;
use crate::core::session::{Message, Role, Session, Status};
use std::fmt::Write;

/// Single-page result view: analysis, both prompt variants, numbered questions.
pub fn render_result(response: &PromptResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Phân tích chiến lược ==");
    let _ = writeln!(out, "\"{}\"", response.analysis);
    let _ = writeln!(out);
    let _ = writeln!(out, "== 01 Bản rút gọn (Concise) ==");
    let _ = writeln!(out, "{}", response.concise_prompt);
    let _ = writeln!(out);
    let _ = writeln!(out, "== 02 Bản chuyên sâu (Deep) ==");
    let _ = writeln!(out, "{}", response.deep_prompt);

    if !response.clarifying_questions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "== Câu hỏi tư vấn bổ sung ==");
        for (idx, question) in response.clarifying_questions.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", idx + 1, question);
        }
    }
    out
}

pub fn render_message(message: &Message) -> String {
    let mut out = String::new();
    let speaker = match message.role {
        Role::User => "Bạn",
        Role::Ai => "AI",
    };
    let _ = writeln!(out, "[{speaker}] {}", message.content);

    if let Some(result) = &message.prompt_result {
        for line in render_result(result).lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}

pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result view for the whole session: loading hint, error banner, then the latest result.
pub fn render_session(session: &Session) -> String {
    let mut out = String::new();
    match session.status() {
        Status::Idle => {}
        Status::Loading => {
            let _ = writeln!(out, "Đang thiết kế Prompt...");
        }
        Status::Error | Status::Success => {
            if let Some(error) = session.error() {
                let _ = writeln!(out, "! {error}");
            }
        }
    }
    if let Some(result) = session.result() {
        out.push_str(&render_result(result));
    }
    out
}
