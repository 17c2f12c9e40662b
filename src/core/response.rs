use crate::error::PromptError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The structured answer the model is asked to produce for one idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    #[schemars(description = "Phân tích mục tiêu của người dùng")]
    pub analysis: String,

    #[schemars(description = "Prompt phiên bản ngắn gọn")]
    pub concise_prompt: String,

    #[schemars(description = "Prompt phiên bản chi tiết (Deep Prompt)")]
    pub deep_prompt: String,

    #[schemars(description = "1-2 câu hỏi để làm rõ ý định")]
    pub clarifying_questions: Vec<String>,
}

/// Turns the model's raw text into a `PromptResponse`.
///
/// Blank text is `EmptyResponse`, text that is not JSON is `MalformedResponse`, and JSON
/// that does not have the four required fields with the right types is `ContractViolation`.
pub fn parse_response(text: &str) -> Result<PromptResponse, PromptError> {
    let cleaned = clean_json_block(text);
    if cleaned.is_empty() {
        return Err(PromptError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(cleaned).map_err(PromptError::MalformedResponse)?;

    let response: PromptResponse = serde_json::from_value(value)
        .map_err(|e| PromptError::ContractViolation(e.to_string()))?;

    let questions = response.clarifying_questions.len();
    if !(1..=2).contains(&questions) {
        log::warn!("Model returned {questions} clarifying questions (expected 1-2)");
    }

    Ok(response)
}

/// Pulls the JSON out of a ```json fence, ignoring any prose around it.
///
/// Bare JSON is returned as is, so fences quoted inside string values stay intact.
fn clean_json_block(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    let body = &trimmed[open + 3..];
    let body = body.strip_prefix("json").unwrap_or(body);
    match body.rfind("```") {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DA_LAT: &str = r#"{
        "analysis": "Người dùng muốn một kịch bản video ngắn quảng bá Đà Lạt.",
        "concisePrompt": "Viết kịch bản TikTok 60 giây về du lịch Đà Lạt.",
        "deepPrompt": "Bạn là biên kịch TikTok. Viết kịch bản 60 giây...",
        "clarifyingQuestions": ["Đối tượng khán giả là ai?", "Video dài bao lâu?"]
    }"#;

    #[test]
    fn parses_a_complete_reply() {
        let resp = parse_response(DA_LAT).unwrap();
        assert!(resp.analysis.contains("Đà Lạt"));
        assert!(!resp.concise_prompt.is_empty());
        assert!(!resp.deep_prompt.is_empty());
        assert_eq!(resp.clarifying_questions.len(), 2);
    }

    #[test]
    fn accepts_an_empty_question_list() {
        let resp = parse_response(
            r#"{"analysis":"a","concisePrompt":"b","deepPrompt":"c","clarifyingQuestions":[]}"#,
        )
        .unwrap();
        assert!(resp.clarifying_questions.is_empty());
    }

    #[test]
    fn unwraps_fenced_json() {
        let fenced = format!("```json\n{DA_LAT}\n```");
        assert!(parse_response(&fenced).is_ok());
    }

    #[test]
    fn unwraps_fence_after_a_lead_in() {
        let reply = format!("Đây là kết quả:\n```json\n{DA_LAT}\n```\nChúc bạn thành công!");
        let resp = parse_response(&reply).unwrap();
        assert_eq!(resp.clarifying_questions.len(), 2);
    }

    #[test]
    fn bare_json_keeps_fences_inside_values() {
        let reply = r#"{"analysis":"a","concisePrompt":"b","deepPrompt":"Trả lời trong khối ```json ... ```","clarifyingQuestions":["q"]}"#;
        let resp = parse_response(reply).unwrap();
        assert!(resp.deep_prompt.contains("```json"));
    }

    #[test]
    fn blank_text_is_empty_response() {
        assert!(matches!(parse_response(""), Err(PromptError::EmptyResponse)));
        assert!(matches!(parse_response("  \n "), Err(PromptError::EmptyResponse)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_response("Xin lỗi, tôi không thể trả lời.").unwrap_err();
        assert!(matches!(err, PromptError::MalformedResponse(_)));
    }

    #[test]
    fn missing_key_is_a_contract_violation() {
        let err = parse_response(r#"{"analysis":"a","concisePrompt":"b","clarifyingQuestions":["q"]}"#)
            .unwrap_err();
        match err {
            PromptError::ContractViolation(msg) => assert!(msg.contains("deepPrompt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_type_is_a_contract_violation() {
        let err = parse_response(
            r#"{"analysis":"a","concisePrompt":"b","deepPrompt":"c","clarifyingQuestions":"q"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PromptError::ContractViolation(_)));

        let err = parse_response("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, PromptError::ContractViolation(_)));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let resp = parse_response(DA_LAT).unwrap();
        let value = serde_json::to_value(&resp).unwrap();
        assert!(value.get("concisePrompt").is_some());
        assert!(value.get("clarifyingQuestions").is_some());
    }
}
