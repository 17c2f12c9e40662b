use super::response::PromptResponse;
use crate::ai::prompts;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub prompt_result: Option<PromptResponse>,
}

impl Message {
    fn user(content: String) -> Self {
        Self { id: Uuid::new_v4(), role: Role::User, content, prompt_result: None }
    }

    fn ai(content: String, prompt_result: Option<PromptResponse>) -> Self {
        Self { id: Uuid::new_v4(), role: Role::Ai, content, prompt_result }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    Submit(String),
    Succeeded(PromptResponse),
    Failed,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("A request is already in progress")]
    Busy,

    #[error("No request is in progress")]
    NotLoading,
}

/// In-memory presentation state. Transitions never mutate; they return a new session.
#[derive(Debug, Clone)]
pub struct Session {
    status: Status,
    result: Option<PromptResponse>,
    error: Option<String>,
    transcript: Vec<Message>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { status: Status::Idle, result: None, error: None, transcript: Vec::new() }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn result(&self) -> Option<&PromptResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn can_submit(&self, input: &str) -> bool {
        self.status != Status::Loading && !input.trim().is_empty()
    }

    pub fn apply(&self, event: Event) -> Result<Session, SessionError> {
        match event {
            Event::Submit(input) => self.submit(input),
            Event::Succeeded(response) => self.succeed(response),
            Event::Failed => self.fail(),
        }
    }

    fn submit(&self, input: String) -> Result<Session, SessionError> {
        if self.status == Status::Loading {
            return Err(SessionError::Busy);
        }
        if input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let mut next = self.clone();
        next.status = Status::Loading;
        next.error = None;
        next.transcript.push(Message::user(input));
        Ok(next)
    }

    fn succeed(&self, response: PromptResponse) -> Result<Session, SessionError> {
        self.expect_loading()?;

        let mut next = self.clone();
        next.status = Status::Success;
        next.transcript.push(Message::ai(
            prompts::CHAT_SUCCESS_MESSAGE.to_string(),
            Some(response.clone()),
        ));
        next.result = Some(response);
        Ok(next)
    }

    // The previous result stays visible; only the error banner changes.
    fn fail(&self) -> Result<Session, SessionError> {
        self.expect_loading()?;

        let mut next = self.clone();
        next.status = Status::Error;
        next.error = Some(prompts::GENERIC_ERROR_MESSAGE.to_string());
        next.transcript.push(Message::ai(prompts::GENERIC_ERROR_MESSAGE.to_string(), None));
        Ok(next)
    }

    fn expect_loading(&self) -> Result<(), SessionError> {
        if self.status == Status::Loading {
            Ok(())
        } else {
            Err(SessionError::NotLoading)
        }
    }
}
