use super::client::{GenerationRequest, TextGenerator};
use super::prompts;
use super::schema_utils;
use crate::core::response::{parse_response, PromptResponse};
use crate::error::PromptError;
use schemars::schema_for;
use serde_json::Value;

/// Turns a rough idea into an analysis, two prompt variants and clarifying questions.
pub struct PromptOptimizer<G: TextGenerator> {
    generator: G,
    response_schema: Value,
}

impl<G: TextGenerator> PromptOptimizer<G> {
    pub fn new(generator: G) -> Result<Self, PromptError> {
        let response_schema = schema_utils::clean_schema(schema_for!(PromptResponse))?;
        Ok(Self {
            generator,
            response_schema,
        })
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn response_schema(&self) -> &Value {
        &self.response_schema
    }

    /// Sends the idea to the model and parses the reply.
    ///
    /// The input is not validated here; rejecting blank ideas is up to the caller.
    pub async fn optimize(&self, idea: &str) -> Result<PromptResponse, PromptError> {
        let request = GenerationRequest {
            system_instruction: prompts::OPTIMIZER_INSTRUCTION.to_string(),
            user_content: idea.to_string(),
            response_schema: Some(self.response_schema.clone()),
        };

        let text = self.generator.generate(&request).await?;
        parse_response(&text)
    }
}
