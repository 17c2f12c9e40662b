pub mod config;
pub mod error;
pub mod orchestrator;
pub mod render;

pub mod ai {
    pub mod client;
    pub mod optimizer;
    pub mod prompts;
    pub mod schema_utils;
}

pub mod core {
    pub mod response;
    pub mod session;
}

pub use crate::ai::client::{GeminiClient, GenerationRequest, TextGenerator};
pub use crate::ai::optimizer::PromptOptimizer;
pub use crate::config::Config;
pub use crate::core::response::PromptResponse;
pub use crate::core::session::{Session, Status};
pub use crate::error::PromptError;
pub use crate::orchestrator::Orchestrator;
