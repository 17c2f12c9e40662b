use crate::ai::client::TextGenerator;
use crate::ai::optimizer::PromptOptimizer;
use crate::core::session::{Event, Session, SessionError};

/// Drives one submit → model call → success/failure cycle over a `Session`.
pub struct Orchestrator<G: TextGenerator> {
    optimizer: PromptOptimizer<G>,
}

impl<G: TextGenerator> Orchestrator<G> {
    pub fn new(optimizer: PromptOptimizer<G>) -> Self {
        Self { optimizer }
    }

    pub fn optimizer(&self) -> &PromptOptimizer<G> {
        &self.optimizer
    }

    /// Returns the session after the request settles.
    ///
    /// Blank input or a pending request is rejected before any network call. Model
    /// failures are not errors here: they land in the returned session's error state.
    pub async fn submit(&self, session: &Session, idea: &str) -> Result<Session, SessionError> {
        let loading = session.apply(Event::Submit(idea.to_string()))?;
        log::info!("Optimizing idea ({} chars)", idea.chars().count());

        match self.optimizer.optimize(idea).await {
            Ok(response) => {
                log::info!(
                    "Prompt ready ({} clarifying questions)",
                    response.clarifying_questions.len()
                );
                loading.apply(Event::Succeeded(response))
            }
            Err(e) => {
                log::error!("Prompt optimization failed: {e}");
                loading.apply(Event::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::GenerationRequest;
    use crate::core::session::Status;
    use crate::error::PromptError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGenerator {
        reply: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, PromptError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    fn orchestrator(reply: &'static str) -> Orchestrator<CountingGenerator> {
        let generator = CountingGenerator { reply, calls: AtomicUsize::new(0) };
        Orchestrator::new(PromptOptimizer::new(generator).unwrap())
    }

    fn calls(o: &Orchestrator<CountingGenerator>) -> usize {
        o.optimizer().generator().calls.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn successful_cycle_lands_in_success() {
        let o = orchestrator(
            r#"{"analysis":"a","concisePrompt":"b","deepPrompt":"c","clarifyingQuestions":["q1","q2"]}"#,
        );
        let session = o.submit(&Session::new(), "Đà Lạt").await.unwrap();
        assert_eq!(session.status(), Status::Success);
        assert_eq!(session.result().unwrap().clarifying_questions.len(), 2);
        assert_eq!(calls(&o), 1);
    }

    #[tokio::test]
    async fn malformed_reply_lands_in_error() {
        let o = orchestrator("not json");
        let session = o.submit(&Session::new(), "idea").await.unwrap();
        assert_eq!(session.status(), Status::Error);
        assert!(session.result().is_none());
        assert!(session.error().is_some());
    }

    #[tokio::test]
    async fn blank_idea_never_reaches_the_model() {
        let o = orchestrator("{}");
        let err = o.submit(&Session::new(), "").await.unwrap_err();
        assert_eq!(err, SessionError::EmptyInput);
        assert_eq!(calls(&o), 0);
    }
}
