//! Agent runner
//!
//! Sends one prompt to one agent and always comes back with text. Faults
//! are folded into an `"ERROR: ..."` string instead of being returned, so
//! a failing stage shows up on the page and the run keeps going.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use codegen_domain::{AgentConfig, AgentReply, ModelSettings, preview};
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix marking a runner fault in place of a reply
pub const ERROR_PREFIX: &str = "ERROR: ";

/// The shared model handle all five agents run through.
#[derive(Clone)]
pub struct AgentRunner {
    gateway: Arc<dyn LlmGateway>,
    model: ModelSettings,
}

impl AgentRunner {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: ModelSettings) -> Self {
        Self { gateway, model }
    }

    pub fn model(&self) -> &ModelSettings {
        &self.model
    }

    /// Run `agent` on `prompt` and return the trimmed reply text, or
    /// `"ERROR: <message>"` when the call failed.
    pub async fn run(&self, agent: &AgentConfig, prompt: &str) -> String {
        debug!(
            "{} <- {} ({})",
            agent.name(),
            preview(prompt, 80),
            self.model.model
        );

        match self.try_run(agent, prompt).await {
            Ok(reply) => {
                let text = reply.into_text();
                debug!("{} -> {}", agent.name(), preview(&text, 80));
                text
            }
            Err(e) => {
                warn!("{} failed: {}", agent.name(), e);
                format!("{}{}", ERROR_PREFIX, e)
            }
        }
    }

    async fn try_run(&self, agent: &AgentConfig, prompt: &str) -> Result<AgentReply, GatewayError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, agent.instructions())
            .await?;
        session.send(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::LlmSession;
    use async_trait::async_trait;
    use codegen_domain::{AgentRole, Model};
    use std::sync::Mutex;

    enum Outcome {
        Reply(AgentReply),
        SendFails(String),
        SessionFails(String),
    }

    struct OneShotGateway {
        outcome: Mutex<Option<Outcome>>,
        seen_system_prompt: Mutex<Option<String>>,
    }

    impl OneShotGateway {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome: Mutex::new(Some(outcome)),
                seen_system_prompt: Mutex::new(None),
            }
        }
    }

    struct OneShotSession {
        model: Model,
        outcome: Outcome,
    }

    #[async_trait]
    impl LlmSession for OneShotSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, _content: &str) -> Result<AgentReply, GatewayError> {
            match &self.outcome {
                Outcome::Reply(reply) => Ok(reply.clone()),
                Outcome::SendFails(msg) => Err(GatewayError::Other(msg.clone())),
                Outcome::SessionFails(_) => unreachable!(),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for OneShotGateway {
        async fn create_session_with_system_prompt(
            &self,
            model: &ModelSettings,
            system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            *self.seen_system_prompt.lock().unwrap() = Some(system_prompt.to_string());
            match self.outcome.lock().unwrap().take() {
                Some(Outcome::SessionFails(msg)) => Err(GatewayError::ConnectionError(msg)),
                Some(outcome) => Ok(Box::new(OneShotSession {
                    model: model.model.clone(),
                    outcome,
                })),
                None => Err(GatewayError::Other("no outcome left".to_string())),
            }
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(vec![])
        }
    }

    fn runner(gateway: Arc<OneShotGateway>) -> AgentRunner {
        AgentRunner::new(gateway, ModelSettings::default())
    }

    #[tokio::test]
    async fn text_payload_is_trimmed() {
        let gateway = Arc::new(OneShotGateway::new(Outcome::Reply(AgentReply::from("  hi  "))));
        let agent = AgentConfig::from_role(AgentRole::Explainer);
        assert_eq!(runner(gateway).run(&agent, "task").await, "hi");
    }

    #[tokio::test]
    async fn opaque_reply_falls_back_to_string_form() {
        let gateway = Arc::new(OneShotGateway::new(Outcome::Reply(AgentReply::Opaque(
            serde_json::json!({"done": true}),
        ))));
        let agent = AgentConfig::from_role(AgentRole::Reviewer);
        assert_eq!(runner(gateway).run(&agent, "code").await, r#"{"done":true}"#);
    }

    #[tokio::test]
    async fn send_fault_becomes_error_string() {
        let gateway = Arc::new(OneShotGateway::new(Outcome::SendFails("boom".to_string())));
        let agent = AgentConfig::from_role(AgentRole::Developer);
        assert_eq!(runner(gateway).run(&agent, "task").await, "ERROR: boom");
    }

    #[tokio::test]
    async fn session_fault_becomes_error_string() {
        let gateway = Arc::new(OneShotGateway::new(Outcome::SessionFails(
            "refused".to_string(),
        )));
        let agent = AgentConfig::from_role(AgentRole::Debugger);
        let text = runner(gateway).run(&agent, "code").await;
        assert_eq!(text, "ERROR: Connection error: refused");
    }

    #[tokio::test]
    async fn agent_instructions_are_the_system_prompt() {
        let gateway = Arc::new(OneShotGateway::new(Outcome::Reply(AgentReply::from("ok"))));
        let agent = AgentConfig::from_role(AgentRole::UseCase);
        runner(Arc::clone(&gateway)).run(&agent, "code").await;
        assert_eq!(
            gateway.seen_system_prompt.lock().unwrap().as_deref(),
            Some(AgentRole::UseCase.default_instructions())
        );
    }
}
