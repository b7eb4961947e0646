//! Per-surface chat adapter: one preset, one history, one reply delay.

use std::time::Duration;

use fieldforce_core::config::FieldforceConfig;
use fieldforce_core::models::conversation::ConversationMessage;
use tracing::{debug, info};

use crate::conversation::{Conversation, validate_input};
use crate::error::AssistantError;
use crate::{Preset, get_preset};

pub struct ChatSurface {
    preset: Box<dyn Preset>,
    conversation: Conversation,
    reply_delay: Duration,
    open: bool,
}

impl ChatSurface {
    /// Start a conversation seeded with the preset's greeting.
    pub fn new(preset: Box<dyn Preset>, reply_delay: Duration) -> Self {
        let mut conversation = Conversation::new();
        conversation.push_assistant(preset.greeting());

        info!(preset = preset.id(), ?reply_delay, "chat surface created");

        Self {
            preset,
            conversation,
            reply_delay,
            open: false,
        }
    }

    pub fn from_config(config: &FieldforceConfig) -> Result<Self, AssistantError> {
        let preset = get_preset(&config.assistant_preset)
            .ok_or_else(|| AssistantError::UnknownPreset(config.assistant_preset.clone()))?;
        Ok(Self::new(preset, config.reply_delay()))
    }

    /// Build from defaults overlaid with `FIELDFORCE_*` environment variables.
    pub fn from_env() -> Result<Self, AssistantError> {
        let config = FieldforceConfig::from_env()?;
        Self::from_config(&config)
    }

    pub fn preset(&self) -> &dyn Preset {
        self.preset.as_ref()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        self.conversation.messages()
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Append the user's message and the reply immediately.
    pub fn submit(&mut self, input: &str) -> Result<&ConversationMessage, AssistantError> {
        let input = self.accept(input)?;
        let reply = self.preset.respond(input);
        self.conversation.push_user(input);
        Ok(self.append_reply(reply))
    }

    /// Wait the configured delay, then append the user's message and the
    /// reply together. Cancel-safe: if the future is dropped during the wait
    /// the history is left untouched. Holding `&mut self` across the wait
    /// keeps at most one reply pending.
    pub async fn send(&mut self, input: &str) -> Result<&ConversationMessage, AssistantError> {
        let input = self.accept(input)?;
        let reply = self.preset.respond(input);

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        self.conversation.push_user(input);
        Ok(self.append_reply(reply))
    }

    fn accept<'a>(&self, input: &'a str) -> Result<&'a str, AssistantError> {
        validate_input(input).inspect_err(|_| {
            debug!(preset = self.preset.id(), "blank input rejected");
        })
    }

    fn append_reply(&mut self, reply: &'static str) -> &ConversationMessage {
        info!(
            preset = self.preset.id(),
            messages = self.conversation.len() + 1,
            "reply appended"
        );
        self.conversation.push_assistant(reply)
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
