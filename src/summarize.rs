// src/summarize.rs
// Generation collaborator: one opaque prompt -> text call. The real
// implementation talks to OpenAI Chat Completions; tests inject mocks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::RadarError;
use crate::prompt::Prompt;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const MAX_OUTPUT_TOKENS: u32 = 800;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Generate the digest text for an assembled prompt. Transport or
    /// provider errors surface as `GenerationFailure`; a blank success
    /// is classified by the caller.
    async fn summarize(&self, prompt: &Prompt) -> Result<String, RadarError>;
    fn name(&self) -> &'static str;
}

pub struct OpenAiSummarizer {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    /// `model_override`: pass Some("gpt-4o-mini") to override the
    /// default model.
    pub fn new(api_key: &str, model_override: Option<&str>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("news-radar/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client");
        Self {
            http,
            api_key: api_key.to_string(),
            model: model_override.unwrap_or(DEFAULT_MODEL).to_string(),
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, prompt: &Prompt) -> Result<String, RadarError> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
            temperature: f32,
            max_tokens: u32,
        }
        #[derive(Deserialize)]
        struct Resp {
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMsg,
        }
        #[derive(Deserialize)]
        struct ChoiceMsg {
            content: String,
        }

        let req = Req {
            model: &self.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: &prompt.system,
                },
                Msg {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: 0.2,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let resp = self
            .http
            .post(OPENAI_URL)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| RadarError::GenerationFailure(format!("request: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RadarError::GenerationFailure(format!("http {status}")));
        }

        let body: Resp = resp
            .json()
            .await
            .map_err(|e| RadarError::GenerationFailure(format!("decoding response: {e}")))?;

        Ok(body
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
