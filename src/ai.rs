//! Text-generation seam: a small async trait plus the OpenAI-backed
//! implementation and the Lithuanian prompt builders.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Article text is truncated to this many characters before it is embedded in
/// the summarization prompt.
pub const SUMMARY_INPUT_LIMIT: usize = 12_000;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One synchronous-looking generation call. Failures propagate as errors;
    /// callers decide how to degrade.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// OpenAI provider (Chat Completions API). Requires `OPENAI_API_KEY`; a
/// missing key surfaces as a generation error, not a startup failure.
pub struct OpenAiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let http = reqwest::Client::builder()
            .user_agent("lrt-digest/0.1")
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("reqwest client");
        Self {
            http,
            api_key,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(anyhow!("OPENAI_API_KEY is not set"));
        }

        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
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
            messages: vec![Msg {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .http
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .context("openai request")?
            .error_for_status()
            .context("openai status")?;

        let body: Resp = resp.json().await.context("openai response body")?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .unwrap_or("");
        if content.is_empty() {
            return Err(anyhow!("openai returned empty content"));
        }
        Ok(content.to_string())
    }
}

/// Editor-style summarization prompt. The article text is truncated before
/// embedding so one oversized page cannot blow up the request.
pub fn summarize_prompt(title: &str, text: &str) -> String {
    let text: String = text.chars().take(SUMMARY_INPUT_LIMIT).collect();
    format!(
        "Tu esi profesionalus naujienų redaktorius Lietuvoje.\n\
         \n\
         Užduotis: pateik šio straipsnio santrauką lietuvių kalba.\n\
         \n\
         Reikalavimai:\n\
         - Rašyk tik lietuviškai.\n\
         - 3–5 punktai.\n\
         - 1 sakinys: \"Kodėl tai svarbu Lietuvai?\"\n\
         - Jokio clickbait.\n\
         - Jei trūksta faktų: \"Neaišku iš straipsnio.\"\n\
         \n\
         Pavadinimas: {title}\n\
         \n\
         Straipsnio tekstas:\n\
         {text}"
    )
}
