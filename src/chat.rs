//! OpenAI Chat Completions連携
//!
//! システムプロンプト（ペルソナ）とユーザー質問の2メッセージを送り、
//! 先頭choiceの本文を返す。リトライ・ストリーミングは行わない。

use crate::config::Config;
use crate::error::{PrefAiError, Result};
use crate::persona::Persona;
use crate::prompts;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat Completionsリクエスト
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat Completionsレスポンス
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// リクエストボディを構築
fn build_request(config: &Config, persona: Persona, question: &str) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        temperature: config.temperature,
        messages: vec![
            ChatMessage {
                role: "system",
                content: prompts::system_prompt(persona).to_string(),
            },
            ChatMessage {
                role: "user",
                content: question.to_string(),
            },
        ],
    }
}

/// 質問を送信して回答本文を取得する
pub async fn generate_answer(
    config: &Config,
    persona: Persona,
    question: &str,
    verbose: bool,
) -> Result<String> {
    let api_key = config.get_api_key()?;
    let request = build_request(config, persona, question);

    if verbose {
        println!("  [Chat] モデル: {}", config.model);
        println!("  [Chat] 質問長: {} chars", question.chars().count());
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;

    let response = client
        .post(OPENAI_API_URL)
        .bearer_auth(&api_key)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(PrefAiError::ApiCall(format!("status {}: {}", status, body)));
    }

    let payload: ChatResponse = response.json().await?;
    let answer = payload
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| PrefAiError::ApiParse("応答にcontentがありません".into()))?;

    if verbose {
        println!("  [Chat] 回答長: {} chars", answer.chars().count());
    }

    Ok(answer)
}
