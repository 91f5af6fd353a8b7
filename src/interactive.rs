//! 対話式相談モジュール
//!
//! ペルソナ選択 → 都道府県名入力 → 回答表示の1サイクルを実行する。
//! 会話履歴は保持しない。

use crate::chat;
use crate::config::Config;
use crate::error::{PrefAiError, Result};
use crate::persona::Persona;
use crate::prefecture;
use crate::prompts;
use dialoguer::{Input, Select};

/// 対話式で相談を実行
pub async fn run_interactive(config: &Config, verbose: bool) -> Result<()> {
    println!("このツールでは、以下の2つの相談ができます。");
    println!("1. 47都道府県の伝統文化の専門家に相談");
    println!("2. 47都道府県のローカルフードの専門家に相談");
    println!("---\n");

    let persona = prompt_persona()?;
    let input = prompt_prefecture()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        println!("都道府県名を入力してください。Please enter the name of the prefecture.");
        return Ok(());
    }

    let Some(canonical) = prefecture::canonical(trimmed) else {
        println!("都道府県名を正しく入力してください。Please enter a valid prefecture name.");
        return Ok(());
    };

    let question = prompts::build_question(persona, canonical);
    println!("\n{}に問い合わせ中...", persona);

    let answer = chat::generate_answer(config, persona, &question, verbose).await?;

    println!("\n✔ 回答\n");
    println!("{}", answer);

    Ok(())
}

/// ペルソナ選択プロンプト
fn prompt_persona() -> Result<Persona> {
    let labels: Vec<&str> = Persona::ALL.iter().map(|p| p.label()).collect();

    let selection = Select::new()
        .with_prompt("動作モードを選択してください")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| PrefAiError::Prompt(e.to_string()))?;

    Ok(Persona::ALL[selection])
}

/// 都道府県名入力プロンプト
fn prompt_prefecture() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("都道府県名を入力してください")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PrefAiError::Prompt(e.to_string()))?;

    Ok(input)
}
