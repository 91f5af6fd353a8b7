use pref_ai_rust::chat;
use pref_ai_rust::config::Config;
use pref_ai_rust::persona::Persona;
use pref_ai_rust::prompts;

#[tokio::test]
async fn openai_chat_integration() {
    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("OPENAI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let config = Config {
        api_key: Some(api_key),
        ..Config::default()
    };

    let question = prompts::build_question(Persona::Tradition, "東京");
    let answer = chat::generate_answer(&config, Persona::Tradition, &question, false)
        .await
        .expect("chat request failed");

    assert!(!answer.trim().is_empty());
}
