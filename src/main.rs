use clap::Parser;
use pref_ai_rust::{chat, cli, config, error, interactive, prefecture, prompts};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Ask { prefecture: name, persona } => {
            println!("🗾 pref-ai - 都道府県相談\n");

            // 1. 都道府県名の確認
            println!("[1/2] 都道府県名を確認中...");
            let canonical = prefecture::canonical(&name)
                .ok_or_else(|| error::PrefAiError::InvalidPrefecture(name.trim().to_string()))?;
            println!("✔ {} → {}\n", name.trim(), canonical);

            // 2. 専門家に問い合わせ
            println!("[2/2] {}に問い合わせ中...", persona);
            let question = prompts::build_question(persona, canonical);
            let answer = chat::generate_answer(&config, persona, &question, cli.verbose).await?;

            println!("\n✔ 回答\n");
            println!("{}", answer);
        }

        Commands::Interactive => {
            println!("🗾 pref-ai - 都道府県相談\n");
            interactive::run_interactive(&config, cli.verbose).await?;
        }

        Commands::Check { name } => {
            let normalized = prefecture::normalize(&name);

            match prefecture::canonical(&name) {
                Some(canonical) => {
                    println!("✔ 有効な都道府県名です: {} → {}", name.trim(), canonical);
                }
                None => {
                    println!("✗ 都道府県名として認識できません: {}", name.trim());
                    if cli.verbose {
                        println!("  正規化結果: {:?}", normalized);
                    }
                }
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  temperature: {}", config.temperature);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIキー: {}",
                    if config.api_key.is_some() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
