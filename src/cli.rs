use crate::persona::Persona;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pref-ai")]
#[command(about = "47都道府県の伝統文化・ローカルフード相談CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 都道府県名を指定して専門家に相談
    Ask {
        /// 都道府県名（例: 東京, 大阪府, hokkaido, "Tokyo Prefecture"）
        #[arg(required = true)]
        prefecture: String,

        /// 相談先の専門家 (tradition/local-food)
        #[arg(short, long, default_value = "tradition")]
        persona: Persona,
    },

    /// 対話形式で相談（ペルソナ選択 → 都道府県名入力）
    Interactive,

    /// 都道府県名の正規化結果を確認（API呼び出しなし）
    Check {
        /// 確認する入力文字列
        #[arg(required = true)]
        name: String,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
