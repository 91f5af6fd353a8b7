use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`pref-ai config --set-api-key YOUR_KEY` で設定するか、環境変数 OPENAI_API_KEY を設定してください")]
    MissingApiKey,

    #[error("都道府県名を正しく入力してください。Please enter a valid prefecture name: {0}")]
    InvalidPrefecture(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, PrefAiError>;
