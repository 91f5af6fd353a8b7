//! プロンプト生成モジュール
//!
//! - ペルソナごとのシステムプロンプト
//! - build_question: 正式名称から相談文を組み立てる

use crate::persona::Persona;

/// 伝統文化の専門家のシステムプロンプト
pub const TRADITION_SYSTEM_PROMPT: &str =
    "あなたは伝統文化の専門家です。日本の各都道府県の伝統文化について詳しく説明してください。";

/// ローカルフードの専門家のシステムプロンプト
pub const LOCAL_FOOD_SYSTEM_PROMPT: &str =
    "あなたはローカルフードの専門家です。日本の各都道府県の特産品や名物料理について詳しく説明してください。";

/// ペルソナに対応するシステムプロンプトを取得
pub fn system_prompt(persona: Persona) -> &'static str {
    match persona {
        Persona::Tradition => TRADITION_SYSTEM_PROMPT,
        Persona::LocalFood => LOCAL_FOOD_SYSTEM_PROMPT,
    }
}

/// 相談文を組み立てる
///
/// # Arguments
/// * `persona` - 相談先のペルソナ
/// * `canonical` - 正規化済みの都道府県名
pub fn build_question(persona: Persona, canonical: &str) -> String {
    match persona {
        Persona::Tradition => format!("{}の伝統文化について教えてください。", canonical),
        Persona::LocalFood => format!("{}のローカルフードについて教えてください。", canonical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_question() {
        assert_eq!(
            build_question(Persona::Tradition, "東京"),
            "東京の伝統文化について教えてください。"
        );
        assert_eq!(
            build_question(Persona::LocalFood, "大阪"),
            "大阪のローカルフードについて教えてください。"
        );
    }

    #[test]
    fn test_system_prompt_mentions_domain() {
        assert!(system_prompt(Persona::Tradition).contains("伝統文化"));
        assert!(system_prompt(Persona::LocalFood).contains("ローカルフード"));
    }
}
