//! 都道府県名の正規化モジュール
//!
//! 自由入力の都道府県名を47の正式名称のいずれかに解決する。
//!
//! ## 受け付ける表記
//! 1. 正式名称そのもの（"北海道", "東京", "大阪"）
//! 2. 接尾辞（県・府・都・道）付きの表記（"東京都" → "東京"）
//! 3. 英語ローマ字表記（"Tokyo", "osaka-fu", "HOKKAIDO" など）
//!
//! 正規化テーブルは起動時に一度だけ構築され、以降は読み取り専用。

pub mod english;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// 47都道府県の正式名称（固定順）
pub const PREFECTURES: &[&str] = &[
    "北海道", "青森", "岩手", "宮城", "秋田", "山形", "福島",
    "茨城", "栃木", "群馬", "埼玉", "千葉", "東京", "神奈川",
    "新潟", "富山", "石川", "福井", "山梨", "長野",
    "岐阜", "静岡", "愛知", "三重",
    "滋賀", "京都", "大阪", "兵庫", "奈良", "和歌山",
    "鳥取", "島根", "岡山", "広島", "山口",
    "徳島", "香川", "愛媛", "高知",
    "福岡", "佐賀", "長崎", "熊本", "大分", "宮崎", "鹿児島", "沖縄",
];

/// 行政区分の接尾辞
const SUFFIXES: [char; 4] = ['県', '府', '都', '道'];

lazy_static! {
    /// 短縮形 → 正式名称
    ///
    /// 正式名称から末尾の接尾辞を1文字除いたものをキーとする
    /// （"北海" → "北海道"、"京" → "京都"、接尾辞なしの名称は自分自身）。
    static ref SHORT_FORM_MAP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::with_capacity(PREFECTURES.len());
        for &p in PREFECTURES {
            map.insert(strip_admin_suffix(p).unwrap_or(p), p);
        }
        map
    };
}

/// 末尾の行政区分接尾辞を1文字だけ除去
fn strip_admin_suffix(name: &str) -> Option<&str> {
    SUFFIXES.iter().find_map(|&suf| name.strip_suffix(suf))
}

/// 都道府県名を正規化する
///
/// 判定は以下の順で行い、最初に一致したものを返す:
/// 1. 空・空白のみの入力は空文字列
/// 2. 正式名称との完全一致
/// 3. 接尾辞（県・府・都・道）を除去して短縮形テーブルを照合。
///    テーブルに無い場合も除去後の文字列をそのまま返す
///    （妥当性は `is_valid` で別途確認すること）
/// 4. 英語表記の正規化（[`english::normalize_english`]）
/// 5. 入力そのものが短縮形テーブルのキーであれば対応する正式名称
/// 6. どれにも該当しなければ入力（トリム済み）をそのまま返す
///
/// 戻り値が正式名称である保証はないため、呼び出し側は
/// [`is_valid`] または [`canonical`] で確認してから使用する。
pub fn normalize(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    if PREFECTURES.contains(&s) {
        return s.to_string();
    }

    // 接尾辞付き表記（"東京都", "大阪府" など）
    if let Some(candidate) = strip_admin_suffix(s) {
        return SHORT_FORM_MAP
            .get(candidate)
            .copied()
            .unwrap_or(candidate)
            .to_string();
    }

    // 英語表記（"Tokyo", "osaka-fu" など）
    let eng = english::normalize_english(s);
    if let Some(&full) = english::english_map().get(eng.as_str()) {
        return full.to_string();
    }

    // 入力そのものが短縮形（"京" → "京都" など）
    if let Some(&full) = SHORT_FORM_MAP.get(s) {
        return full.to_string();
    }

    s.to_string()
}

/// 入力が47都道府県のいずれかを指しているか
pub fn is_valid(raw: &str) -> bool {
    let normalized = normalize(raw);
    PREFECTURES.iter().any(|&p| p == normalized)
}

/// 正式名称を取得する
///
/// 正規化結果が47都道府県に含まれる場合のみ `Some` を返す。
pub fn canonical(raw: &str) -> Option<&'static str> {
    let normalized = normalize(raw);
    PREFECTURES.iter().find(|&&p| p == normalized).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefecture_count() {
        assert_eq!(PREFECTURES.len(), 47);
    }

    #[test]
    fn test_normalize_canonical_passthrough() {
        for &p in PREFECTURES {
            assert_eq!(normalize(p), p);
            assert!(is_valid(p));
        }
    }

    #[test]
    fn test_normalize_with_suffix() {
        assert_eq!(normalize("東京都"), "東京");
        assert_eq!(normalize("大阪府"), "大阪");
        assert_eq!(normalize("埼玉県"), "埼玉");
        assert_eq!(normalize("京都府"), "京都");
    }

    #[test]
    fn test_normalize_short_form_quirks() {
        // "京都" は末尾が「都」のため短縮キーは「京」になる
        assert_eq!(normalize("京"), "京都");
        assert_eq!(normalize("北海"), "北海道");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("  東京  "), "東京");
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
    }

    #[test]
    fn test_sentinel_fallback() {
        // 接尾辞除去後にテーブルに無い場合は除去後の文字列を返す
        assert_eq!(normalize("江戸府"), "江戸");
        assert!(!is_valid("江戸府"));
        // どこにも該当しなければトリム済みの入力をそのまま返す
        assert_eq!(normalize("Atlantis"), "Atlantis");
        assert!(!is_valid("Atlantis"));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical("東京都"), Some("東京"));
        assert_eq!(canonical("hokkaido"), Some("北海道"));
        assert_eq!(canonical("Atlantis"), None);
        assert_eq!(canonical(""), None);
    }

    #[test]
    fn test_idempotence() {
        for &p in PREFECTURES {
            let once = normalize(p);
            assert_eq!(normalize(&once), once);
        }
    }
}
