//! 英語ローマ字表記の正規化
//!
//! - 小文字化・前後空白の除去
//! - 末尾の1トークン除去（" prefecture", "-ken", "-fu" など）
//! - 区切り文字（ピリオド・空白・アンダースコア・ハイフン）の除去

use lazy_static::lazy_static;
use std::collections::HashMap;

/// 除去対象の末尾トークン（優先順。長いものを先に照合する）
const TRAILING_TOKENS: &[&str] = &[
    " prefecture",
    " prefectures",
    "-prefecture",
    "-ken",
    " ken",
    "-fu",
    " fu",
    "-to",
    " to",
    "-do",
    " do",
];

lazy_static! {
    /// ローマ字（小文字） → 正式名称
    static ref ENGLISH_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("hokkaido", "北海道"),
        ("aomori", "青森"),
        ("iwate", "岩手"),
        ("miyagi", "宮城"),
        ("akita", "秋田"),
        ("yamagata", "山形"),
        ("fukushima", "福島"),
        ("ibaraki", "茨城"),
        ("tochigi", "栃木"),
        ("gunma", "群馬"),
        ("saitama", "埼玉"),
        ("chiba", "千葉"),
        ("tokyo", "東京"),
        ("kanagawa", "神奈川"),
        ("niigata", "新潟"),
        ("toyama", "富山"),
        ("ishikawa", "石川"),
        ("fukui", "福井"),
        ("yamanashi", "山梨"),
        ("nagano", "長野"),
        ("gifu", "岐阜"),
        ("shizuoka", "静岡"),
        ("aichi", "愛知"),
        ("mie", "三重"),
        ("shiga", "滋賀"),
        ("kyoto", "京都"),
        ("osaka", "大阪"),
        ("hyogo", "兵庫"),
        ("nara", "奈良"),
        ("wakayama", "和歌山"),
        ("tottori", "鳥取"),
        ("shimane", "島根"),
        ("okayama", "岡山"),
        ("hiroshima", "広島"),
        ("yamaguchi", "山口"),
        ("tokushima", "徳島"),
        ("kagawa", "香川"),
        ("ehime", "愛媛"),
        ("kochi", "高知"),
        ("fukuoka", "福岡"),
        ("saga", "佐賀"),
        ("nagasaki", "長崎"),
        ("kumamoto", "熊本"),
        ("oita", "大分"),
        ("miyazaki", "宮崎"),
        ("kagoshima", "鹿児島"),
        ("okinawa", "沖縄"),
    ]);
}

/// ローマ字テーブルへの参照を取得
pub(super) fn english_map() -> &'static HashMap<&'static str, &'static str> {
    &ENGLISH_MAP
}

/// 英語表記を照合用キーに正規化する
///
/// "Tokyo Prefecture" → "tokyo"、"osaka-fu" → "osaka" のように、
/// 小文字化して末尾トークンを1つだけ除去し、区切り文字を取り除く。
pub fn normalize_english(name: &str) -> String {
    let mut s = name.trim().to_lowercase();

    for token in TRAILING_TOKENS {
        if let Some(rest) = s.strip_suffix(token) {
            s = rest.to_string();
            break;
        }
    }

    s.chars()
        .filter(|c| !matches!(c, '.' | ' ' | '_' | '-'))
        .collect()
}
