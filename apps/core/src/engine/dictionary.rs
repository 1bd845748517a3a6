//! Keyword dictionary and stoplist.
//!
//! The dictionary maps substring patterns found inside noun tokens to
//! canonical hobby labels. It is an explicitly ORDERED sequence: entries are
//! scanned front to back and the first matching pattern wins, so resolution
//! is reproducible across runs and platforms. The stoplist holds generic
//! nouns that are never promoted to raw keywords.

use std::collections::HashSet;

/// A single pattern → canonical-label mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Substring matched against token text.
    pub pattern: String,
    /// Canonical label the token is normalized to.
    pub label: String,
}

/// Ordered pattern dictionary. Earlier entries take precedence.
#[derive(Debug, Clone)]
pub struct KeywordDictionary {
    entries: Vec<DictionaryEntry>,
}

/// Default pattern → label pairs, derived from the hobby catalog.
///
/// Order matters: more specific patterns come before shorter ones that would
/// shadow them (e.g. 旅行 before 旅).
const DEFAULT_DICTIONARY: &[(&str, &str)] = &[
    ("映画", "映画鑑賞"),
    ("音楽", "音楽鑑賞"),
    ("ライブ", "ライブ鑑賞"),
    ("フェス", "ライブ鑑賞"),
    ("カラオケ", "カラオケ"),
    ("美術", "美術館巡り"),
    ("アート", "美術館巡り"),
    ("舞台", "舞台鑑賞"),
    ("ミュージカル", "舞台鑑賞"),
    ("読書", "読書"),
    ("小説", "読書"),
    ("英会話", "英会話学習"),
    ("英語", "英会話学習"),
    ("カフェ", "カフェ巡り"),
    ("コーヒー", "カフェ巡り"),
    ("料理", "料理"),
    ("ラーメン", "ラーメン巡り"),
    ("旅行", "旅行"),
    ("旅", "旅行"),
    ("温泉", "旅行"),
    ("登山", "登山"),
    ("山登", "登山"),
    ("キャンプ", "キャンプ"),
    ("ゲーム", "ゲーム"),
    ("アニメ", "アニメ"),
    ("YouTube", "YouTube鑑賞"),
    ("動画", "YouTube鑑賞"),
    ("ショッピング", "ショッピング"),
    ("買い物", "ショッピング"),
    ("ネイル", "ネイル"),
    ("ファッション", "ファッション"),
    ("散歩", "散歩"),
];

/// Generic nouns excluded from raw keyword promotion.
const DEFAULT_STOPLIST: &[&str] = &[
    "こと", "もの", "ところ", "ため", "よう", "自分", "趣味", "仕事",
    "休日", "週末", "毎日", "最近", "友達", "時間", "場所", "一緒",
    "出会い", "紹介", "宜しく", "よろしく", "プロフィール", "メッセージ",
    "マッチング", "アプリ",
];

impl KeywordDictionary {
    /// Build a dictionary from ordered pattern/label pairs.
    pub fn from_pairs<P, L>(pairs: impl IntoIterator<Item = (P, L)>) -> Self
    where
        P: Into<String>,
        L: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(pattern, label)| DictionaryEntry {
                pattern: pattern.into(),
                label: label.into(),
            })
            .collect();
        Self { entries }
    }

    /// Resolve a token to its canonical label, if any pattern is contained
    /// in the token's text. First entry in dictionary order wins.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| token.contains(entry.pattern.as_str()))
            .map(|entry| entry.label.as_str())
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_DICTIONARY.iter().copied())
    }
}

/// Set of generic words excluded from raw keyword promotion.
#[derive(Debug, Clone)]
pub struct StopList {
    words: HashSet<String>,
}

impl StopList {
    pub fn from_words<W: Into<String>>(words: impl IntoIterator<Item = W>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Default for StopList {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPLIST.iter().copied())
    }
}
