use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Maximum number of hobby tags a profile may carry.
pub const MAX_HOBBY_TAGS: usize = 5;

/// A single entry of the static hobby catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hobby {
    /// Unique canonical label (e.g. "映画鑑賞").
    pub name: &'static str,
    /// Display glyph. Irrelevant to the analysis engine.
    pub icon: &'static str,
    /// Grouping label (e.g. "芸術").
    pub category: &'static str,
}

/// Profile attributes of a match, as collected by the input form.
///
/// Transient: created per analysis request and discarded afterwards. The
/// hobby-tag invariants (at most [`MAX_HOBBY_TAGS`], no duplicates) are
/// enforced here at the boundary rather than in presentation code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileInput {
    /// Age in years, if provided.
    pub age: Option<u32>,
    /// Residence, usually one of [`PREFECTURES`] but free text is accepted.
    #[serde(default)]
    pub location: String,
    /// Occupation, usually one of [`OCCUPATIONS`] but free text is accepted.
    #[serde(default)]
    pub occupation: String,
    /// Selected hobby tags, drawn from the hobby catalog.
    #[serde(default)]
    #[validate(length(max = 5), custom(function = validate_unique_tags))]
    pub hobby_tags: Vec<String>,
    /// Free-form self-introduction text.
    #[serde(default)]
    pub self_introduction: String,
}

fn validate_unique_tags(tags: &Vec<String>) -> Result<(), ValidationError> {
    for (i, tag) in tags.iter().enumerate() {
        if tags[..i].contains(tag) {
            return Err(ValidationError::new("duplicate_hobby_tag"));
        }
    }
    Ok(())
}

impl ProfileInput {
    /// Create a profile carrying only a self-introduction text.
    #[allow(dead_code)]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            self_introduction: text.into(),
            ..Self::default()
        }
    }

    /// Add a hobby tag, enforcing the selection invariants.
    ///
    /// Rejects the insertion when the tag is already selected or when the
    /// selection is full.
    pub fn push_hobby_tag(&mut self, tag: impl Into<String>) -> Result<(), AppError> {
        let tag = tag.into();
        if self.hobby_tags.contains(&tag) {
            return Err(AppError::Validation(format!(
                "hobby tag already selected: {}",
                tag
            )));
        }
        if self.hobby_tags.len() >= MAX_HOBBY_TAGS {
            return Err(AppError::Validation(format!(
                "at most {} hobby tags may be selected",
                MAX_HOBBY_TAGS
            )));
        }
        self.hobby_tags.push(tag);
        Ok(())
    }
}

/// The static hobby catalog presented by the selection grid.
///
/// Immutable, process-wide configuration data. Names double as the canonical
/// labels used by the keyword dictionary.
pub const HOBBY_CATALOG: &[Hobby] = &[
    // 音楽
    Hobby { name: "音楽鑑賞", icon: "🎵", category: "音楽" },
    Hobby { name: "ライブ鑑賞", icon: "🎤", category: "音楽" },
    Hobby { name: "カラオケ", icon: "🎙️", category: "音楽" },
    // 芸術
    Hobby { name: "映画鑑賞", icon: "🎬", category: "芸術" },
    Hobby { name: "美術館巡り", icon: "🖼️", category: "芸術" },
    Hobby { name: "舞台鑑賞", icon: "🎭", category: "芸術" },
    // 知識・教養
    Hobby { name: "読書", icon: "📚", category: "知識" },
    Hobby { name: "英会話学習", icon: "🗣️", category: "知識" },
    // グルメ
    Hobby { name: "カフェ巡り", icon: "☕", category: "グルメ" },
    Hobby { name: "料理", icon: "🍳", category: "グルメ" },
    Hobby { name: "ラーメン巡り", icon: "🍜", category: "グルメ" },
    // アウトドア
    Hobby { name: "旅行", icon: "✈️", category: "アウトドア" },
    Hobby { name: "登山", icon: "⛰️", category: "アウトドア" },
    Hobby { name: "キャンプ", icon: "🏕️", category: "アウトドア" },
    // エンタメ
    Hobby { name: "ゲーム", icon: "🎮", category: "エンタメ" },
    Hobby { name: "アニメ", icon: "🧸", category: "エンタメ" },
    Hobby { name: "YouTube鑑賞", icon: "📺", category: "エンタメ" },
    // 日常・生活
    Hobby { name: "ショッピング", icon: "🛍️", category: "日常" },
    Hobby { name: "ネイル", icon: "💅", category: "日常" },
    Hobby { name: "ファッション", icon: "👗", category: "日常" },
    Hobby { name: "散歩", icon: "🚶", category: "日常" },
];

/// Catalog grouped by category, categories in sorted order.
#[allow(dead_code)]
pub fn grouped_hobbies() -> Vec<(&'static str, Vec<&'static Hobby>)> {
    let mut categories: Vec<&'static str> = Vec::new();
    for hobby in HOBBY_CATALOG {
        if !categories.contains(&hobby.category) {
            categories.push(hobby.category);
        }
    }
    categories.sort_unstable();
    categories
        .into_iter()
        .map(|category| {
            let members = HOBBY_CATALOG
                .iter()
                .filter(|h| h.category == category)
                .collect();
            (category, members)
        })
        .collect()
}

/// Residence choices offered by the location picker.
#[allow(dead_code)]
pub const PREFECTURES: &[&str] = &[
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県",
    "茨城県", "栃木県", "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県",
    "新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県", "岐阜県",
    "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府", "兵庫県",
    "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県",
    "徳島県", "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県",
    "熊本県", "大分県", "宮崎県", "鹿児島県", "沖縄県",
];

/// Occupation choices offered by the occupation picker.
#[allow(dead_code)]
pub const OCCUPATIONS: &[&str] = &[
    "会社員", "公務員", "経営者・役員", "IT関係", "医療関係", "教育関係",
    "金融関係", "クリエイター", "フリーランス", "学生", "その他",
];
