use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Decor aesthetic a quiz answer, an item or a room can belong to
///
/// Declaration order is significant: the quiz scorer scans tags in this
/// order and the earliest tag wins a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    Vintage,
    Industrial,
    Boho,
    Minimalist,
    Scandinavian,
    MidCentury,
}

impl StyleTag {
    /// All tags in scan order
    pub const ALL: [StyleTag; 6] = [
        StyleTag::Vintage,
        StyleTag::Industrial,
        StyleTag::Boho,
        StyleTag::Minimalist,
        StyleTag::Scandinavian,
        StyleTag::MidCentury,
    ];

    /// Tag returned when a quiz produced no usable answers
    pub const FALLBACK: StyleTag = StyleTag::Minimalist;

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Vintage => "vintage",
            StyleTag::Industrial => "industrial",
            StyleTag::Boho => "boho",
            StyleTag::Minimalist => "minimalist",
            StyleTag::Scandinavian => "scandinavian",
            StyleTag::MidCentury => "mid-century",
        }
    }

    /// Position of the tag in [`StyleTag::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Lenient parse for labels coming from external product or vision APIs
    ///
    /// Accepts the canonical names plus the common spellings those APIs use.
    /// Anything else yields `None`; callers decide whether to drop or fail.
    pub fn from_alias(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "vintage" | "antique" | "retro-vintage" => Some(StyleTag::Vintage),
            "industrial" => Some(StyleTag::Industrial),
            "boho" | "bohemian" | "boho-chic" => Some(StyleTag::Boho),
            "minimalist" | "minimal" | "minimalism" => Some(StyleTag::Minimalist),
            "scandinavian" | "scandi" | "nordic" => Some(StyleTag::Scandinavian),
            "mid-century" | "midcentury" | "mid-century-modern" | "mcm" => {
                Some(StyleTag::MidCentury)
            }
            _ => None,
        }
    }
}

impl Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StyleTag {
    type Err = String;

    /// Strict parse of the canonical kebab-case name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown style tag '{}'", s))
    }
}

/// A single selectable answer of a quiz question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizOption {
    pub option_id: &'static str,
    pub text: &'static str,
    pub style_tag: StyleTag,
}

/// One question of the style quiz
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleQuestion {
    pub id: u32,
    pub question_text: &'static str,
    pub options: &'static [QuizOption],
}

impl StyleQuestion {
    /// Looks up the option chosen by an answer id
    pub fn option(&self, answer_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.option_id == answer_id)
    }
}

/// Suggested palette and pieces for a style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRecommendations {
    pub colors: &'static [&'static str],
    pub materials: &'static [&'static str],
    pub furniture: &'static [&'static str],
    pub decor: &'static [&'static str],
}

/// Descriptive result page for a style tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleResultProfile {
    pub style_tag: StyleTag,
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub image_reference: &'static str,
    pub recommendations: StyleRecommendations,
}

/// Per-tag answer counts of a scored quiz
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTally {
    counts: [u32; 6],
}

impl StyleTally {
    pub fn increment(&mut self, tag: StyleTag) {
        self.counts[tag.index()] += 1;
    }

    pub fn count(&self, tag: StyleTag) -> u32 {
        self.counts[tag.index()]
    }

    /// Sum of all counts, i.e. the number of answers that matched an option
    pub fn matched(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// The first tag in scan order whose count strictly exceeds every earlier one
    ///
    /// Returns `None` when nothing was counted.
    pub fn dominant(&self) -> Option<StyleTag> {
        let mut best: Option<StyleTag> = None;
        let mut highest = 0;
        for tag in StyleTag::ALL {
            let count = self.count(tag);
            if count > highest {
                highest = count;
                best = Some(tag);
            }
        }
        best
    }

    /// Counts keyed by tag, in scan order
    pub fn entries(&self) -> Vec<(StyleTag, u32)> {
        StyleTag::ALL.iter().map(|t| (*t, self.count(*t))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_tag_serde_kebab_case() {
        let json = serde_json::to_string(&StyleTag::MidCentury).unwrap();
        assert_eq!(json, "\"mid-century\"");

        let tag: StyleTag = serde_json::from_str("\"scandinavian\"").unwrap();
        assert_eq!(tag, StyleTag::Scandinavian);
    }

    #[test]
    fn test_style_tag_from_str_is_strict() {
        assert_eq!("boho".parse::<StyleTag>(), Ok(StyleTag::Boho));
        assert!("bohemian".parse::<StyleTag>().is_err());
        assert!("Boho".parse::<StyleTag>().is_err());
    }

    #[test]
    fn test_style_tag_from_alias() {
        assert_eq!(StyleTag::from_alias("Bohemian"), Some(StyleTag::Boho));
        assert_eq!(
            StyleTag::from_alias("mid-century modern"),
            Some(StyleTag::MidCentury)
        );
        assert_eq!(StyleTag::from_alias("Mid_Century"), Some(StyleTag::MidCentury));
        assert_eq!(StyleTag::from_alias(" nordic "), Some(StyleTag::Scandinavian));
        assert_eq!(StyleTag::from_alias("art deco"), None);
        assert_eq!(StyleTag::from_alias(""), None);
    }

    #[test]
    fn test_index_matches_scan_order() {
        for (i, tag) in StyleTag::ALL.iter().enumerate() {
            assert_eq!(tag.index(), i);
        }
    }

    #[test]
    fn test_tally_dominant_prefers_earliest_on_tie() {
        let mut tally = StyleTally::default();
        tally.increment(StyleTag::MidCentury);
        tally.increment(StyleTag::Industrial);
        assert_eq!(tally.dominant(), Some(StyleTag::Industrial));

        tally.increment(StyleTag::MidCentury);
        assert_eq!(tally.dominant(), Some(StyleTag::MidCentury));
        assert_eq!(tally.matched(), 3);
    }

    #[test]
    fn test_empty_tally_has_no_dominant() {
        assert_eq!(StyleTally::default().dominant(), None);
    }
}
