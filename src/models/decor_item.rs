use serde::{Deserialize, Serialize};

use super::{RoomType, StyleTag};

/// Coarse kind of a catalog item, drives placement suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Lighting,
    Seating,
    WallDecor,
    Table,
    Accent,
}

/// Name keywords checked in order; the first hit decides the category
const CATEGORY_KEYWORDS: &[(&str, ItemCategory)] = &[
    ("lamp", ItemCategory::Lighting),
    ("chandelier", ItemCategory::Lighting),
    ("armchair", ItemCategory::Seating),
    ("chair", ItemCategory::Seating),
    ("sofa", ItemCategory::Seating),
    ("stool", ItemCategory::Seating),
    ("shelf", ItemCategory::WallDecor),
    ("wall", ItemCategory::WallDecor),
    ("mirror", ItemCategory::WallDecor),
    ("table", ItemCategory::Table),
    ("desk", ItemCategory::Table),
];

impl ItemCategory {
    /// Infers a category from a product name for sources that don't carry one
    pub fn infer_from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(ItemCategory::Accent)
    }
}

/// Physical size in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

/// A furnishing item of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorItem {
    pub id: String,
    pub name: String,
    pub image_reference: String,
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub styles: Vec<StyleTag>,
    pub colors: Vec<String>,
    pub category: ItemCategory,
    #[serde(default)]
    pub subtype: Option<String>,
    pub suitable_room_types: Vec<RoomType>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

impl DecorItem {
    pub fn has_style(&self, tag: StyleTag) -> bool {
        self.styles.contains(&tag)
    }

    pub fn suits_room(&self, room_type: RoomType) -> bool {
        self.suitable_room_types.contains(&room_type)
    }
}

/// Tone of the explanation attached to a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 85 and above
    Strong,
    /// 70 to 84
    Moderate,
    /// Below 70
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => ScoreBand::Strong,
            70..=84 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }
}

/// Outcome of estimating how well an item fits a room
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub match_score: u8,
    pub band: ScoreBand,
    pub placement_suggestion: String,
    pub rationale: String,
    pub alternatives: Vec<DecorItem>,
}

// ============================================================================
// Product API Types
// ============================================================================

/// Raw product returned by the remote catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProduct {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ApiProduct {
    /// Converts into a catalog item, using `fallback_id` when the API sent none
    ///
    /// Unknown style or position labels are dropped with a warning rather than
    /// admitted into the closed enumerations.
    pub fn into_decor_item(self, fallback_id: String) -> DecorItem {
        let styles = match StyleTag::from_alias(&self.style) {
            Some(tag) => vec![tag],
            None => {
                if !self.style.is_empty() {
                    tracing::warn!(product = %self.name, style = %self.style, "Unknown product style dropped");
                }
                vec![]
            }
        };

        let suitable_room_types = match RoomType::from_label(&self.position) {
            Some(room_type) => vec![room_type],
            None => {
                if !self.position.is_empty() {
                    tracing::warn!(product = %self.name, position = %self.position, "Unknown product position dropped");
                }
                vec![]
            }
        };

        DecorItem {
            id: self.id.unwrap_or(fallback_id),
            category: ItemCategory::infer_from_name(&self.name),
            image_reference: self.images.into_iter().next().unwrap_or_default(),
            name: self.name,
            description: self.description,
            price: self.price,
            styles,
            colors: vec![],
            subtype: None,
            suitable_room_types,
            dimensions: None,
        }
    }
}
