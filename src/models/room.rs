use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StyleTag;
use crate::error::{AppError, AppResult};

/// An uploaded room photo that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct RoomImage {
    bytes: Vec<u8>,
    content_type: String,
}

impl RoomImage {
    /// Accepts non-empty `image/*` payloads no larger than `max_bytes`
    pub fn new(bytes: Vec<u8>, content_type: &str, max_bytes: usize) -> AppResult<Self> {
        let content_type = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        if !content_type.starts_with("image/") || content_type.len() == "image/".len() {
            return Err(AppError::InvalidInput(format!(
                "Expected an image upload, got content type '{}'",
                content_type
            )));
        }
        if bytes.is_empty() {
            return Err(AppError::InvalidInput("Image upload is empty".to_string()));
        }
        if bytes.len() > max_bytes {
            return Err(AppError::InvalidInput(format!(
                "Image is {} bytes, the limit is {} bytes",
                bytes.len(),
                max_bytes
            )));
        }

        Ok(Self {
            bytes,
            content_type,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// File extension matching the content type, e.g. `jpeg` for `image/jpeg`
    ///
    /// Subtypes outside `[a-z0-9.-]` map to `bin` so the extension is always
    /// safe to embed in a storage path.
    pub fn extension(&self) -> &str {
        let subtype = &self.content_type["image/".len()..];
        let ext = subtype.split('+').next().unwrap_or(subtype);
        let safe = !ext.is_empty()
            && !ext.contains("..")
            && ext.bytes().all(|b| {
                b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-'
            });
        if safe {
            ext
        } else {
            "bin"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Living,
    Bedroom,
    Dining,
    Office,
    Kitchen,
    Bathroom,
}

impl RoomType {
    /// Maps the free-form position labels used by the product API
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "living" | "living room" | "living-room" | "lounge" => Some(RoomType::Living),
            "bedroom" => Some(RoomType::Bedroom),
            "dining" | "dining room" | "dining-room" => Some(RoomType::Dining),
            "office" | "study" => Some(RoomType::Office),
            "kitchen" => Some(RoomType::Kitchen),
            "bathroom" => Some(RoomType::Bathroom),
            _ => None,
        }
    }
}

/// Where a room descriptor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Produced by the external image-analysis provider
    Live,
    /// Locally generated placeholder after the provider failed or was absent
    Fallback,
}

/// Result of analyzing one uploaded room photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDescriptor {
    pub id: String,
    pub image_reference: String,
    #[serde(default)]
    pub style: Option<StyleTag>,
    /// Hex colors, most prominent first
    #[serde(default)]
    pub dominant_colors: Vec<String>,
    #[serde(default)]
    pub size: Option<RoomSize>,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    #[serde(default)]
    pub suitable_positions: Vec<String>,
    pub source: AnalysisSource,
    pub analyzed_at: DateTime<Utc>,
}

// ============================================================================
// Image Analysis API Types
// ============================================================================

/// One swatch of the palette reported by the vision API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiColorSwatch {
    pub name: String,
    pub hex: String,
    #[serde(default)]
    pub percentage: f64,
}

/// Structured analysis returned by the vision API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysis {
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub color_palette: Vec<ApiColorSwatch>,
    #[serde(default)]
    pub suitable_positions: Vec<String>,
}

impl RoomAnalysis {
    /// First reported style that maps onto a known tag
    pub fn primary_style(&self) -> Option<StyleTag> {
        self.styles.iter().find_map(|s| StyleTag::from_alias(s))
    }

    /// Palette hex codes ordered by coverage, largest first
    pub fn dominant_colors(&self) -> Vec<String> {
        let mut swatches: Vec<&ApiColorSwatch> = self.color_palette.iter().collect();
        swatches.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        swatches.into_iter().map(|s| s.hex.clone()).collect()
    }
}
