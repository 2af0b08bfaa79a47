use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{AppError, AppResult},
    models::{CompatibilityResult, DecorItem, ItemCategory, RoomDescriptor, ScoreBand},
};

pub const MIN_MATCH_SCORE: u8 = 55;
pub const MAX_MATCH_SCORE: u8 = 95;
pub const MAX_ALTERNATIVES: usize = 3;

/// Produces the raw match score of an item for a room
///
/// Whatever a scorer returns is clamped into
/// [`MIN_MATCH_SCORE`]..=[`MAX_MATCH_SCORE`] by the estimator.
pub trait MatchScorer: Send + Sync {
    fn score(&self, room: &RoomDescriptor, item: &DecorItem) -> u8;
}

impl<F> MatchScorer for F
where
    F: Fn(&RoomDescriptor, &DecorItem) -> u8 + Send + Sync,
{
    fn score(&self, room: &RoomDescriptor, item: &DecorItem) -> u8 {
        self(room, item)
    }
}

/// Placeholder scorer: uniform over the allowed score range, ignores its inputs
pub struct RandomMatchScorer {
    rng: Mutex<StdRng>,
}

impl RandomMatchScorer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of scores
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomMatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer for RandomMatchScorer {
    fn score(&self, _room: &RoomDescriptor, _item: &DecorItem) -> u8 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(MIN_MATCH_SCORE..=MAX_MATCH_SCORE)
    }
}

/// Where to put an item of the given category
pub fn placement_for(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Lighting => "by the reading chair in the corner, near the reading area",
        ItemCategory::Seating => "opposite the sofa, facing the main seating area",
        ItemCategory::WallDecor => "on an empty wall to the right of the window",
        ItemCategory::Table => "centered in the conversation area",
        ItemCategory::Accent => "near the focal point of the room",
    }
}

fn rationale(band: ScoreBand, item: &DecorItem, room: &RoomDescriptor) -> String {
    let name = item.name.to_lowercase();
    match band {
        ScoreBand::Strong => {
            let tones = if item.colors.is_empty() {
                "Its tones".to_string()
            } else {
                format!("Its {} tones", item.colors.join("/"))
            };
            let mut text = format!(
                "The {} complements your existing design aesthetic perfectly. {} harmonize with your room's color palette.",
                name, tones
            );
            if let Some(style) = room.style.filter(|s| item.has_style(*s)) {
                text.push_str(&format!(" It also shares your room's {} character.", style));
            }
            text
        }
        ScoreBand::Moderate => format!(
            "The {} generally works well with your space, though its colors could be a closer match to your palette. The style fits your room's overall aesthetic.",
            name
        ),
        ScoreBand::Weak => format!(
            "While the {} is a beautiful piece, it may not be the ideal match for your current room style and color scheme. Consider the alternative suggestions below.",
            name
        ),
    }
}

/// Judges how well a catalog item fits an analyzed room
#[derive(Clone)]
pub struct CompatibilityEstimator {
    scorer: Arc<dyn MatchScorer>,
}

impl Default for CompatibilityEstimator {
    fn default() -> Self {
        Self::new(Arc::new(RandomMatchScorer::new()))
    }
}

impl CompatibilityEstimator {
    pub fn new(scorer: Arc<dyn MatchScorer>) -> Self {
        Self { scorer }
    }

    /// Scores `item_id` against `room` and picks alternatives from `catalog`
    ///
    /// Fails with `NotFound` when the item is not part of the catalog.
    pub fn estimate(
        &self,
        room: &RoomDescriptor,
        item_id: &str,
        catalog: &[DecorItem],
    ) -> AppResult<CompatibilityResult> {
        let item = catalog
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| AppError::NotFound(format!("Decor item '{}'", item_id)))?;

        let match_score = self
            .scorer
            .score(room, item)
            .clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE);
        let band = ScoreBand::from_score(match_score);

        let alternatives: Vec<DecorItem> = catalog
            .iter()
            .filter(|candidate| candidate.id != item.id)
            .take(MAX_ALTERNATIVES)
            .cloned()
            .collect();

        tracing::info!(
            room_id = %room.id,
            item_id = %item.id,
            match_score,
            band = ?band,
            alternatives = alternatives.len(),
            "Compatibility estimated"
        );

        Ok(CompatibilityResult {
            match_score,
            band,
            placement_suggestion: placement_for(item.category).to_string(),
            rationale: rationale(band, item, room),
            alternatives,
        })
    }
}
