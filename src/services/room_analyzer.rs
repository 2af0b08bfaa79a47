use std::{sync::Arc, time::Duration};

use chrono::Utc;
use rand::{seq::SliceRandom, Rng};
use tokio::sync::watch;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        AnalysisSource, RoomAnalysis, RoomDescriptor, RoomImage, RoomSize, RoomType, StyleTag,
    },
    services::providers::RoomAnalysisProvider,
};

/// Palette used for locally generated rooms
const FALLBACK_COLORS: [&str; 3] = ["#E8DFD0", "#9E9A94", "#C9846B"];
const FALLBACK_SIZES: [RoomSize; 3] = [RoomSize::Small, RoomSize::Medium, RoomSize::Large];
const FALLBACK_ROOM_TYPES: [RoomType; 4] = [
    RoomType::Living,
    RoomType::Bedroom,
    RoomType::Dining,
    RoomType::Office,
];

/// Turns an uploaded photo into a `RoomDescriptor`
///
/// Makes a single call to the analysis provider, bounded by `timeout` and
/// raced against the caller's cancellation signal. Any failure, or a missing
/// provider, yields a placeholder descriptor marked
/// [`AnalysisSource::Fallback`]. There are no retries.
#[derive(Clone)]
pub struct RoomAnalyzer {
    provider: Option<Arc<dyn RoomAnalysisProvider>>,
    timeout: Duration,
}

impl RoomAnalyzer {
    pub fn new(provider: Option<Arc<dyn RoomAnalysisProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Analyzer that always produces fallback rooms
    pub fn offline() -> Self {
        Self::new(None, Duration::ZERO)
    }

    /// Analyzes `image`; resolves early with a fallback once `cancel` turns `true`
    pub async fn analyze(
        &self,
        image: &RoomImage,
        cancel: &mut watch::Receiver<bool>,
    ) -> RoomDescriptor {
        let id = Uuid::new_v4().simple().to_string();
        let image_reference = format!("rooms/{}.{}", id, image.extension());

        let Some(provider) = &self.provider else {
            tracing::warn!(room_id = %id, "No analysis provider configured, generating fallback room");
            return fallback_descriptor(id, image_reference, &mut rand::thread_rng());
        };

        match self.call_provider(provider.as_ref(), image, cancel).await {
            Ok(analysis) => {
                tracing::info!(
                    room_id = %id,
                    provider = provider.name(),
                    "Room analysis completed"
                );
                live_descriptor(id, image_reference, analysis)
            }
            Err(e) => {
                tracing::warn!(
                    room_id = %id,
                    provider = provider.name(),
                    error = %e,
                    "Room analysis failed, generating fallback room"
                );
                fallback_descriptor(id, image_reference, &mut rand::thread_rng())
            }
        }
    }

    async fn call_provider(
        &self,
        provider: &dyn RoomAnalysisProvider,
        image: &RoomImage,
        cancel: &mut watch::Receiver<bool>,
    ) -> AppResult<RoomAnalysis> {
        tokio::select! {
            result = tokio::time::timeout(self.timeout, provider.analyze(image)) => match result {
                Ok(Ok(analysis)) => Ok(analysis),
                Ok(Err(e)) => Err(AppError::AnalysisFailure(e.to_string())),
                Err(_) => Err(AppError::AnalysisFailure(format!(
                    "timed out after {}ms",
                    self.timeout.as_millis()
                ))),
            },
            _ = cancelled(cancel) => Err(AppError::AnalysisFailure("cancelled".to_string())),
        }
    }
}

/// Resolves once the flag is `true`; never resolves if the sender goes away first
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    if cancel.wait_for(|flag| *flag).await.is_err() {
        std::future::pending::<()>().await;
    }
}

fn live_descriptor(id: String, image_reference: String, analysis: RoomAnalysis) -> RoomDescriptor {
    RoomDescriptor {
        id,
        image_reference,
        style: analysis.primary_style(),
        dominant_colors: analysis.dominant_colors(),
        size: None,
        room_type: None,
        suitable_positions: analysis.suitable_positions,
        source: AnalysisSource::Live,
        analyzed_at: Utc::now(),
    }
}

fn fallback_descriptor<R: Rng + ?Sized>(
    id: String,
    image_reference: String,
    rng: &mut R,
) -> RoomDescriptor {
    RoomDescriptor {
        id,
        image_reference,
        style: StyleTag::ALL.choose(rng).copied(),
        dominant_colors: FALLBACK_COLORS.iter().map(|c| c.to_string()).collect(),
        size: FALLBACK_SIZES.choose(rng).copied(),
        room_type: FALLBACK_ROOM_TYPES.choose(rng).copied(),
        suitable_positions: vec![],
        source: AnalysisSource::Fallback,
        analyzed_at: Utc::now(),
    }
}
