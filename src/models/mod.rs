mod decor_item;
mod room;
mod style;

pub use decor_item::{
    ApiProduct, CompatibilityResult, DecorItem, Dimensions, ItemCategory, ScoreBand,
};
pub use room::{
    AnalysisSource, ApiColorSwatch, RoomAnalysis, RoomDescriptor, RoomImage, RoomSize,
    RoomType,
};
pub use style::{
    QuizOption, StyleQuestion, StyleRecommendations, StyleResultProfile, StyleTag, StyleTally,
};
