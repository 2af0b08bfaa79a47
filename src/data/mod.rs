//! Static reference data held in process memory.

pub mod catalog;
pub mod quiz;

pub use catalog::reference_items;
pub use quiz::{profile, STYLE_PROFILES, STYLE_QUESTIONS};
