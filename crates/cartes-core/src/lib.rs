//! cartes-core
//!
//! Pure domain types for the flash card sheet: cards, decks and the fixed
//! answer-page permutation. No PDF or HTTP dependency.

pub mod error;
pub mod models;
pub mod sheet;
