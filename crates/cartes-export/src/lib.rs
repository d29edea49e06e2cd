//! cartes-export
//!
//! Two-page PDF generation for a sheet of eight flash cards: a question
//! page and an answer page laid out on the same 2×4 grid.

pub mod error;
pub mod layout;
pub mod logo;
pub mod pdf;
pub mod plan;
pub mod styles;
pub mod text;
