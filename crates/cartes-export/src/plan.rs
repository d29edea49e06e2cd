//! What goes in which cell, independent of drawing.

use cartes_core::models::card::Card;
use cartes_core::sheet::{CARDS_PER_SHEET, swapped_index};

/// Text printed on one side of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace<'a> {
    /// Grid cell on the page, `0..8`.
    pub cell: usize,
    /// Index of the card this text belongs to.
    pub card: usize,
    pub label: String,
    pub text: &'a str,
}

/// Contents of the question page and the answer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan<'a> {
    pub questions: Vec<CardFace<'a>>,
    pub answers: Vec<CardFace<'a>>,
}

impl SheetPlan<'_> {
    /// Number of cards drawn on the question page.
    pub fn card_count(&self) -> usize {
        self.questions.len()
    }
}

/// Lay out up to eight cards.
///
/// Questions occupy cells `0..n` in order. Cell `i` of the answer page
/// holds the answer of card `swapped_index(i)`; when that card is missing
/// from a short deck the cell stays empty.
pub fn plan_sheet(cards: &[Card]) -> SheetPlan<'_> {
    let cards = &cards[..cards.len().min(CARDS_PER_SHEET)];

    let questions = cards
        .iter()
        .enumerate()
        .map(|(cell, card)| CardFace {
            cell,
            card: cell,
            label: format!("Q {}:", cell + 1),
            text: &card.question,
        })
        .collect();

    let answers = (0..cards.len())
        .filter_map(|cell| {
            let source = swapped_index(cell);
            cards.get(source).map(|card| CardFace {
                cell,
                card: source,
                label: format!("R {}:", source + 1),
                text: &card.answer,
            })
        })
        .collect();

    SheetPlan { questions, answers }
}
