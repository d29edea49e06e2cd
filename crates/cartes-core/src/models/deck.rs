use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::card::Card;
use crate::sheet::CARDS_PER_SHEET;

/// Ordered, append-only collection of submitted cards.
///
/// Only the first [`CARDS_PER_SHEET`] cards ever reach the printed sheet;
/// surplus cards are kept but ignored at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append one form submission's pairs, in entry order.
    pub fn add_form_batch<I, C>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = C>,
        C: Into<Card>,
    {
        let before = self.cards.len();
        self.cards.extend(pairs.into_iter().map(Into::into));
        self.cards.len() - before
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// The cards that fit on one sheet: the first `min(8, len)`.
    pub fn sheet(&self) -> &[Card] {
        &self.cards[..self.cards.len().min(CARDS_PER_SHEET)]
    }

    /// The cards to print when the user asks for a document.
    ///
    /// A full sheet is required; anything short of it is refused.
    pub fn printable(&self) -> Result<&[Card], CoreError> {
        if self.cards.len() < CARDS_PER_SHEET {
            return Err(CoreError::NotEnoughCards {
                have: self.cards.len(),
                need: CARDS_PER_SHEET,
            });
        }
        Ok(self.sheet())
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
