use serde::Serialize;
use tera::{Context, Tera};

use cartes_core::sheet::CARDS_PER_SHEET;

const INDEX_TEMPLATE: &str = "index.html";

pub const CARDS_ADDED: &str = "Cartes ajoutées! Vous pouvez générer le PDF maintenant.";
pub const NOT_ENOUGH_CARDS: &str =
    "Veuillez ajouter suffisamment de cartes pour générer un PDF (au moins 8).";
pub const DECK_CLEARED: &str = "Les cartes ont été effacées.";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct IndexPage<'a> {
    slots: usize,
    card_count: usize,
    notice: Option<&'a Notice>,
}

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html.tera"))?;
        Ok(Self { tera })
    }

    /// The entry form, with the session's card count and an optional notice.
    pub fn index(&self, card_count: usize, notice: Option<&Notice>) -> Result<String, tera::Error> {
        let page = IndexPage {
            slots: CARDS_PER_SHEET,
            card_count,
            notice,
        };
        self.tera
            .render(INDEX_TEMPLATE, &Context::from_serialize(&page)?)
    }
}
