use printpdf::{
    ImageTransform, IndirectFontRef, Line as PdfLine, Mm, PdfDocument, PdfLayerReference, Point,
};

use cartes_core::models::card::Card;
use cartes_core::models::deck::Deck;
use cartes_core::sheet::CARDS_PER_SHEET;

use crate::error::ExportError;
use crate::layout::{PageGeometry, Segment};
use crate::logo::Logo;
use crate::plan::{CardFace, plan_sheet};
use crate::styles::CardStyles;
use crate::text::{Line, wrap};

/// File name offered for download.
pub const PDF_FILENAME: &str = "cartes_flash_anki.pdf";

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

const DOCUMENT_TITLE: &str = "Cartes flash Anki";

/// Render a deck that is ready to print.
///
/// Decks short of a full sheet are refused with
/// [`CoreError::NotEnoughCards`](cartes_core::error::CoreError::NotEnoughCards);
/// cards past the eighth are ignored.
pub fn render_deck(deck: &Deck, logo: &Logo) -> Result<Vec<u8>, ExportError> {
    let cards = deck.printable()?;
    render_cards(cards, logo)
}

/// Render up to eight cards into a two-page PDF: questions, then answers.
///
/// Fewer than eight cards yields a partial sheet; both pages are always
/// emitted.
pub fn render_cards(cards: &[Card], logo: &Logo) -> Result<Vec<u8>, ExportError> {
    if cards.len() > CARDS_PER_SHEET {
        tracing::debug!(
            ignored = cards.len() - CARDS_PER_SHEET,
            "cards beyond the first sheet are not rendered"
        );
    }

    let geometry = PageGeometry::a4();
    let styles = CardStyles::default();
    let plan = plan_sheet(cards);

    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(geometry.page_width),
        Mm(geometry.page_height),
        "Questions",
    );
    let font = doc
        .add_builtin_font(styles.font.clone())
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    // Layer handles are dropped before `doc` is consumed.
    {
        let questions = SheetPage {
            layer: doc.get_page(page).get_layer(layer),
            geometry: &geometry,
            styles: &styles,
            font: &font,
            logo,
        };
        questions.draw(&plan.questions);

        let (page, layer) = doc.add_page(
            Mm(geometry.page_width),
            Mm(geometry.page_height),
            "Réponses",
        );
        let answers = SheetPage {
            layer: doc.get_page(page).get_layer(layer),
            ..questions
        };
        answers.draw(&plan.answers);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    tracing::info!(
        cards = plan.card_count(),
        bytes = bytes.len(),
        "rendered flash card sheet"
    );
    Ok(bytes)
}

/// One page of the sheet being drawn.
struct SheetPage<'a> {
    layer: PdfLayerReference,
    geometry: &'a PageGeometry,
    styles: &'a CardStyles,
    font: &'a IndirectFontRef,
    logo: &'a Logo,
}

impl SheetPage<'_> {
    fn draw(&self, faces: &[CardFace<'_>]) {
        self.layer
            .set_outline_thickness(self.styles.separator_thickness_pt);
        self.stroke(self.geometry.vertical_separator());

        for face in faces {
            self.draw_face(face);
        }

        // Every row that holds a card is closed, up to the last one.
        let last_cell = faces.iter().map(|f| f.cell).max();
        if let Some(last_cell) = last_cell {
            for cell in 0..=last_cell {
                if let Some(segment) = self.geometry.horizontal_separator_after(cell) {
                    self.stroke(segment);
                }
            }
        }
    }

    fn draw_face(&self, face: &CardFace<'_>) {
        let cell = self.geometry.cell(face.cell);
        let styles = self.styles;

        let logo_rect =
            self.geometry
                .logo_rect(cell, styles.logo_width_mm, self.logo.aspect_ratio());
        self.logo.to_pdf_image().add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(logo_rect.x)),
                translate_y: Some(self.flip(logo_rect.bottom())),
                dpi: Some(self.logo.dpi_for_width(styles.logo_width_mm)),
                ..Default::default()
            },
        );

        let x = cell.x + styles.text_inset_mm;
        let label_top = cell.y + styles.text_inset_mm;
        self.layer.use_text(
            face.label.clone(),
            styles.font_size_pt,
            Mm(x),
            self.flip(self.baseline(label_top, styles.label_height_mm)),
            self.font,
        );

        let width = styles.text_width_mm(cell.width);
        let lines = wrap(face.text, width, styles.font_size_pt);
        self.write_justified(&lines, x, cell.y + styles.body_offset_mm, width);
    }

    fn write_justified(&self, lines: &[Line], x: f32, top: f32, width: f32) {
        let line_height = self.styles.line_height_mm;
        for (n, line) in lines.iter().enumerate() {
            let baseline = self.baseline(top + n as f32 * line_height, line_height);
            self.layer.begin_text_section();
            self.layer.set_font(self.font, self.styles.font_size_pt);
            self.layer.set_word_spacing(line.word_spacing_pt(width));
            self.layer.set_text_cursor(Mm(x), self.flip(baseline));
            self.layer.write_text(line.text.clone(), self.font);
            self.layer.end_text_section();
        }
    }

    /// Baseline that vertically centres a line of text in a box of `height`.
    fn baseline(&self, top: f32, height: f32) -> f32 {
        let font_size_mm = self.styles.font_size_pt * 25.4 / 72.0;
        top + height / 2.0 + 0.3 * font_size_mm
    }

    fn stroke(&self, segment: Segment) {
        self.layer.add_line(PdfLine {
            points: vec![
                (Point::new(Mm(segment.x1), self.flip(segment.y1)), false),
                (Point::new(Mm(segment.x2), self.flip(segment.y2)), false),
            ],
            is_closed: false,
        });
    }

    /// Top-left page coordinates to PDF space.
    fn flip(&self, y: f32) -> Mm {
        Mm(self.geometry.page_height - y)
    }
}
