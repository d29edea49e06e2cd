use printpdf::BuiltinFont;

/// Typography and decoration of a single card cell.
///
/// Offsets are in millimetres from the cell's top-left corner.
#[derive(Debug, Clone)]
pub struct CardStyles {
    /// Font for labels and card text.
    pub font: BuiltinFont,

    /// Font size in points, shared by label and body.
    pub font_size_pt: f32,

    /// Horizontal inset of all text, and vertical offset of the label.
    pub text_inset_mm: f32,

    /// Height of the box the label is vertically centred in.
    pub label_height_mm: f32,

    /// Vertical offset of the first body line.
    pub body_offset_mm: f32,

    /// Distance between body baselines.
    pub line_height_mm: f32,

    /// Rendered logo width; height follows the image's aspect ratio.
    pub logo_width_mm: f32,

    /// Stroke width of the separator lines, in points.
    pub separator_thickness_pt: f32,
}

impl Default for CardStyles {
    fn default() -> Self {
        Self {
            font: BuiltinFont::Helvetica,
            font_size_pt: 8.0,
            text_inset_mm: 5.0,
            label_height_mm: 10.0,
            body_offset_mm: 10.0,
            line_height_mm: 5.0,
            logo_width_mm: 15.0,
            separator_thickness_pt: 0.57,
        }
    }
}

impl CardStyles {
    /// Width available to wrapped body text inside a card of `card_width_mm`.
    pub fn text_width_mm(&self, card_width_mm: f32) -> f32 {
        card_width_mm - 2.0 * self.text_inset_mm
    }
}
