//! Word wrapping and justification for card text.
//!
//! Widths come from the Helvetica AFM metrics for printable ASCII; other
//! characters use an average glyph width. Good enough to keep text inside
//! a card, not a typesetter.

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Helvetica advance widths in 1/1000 em for U+0020..=U+007E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

fn glyph_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - ' ' as usize],
        c if c.is_uppercase() => 667,
        _ => 556,
    }
}

/// Rendered width of `text` in millimetres at `font_size_pt`.
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c))).sum();
    units as f32 / 1000.0 * font_size_pt / POINTS_PER_MM
}

/// One wrapped line of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub width_mm: f32,
    /// True for the last line of a paragraph, which is never stretched.
    pub ends_paragraph: bool,
}

impl Line {
    fn new(text: String, font_size_pt: f32, ends_paragraph: bool) -> Self {
        Self {
            width_mm: text_width_mm(&text, font_size_pt),
            text,
            ends_paragraph,
        }
    }

    fn gaps(&self) -> usize {
        self.text.matches(' ').count()
    }

    /// Extra space per word gap, in points, that stretches this line to
    /// `target_width_mm`. Zero for paragraph endings and single words.
    pub fn word_spacing_pt(&self, target_width_mm: f32) -> f32 {
        let gaps = self.gaps();
        if self.ends_paragraph || gaps == 0 || self.width_mm >= target_width_mm {
            return 0.0;
        }
        (target_width_mm - self.width_mm) / gaps as f32 * POINTS_PER_MM
    }
}

/// Greedy word wrap of `text` into lines no wider than `max_width_mm`.
///
/// Explicit newlines start a new paragraph; words wider than a whole line
/// are broken between characters. Empty text yields no lines.
pub fn wrap(text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<Line> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if text_width_mm(word, font_size_pt) > max_width_mm {
                if !current.is_empty() {
                    lines.push(Line::new(std::mem::take(&mut current), font_size_pt, false));
                }
                let mut pieces = break_word(word, max_width_mm, font_size_pt);
                current = pieces.pop().unwrap_or_default();
                lines.extend(
                    pieces
                        .into_iter()
                        .map(|piece| Line::new(piece, font_size_pt, false)),
                );
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if text_width_mm(&candidate, font_size_pt) <= max_width_mm {
                current = candidate;
            } else {
                lines.push(Line::new(
                    std::mem::replace(&mut current, word.to_string()),
                    font_size_pt,
                    false,
                ));
            }
        }
        lines.push(Line::new(current, font_size_pt, true));
    }
    lines
}

fn break_word(word: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if piece.chars().count() > 1 && text_width_mm(&piece, font_size_pt) > max_width_mm {
            piece.pop();
            pieces.push(std::mem::replace(&mut piece, c.to_string()));
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
