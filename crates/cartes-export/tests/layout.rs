use cartes_export::layout::{A4_HEIGHT_MM, A4_WIDTH_MM, MARGIN_MM, PageGeometry};

const EPSILON: f32 = 1e-3;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn a4_card_dimensions() {
    let g = PageGeometry::a4();
    assert!(close(g.card_width, (A4_WIDTH_MM - 4.0) / 2.0));
    assert!(close(g.card_height, (A4_HEIGHT_MM - 10.0) / 4.0));
    assert!(close(g.margin, 2.0));
}

#[test]
fn rows_fill_the_page_height() {
    let g = PageGeometry::a4();
    assert!(close(g.card_height * 4.0 + 5.0 * g.margin, g.page_height));
}

#[test]
fn columns_fill_the_page_width_within_one_margin() {
    // The right-hand column runs to the page edge: there is no right margin.
    let g = PageGeometry::a4();
    let used = g.card_width * 2.0 + 3.0 * g.margin;
    assert!((used - g.page_width).abs() <= MARGIN_MM + EPSILON);
    assert!(close(g.cell(1).x + g.card_width, g.page_width));
}

#[test]
fn cells_are_filled_row_by_row() {
    let g = PageGeometry::a4();

    let first = g.cell(0);
    assert!(close(first.x, 2.0));
    assert!(close(first.y, 2.0));

    let second = g.cell(1);
    assert!(close(second.x, 2.0 + g.card_width + 2.0));
    assert!(close(second.y, first.y));

    let third = g.cell(2);
    assert!(close(third.x, first.x));
    assert!(close(third.y, 2.0 + g.card_height + 2.0));

    let last = g.cell(7);
    assert!(close(last.y, 2.0 + 3.0 * (g.card_height + 2.0)));
}

#[test]
fn vertical_separator_bisects_the_page() {
    let g = PageGeometry::a4();
    let s = g.vertical_separator();
    assert!(close(s.x1, 105.0));
    assert!(close(s.x2, 105.0));
    assert!(close(s.y1, 2.0));
    assert!(close(s.y2, 295.0));
}

#[test]
fn horizontal_separators_close_every_row_but_the_last() {
    let g = PageGeometry::a4();
    let closing: Vec<usize> = (0..8)
        .filter(|&i| g.horizontal_separator_after(i).is_some())
        .collect();
    assert_eq!(closing, vec![1, 3, 5]);

    let s = g.horizontal_separator_after(3).unwrap();
    assert!(close(s.y1, g.cell(3).bottom()));
    assert!(close(s.x1, 2.0));
    assert!(close(s.x2, 208.0));
}

#[test]
fn logo_is_centred_near_the_bottom_of_its_cell() {
    let g = PageGeometry::a4();
    let cell = g.cell(5);
    let logo = g.logo_rect(cell, 15.0, 0.5);

    assert!(close(logo.x + logo.width / 2.0, cell.x + cell.width / 2.0));
    assert!(close(logo.y, cell.bottom() - 15.0 - 2.0));
    assert!(close(logo.height, 7.5));
    assert!(logo.bottom() <= cell.bottom());
}

#[test]
fn other_page_sizes_scale_the_grid() {
    let g = PageGeometry::for_page(100.0, 90.0);
    assert!(close(g.card_width, 48.0));
    assert!(close(g.card_height, 20.0));
}
