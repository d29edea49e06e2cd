use std::io::Cursor;
use std::path::PathBuf;

use cartes_core::error::CoreError;
use cartes_core::models::card::Card;
use cartes_core::models::deck::Deck;
use cartes_export::error::ExportError;
use cartes_export::logo::{Logo, MAX_LOGO_WIDTH_PX};
use cartes_export::pdf::{render_cards, render_deck};
use printpdf::image_crate::{DynamicImage, ImageOutputFormat};

fn logo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/logo.png")
}

fn logo() -> Logo {
    Logo::load(logo_path()).expect("bundled logo decodes")
}

fn sample_deck() -> Deck {
    vec![
        Card::new("2+2?", "4"),
        Card::new("Capital of France?", "Paris"),
        Card::new("Plus long fleuve de France ?", "La Loire"),
        Card::new("Symbole chimique de l'or ?", "Au"),
        Card::new("Auteur des Misérables ?", "Victor Hugo"),
        Card::new("Année de la prise de la Bastille ?", "1789"),
        Card::new(
            "Quelle est la formule développée de l'identité remarquable (a + b)² ?",
            "a² + 2ab + b², que l'on retrouve en développant le produit (a + b)(a + b) terme à terme.",
        ),
        Card::new("", ""),
    ]
    .into()
}

fn page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes)
        .expect("output parses as PDF")
        .get_pages()
        .len()
}

/// Text shown by each `Tj` on `page` (1-based), in drawing order.
fn shown_text(bytes: &[u8], page: u32) -> Vec<Vec<u8>> {
    let doc = lopdf::Document::load_mem(bytes).expect("output parses as PDF");
    let page_id = doc.get_pages()[&page];
    let content = doc
        .get_and_decode_page_content(page_id)
        .expect("page content decodes");
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(<[u8]>::to_vec)
        .collect()
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("png encodes");
    bytes
}

#[test]
fn full_deck_renders_two_pages() {
    let bytes = render_deck(&sample_deck(), &logo()).unwrap();

    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), 2);
}

#[test]
fn surplus_cards_still_render_two_pages() {
    let mut deck = sample_deck();
    deck.add_form_batch(sample_deck().cards().to_vec());
    assert_eq!(deck.len(), 16);

    let bytes = render_deck(&deck, &logo()).unwrap();
    assert_eq!(page_count(&bytes), 2);
}

#[test]
fn short_deck_is_refused() {
    let short: Deck = sample_deck().cards()[..5].to_vec().into();

    match render_deck(&short, &logo()) {
        Err(ExportError::Core(CoreError::NotEnoughCards { have: 5, need: 8 })) => {}
        other => panic!("expected NotEnoughCards, got {other:?}"),
    }
}

#[test]
fn partial_sheet_renders_available_cells() {
    let deck = sample_deck();
    let bytes = render_cards(&deck.cards()[..3], &logo()).unwrap();
    assert_eq!(page_count(&bytes), 2);

    let bytes = render_cards(&[], &logo()).unwrap();
    assert_eq!(page_count(&bytes), 2);
}

#[test]
fn missing_logo_is_an_asset_error() {
    let missing = logo_path().with_file_name("does-not-exist.png");
    match Logo::load(&missing) {
        Err(ExportError::LogoAsset { path, .. }) => assert!(path.ends_with("does-not-exist.png")),
        other => panic!("expected LogoAsset, got {other:?}"),
    }
}

#[test]
fn undecodable_logo_is_an_asset_error() {
    assert!(matches!(
        Logo::from_bytes(b"not an image"),
        Err(ExportError::LogoAsset { .. })
    ));
}

#[test]
fn bundled_logo_is_square() {
    let logo = logo();
    assert_eq!(logo.width_px(), 64);
    assert_eq!(logo.height_px(), 64);
    assert_eq!(logo.aspect_ratio(), 1.0);
}

#[test]
fn question_page_starts_with_the_first_question() {
    let bytes = render_deck(&sample_deck(), &logo()).unwrap();
    let text = shown_text(&bytes, 1);

    assert_eq!(text[0], b"Q 1:");
    assert_eq!(text[1], b"2+2?");
}

#[test]
fn answer_page_first_cell_holds_the_second_answer() {
    let bytes = render_deck(&sample_deck(), &logo()).unwrap();
    let text = shown_text(&bytes, 2);

    assert_eq!(text[0], b"R 2:");
    assert_eq!(text[1], b"Paris");
    assert_eq!(text[2], b"R 1:");
    assert_eq!(text[3], b"4");
}

#[test]
fn wide_logos_are_downscaled_to_print_size() {
    let logo = Logo::from_bytes(&png_bytes(1200, 600)).unwrap();

    assert_eq!(logo.width_px(), MAX_LOGO_WIDTH_PX);
    assert_eq!(logo.height_px(), 90);
    assert_eq!(logo.aspect_ratio(), 0.5);

    let bytes = render_deck(&sample_deck(), &logo).unwrap();
    assert_eq!(page_count(&bytes), 2);
}

#[test]
fn small_logos_keep_their_size() {
    let logo = Logo::from_bytes(&png_bytes(40, 20)).unwrap();
    assert_eq!((logo.width_px(), logo.height_px()), (40, 20));
}
