// Host-side tests for card texture layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod cards {
        include!("../src/core/cards.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use crate::core::cards::*;
use crate::core::layout::*;

/// Every character advances by a fixed amount, regardless of font.
struct FixedAdvance(f32);

impl TextMeasure for FixedAdvance {
    fn measure(&self, _font: &Font, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

const MEASURE: FixedAdvance = FixedAdvance(14.0);

#[test]
fn layout_is_deterministic_per_card() {
    for card in &CARDS {
        assert_eq!(
            build_card_layout(card, &MEASURE),
            build_card_layout(card, &MEASURE)
        );
    }
}

#[test]
fn different_cards_get_different_speckles() {
    let a = build_card_layout(&CARDS[0], &MEASURE);
    let b = build_card_layout(&CARDS[1], &MEASURE);
    assert_ne!(a.speckles, b.speckles);
}

#[test]
fn speckles_stay_inside_texture_and_faint() {
    let layout = build_card_layout(&CARDS[2], &MEASURE);
    assert_eq!(layout.speckles.len(), 1500);
    for s in &layout.speckles {
        assert!(s.x >= 0.0 && s.x < TEXTURE_WIDTH as f32);
        assert!(s.y >= 0.0 && s.y < TEXTURE_HEIGHT as f32);
        assert!(s.alpha >= 0.0 && s.alpha < 0.03);
    }
}

#[test]
fn title_words_stack_one_per_line() {
    let layout = build_card_layout(&CARDS[0], &MEASURE);
    let words: Vec<_> = layout.title.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(words, ["Bioinformatics", "Hub"]);
    assert_eq!(layout.title[0].y, 380.0);
    assert_eq!(layout.title[1].y, 455.0);
    assert!(layout.title.iter().all(|r| r.align == TextAlign::Center));
    assert!(layout.title.iter().all(|r| r.shadow.is_some()));
}

#[test]
fn badges_follow_features() {
    let card = &CARDS[1];
    let layout = build_card_layout(card, &MEASURE);
    assert_eq!(layout.badges.len(), 3);
    for (i, badge) in layout.badges.iter().enumerate() {
        let y = 580.0 + i as f32 * 60.0;
        assert_eq!(badge.rect, Rect::new(150.0, y - 25.0, 900.0, 45.0));
        assert_eq!(badge.radius, 22.0);
        assert_eq!(badge.label.text, format!("• {}", card.features[i]));
        assert_eq!(badge.label.x, 180.0);
        assert_eq!(badge.label.y, y + 5.0);
        assert_eq!(badge.label.align, TextAlign::Left);
    }
}

#[test]
fn stats_and_button_positions() {
    let card = &CARDS[3];
    let layout = build_card_layout(card, &MEASURE);
    assert_eq!(layout.stats.len(), 2);
    assert_eq!(layout.stats[0].disc.cx, 300.0);
    assert_eq!(layout.stats[1].disc.cx, 900.0);
    assert_eq!(layout.stats[1].label.text, card.stats[1]);
    assert_eq!(layout.stats[1].label.x, 900.0);
    assert_eq!(layout.button.rect, Rect::new(350.0, 1200.0, 500.0, 80.0));
    assert_eq!(layout.button.radius, 40.0);
    assert_eq!(layout.button.label.text, card.button_text);
    assert_eq!(layout.button.label.y, 1250.0);
}

#[test]
fn description_lines_stack_from_baseline() {
    let layout = build_card_layout(&CARDS[0], &MEASURE);
    assert!(layout.description.len() > 1);
    for (i, line) in layout.description.iter().enumerate() {
        assert_eq!(line.y, 800.0 + i as f32 * 40.0);
    }
    let rejoined: Vec<_> = layout
        .description
        .iter()
        .flat_map(|l| l.text.split(' '))
        .collect();
    let original: Vec<_> = CARDS[0].description.split(' ').collect();
    assert_eq!(rejoined, original);
}

#[test]
fn wrap_respects_width_with_trailing_space() {
    let font = Font::regular(28.0);
    // "aaaa " measures 5 units; three words fit in 15, the fourth wraps.
    let unit = FixedAdvance(1.0);
    let lines = wrap_words("aaaa bbbb cccc dddd", &font, 15.0, &unit);
    assert_eq!(lines, ["aaaa bbbb cccc", "dddd"]);
    for line in &lines {
        assert!(unit.measure(&font, &format!("{line} ")) <= 15.0);
    }
}

#[test]
fn overlong_word_gets_its_own_line() {
    let font = Font::regular(28.0);
    let lines = wrap_words("hi supercalifragilistic yo", &font, 6.0, &FixedAdvance(1.0));
    assert_eq!(lines, ["hi", "supercalifragilistic", "yo"]);
}

#[test]
fn single_word_never_wraps_to_empty_line() {
    let font = Font::bold(64.0);
    let lines = wrap_words("Hub", &font, 1.0, &FixedAdvance(10.0));
    assert_eq!(lines, ["Hub"]);
}

#[test]
fn draw_ops_start_with_background_and_end_with_button_label() {
    let layout = build_card_layout(&CARDS[0], &MEASURE);
    let ops = layout.draw_ops();
    assert_eq!(ops.first(), Some(&DrawOp::Fill(&layout.background)));
    assert_eq!(ops.last(), Some(&DrawOp::Text(&layout.button.label)));
    let texts = ops.iter().filter(|op| matches!(op, DrawOp::Text(_))).count();
    let expected = 2
        + layout.title.len()
        + layout.badges.len()
        + layout.description.len()
        + layout.stats.len()
        + 1;
    assert_eq!(texts, expected);
}

#[test]
fn background_gradient_runs_color_accent_shade() {
    let card = &CARDS[0];
    let layout = build_card_layout(card, &MEASURE);
    let Paint::Linear { from, to, stops } = &layout.background else {
        panic!("background should be a linear gradient");
    };
    assert_eq!(*from, [0.0, 0.0]);
    assert_eq!(*to, [600.0, 800.0]);
    let colors: Vec<_> = stops.iter().map(|s| s.color.rgb).collect();
    assert_eq!(colors, [card.color, card.accent_color, card.shade_color()]);
}

#[test]
fn color_helpers() {
    let c = Rgb::from_hex(0x6366f1);
    assert_eq!((c.r, c.g, c.b), (0x63, 0x66, 0xf1));
    assert_eq!(c.to_css(), "#6366f1");
    assert_eq!(Rgb::WHITE.scaled_linear(2.0), Rgb::WHITE);
    assert_eq!(Rgb::BLACK.scaled_linear(0.6), Rgb::BLACK);
    assert_eq!(c.scaled_linear(1.0), c);
    assert_eq!(Rgba::white(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
    assert_eq!(Rgba::black(0.3).to_css(), "rgba(0, 0, 0, 0.3)");
    let lin = Rgb::WHITE.to_linear();
    assert!((lin[0] - 1.0).abs() < 1e-6 && lin[3] == 1.0);
    assert_eq!(Rgb::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn font_css_shorthand() {
    assert_eq!(
        Font::bold(64.0).to_css(),
        "bold 64px system-ui, -apple-system, sans-serif"
    );
    assert_eq!(
        Font::regular(28.0).to_css(),
        "28px system-ui, -apple-system, sans-serif"
    );
}

#[test]
fn card_catalog_is_ordered_and_linked() {
    let ids: Vec<_> = CARDS.iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
    assert!(CARDS.iter().all(|c| c.link.starts_with("https://")));
}

#[test]
fn shade_darkens_in_linear_light() {
    let expected = [0x4d50c0, 0x0490a9, 0xc37d07, 0x0a9366];
    for (card, hex) in CARDS.iter().zip(expected) {
        assert_eq!(
            card.shade_color().to_css(),
            Rgb::from_hex(hex).to_css(),
            "card {}",
            card.id
        );
    }
}
