use super::cards::{Card, Rgba};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::{smallvec, SmallVec};

// Texture canvas, in logical pixels.
pub const TEXTURE_WIDTH: u32 = 1200;
pub const TEXTURE_HEIGHT: u32 = 1600;
const CENTER_X: f32 = TEXTURE_WIDTH as f32 / 2.0;

const SPECKLE_COUNT: usize = 1500;
const SPECKLE_MAX_ALPHA: f32 = 0.03;
const SPECKLE_SEED: u64 = 0x5EED_CA4D;

const TITLE_BASELINE: f32 = 380.0;
const TITLE_LINE_STEP: f32 = 75.0;

const BADGE_FIRST_Y: f32 = 580.0;
const BADGE_STEP: f32 = 60.0;

pub const DESCRIPTION_MAX_WIDTH: f32 = 1000.0;
const DESCRIPTION_BASELINE: f32 = 800.0;
const DESCRIPTION_LINE_STEP: f32 = 40.0;

const STAT_FIRST_X: f32 = 300.0;
const STAT_STEP_X: f32 = 600.0;
const STAT_Y: f32 = 1000.0;
const STAT_RADIUS: f32 = 80.0;

const FONT_FAMILY: &str = "system-ui, -apple-system, sans-serif";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size_px: f32,
    pub bold: bool,
}

impl Font {
    pub const fn bold(size_px: f32) -> Self {
        Self {
            size_px,
            bold: true,
        }
    }

    pub const fn regular(size_px: f32) -> Self {
        Self {
            size_px,
            bold: false,
        }
    }

    /// CSS font shorthand, e.g. `bold 64px system-ui, -apple-system, sans-serif`.
    pub fn to_css(&self) -> String {
        if self.bold {
            format!("bold {}px {}", self.size_px, FONT_FAMILY)
        } else {
            format!("{}px {}", self.size_px, FONT_FAMILY)
        }
    }
}

/// Width of a run of text as the drawing surface would lay it out.
pub trait TextMeasure {
    fn measure(&self, font: &Font, text: &str) -> f32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
    pub offset_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear {
        from: [f32; 2],
        to: [f32; 2],
        stops: SmallVec<[GradientStop; 3]>,
    },
    Radial {
        center: [f32; 2],
        inner_radius: f32,
        outer_radius: f32,
        stops: SmallVec<[GradientStop; 3]>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub fill: Rgba,
    pub align: TextAlign,
    pub shadow: Option<Shadow>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub fill: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speckle {
    pub x: f32,
    pub y: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pill {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Paint,
    pub stroke: Stroke,
    pub label: TextRun,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCallout {
    pub disc: Circle,
    pub label: TextRun,
}

/// One primitive for the painter, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp<'a> {
    Fill(&'a Paint),
    Speckle(&'a Speckle),
    Circle(&'a Circle),
    RoundRect {
        rect: &'a Rect,
        radius: f32,
        fill: &'a Paint,
        stroke: &'a Stroke,
    },
    Text(&'a TextRun),
}

/// Everything drawn on one card texture, positioned in texture pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    pub background: Paint,
    pub highlight: Paint,
    pub speckles: Vec<Speckle>,
    pub ornaments: [Circle; 3],
    pub icon: TextRun,
    pub subtitle: TextRun,
    pub title: Vec<TextRun>,
    pub badges: Vec<Pill>,
    pub description: Vec<TextRun>,
    pub stats: Vec<StatCallout>,
    pub button: Pill,
}

impl CardLayout {
    pub fn draw_ops(&self) -> Vec<DrawOp<'_>> {
        let mut ops = Vec::with_capacity(self.speckles.len() + 32);
        ops.push(DrawOp::Fill(&self.background));
        ops.push(DrawOp::Fill(&self.highlight));
        ops.extend(self.speckles.iter().map(DrawOp::Speckle));
        ops.extend(self.ornaments.iter().map(DrawOp::Circle));
        ops.push(DrawOp::Text(&self.icon));
        ops.push(DrawOp::Text(&self.subtitle));
        ops.extend(self.title.iter().map(DrawOp::Text));
        for badge in &self.badges {
            ops.push(pill_shape(badge));
            ops.push(DrawOp::Text(&badge.label));
        }
        ops.extend(self.description.iter().map(DrawOp::Text));
        for stat in &self.stats {
            ops.push(DrawOp::Circle(&stat.disc));
            ops.push(DrawOp::Text(&stat.label));
        }
        ops.push(pill_shape(&self.button));
        ops.push(DrawOp::Text(&self.button.label));
        ops
    }
}

fn pill_shape(pill: &Pill) -> DrawOp<'_> {
    DrawOp::RoundRect {
        rect: &pill.rect,
        radius: pill.radius,
        fill: &pill.fill,
        stroke: &pill.stroke,
    }
}

/// Greedy word wrap: a word moves to a new line when the candidate line,
/// measured with its trailing space, exceeds `max_width`. A line always
/// holds at least one word.
pub fn wrap_words(
    text: &str,
    font: &Font,
    max_width: f32,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        let candidate = format!("{current}{word} ");
        if measure.measure(font, &candidate) > max_width && !current.is_empty() {
            lines.push(current.trim().to_string());
            current = format!("{word} ");
        } else {
            current = candidate;
        }
    }
    lines.push(current.trim().to_string());
    lines
}

fn speckle_rng(card: &Card) -> StdRng {
    StdRng::seed_from_u64(SPECKLE_SEED ^ (card.id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn centered(text: impl Into<String>, y: f32, font: Font, fill: Rgba) -> TextRun {
    TextRun {
        text: text.into(),
        x: CENTER_X,
        y,
        font,
        fill,
        align: TextAlign::Center,
        shadow: None,
    }
}

/// Lay out a card texture. Same card in, same layout out.
pub fn build_card_layout(card: &Card, measure: &dyn TextMeasure) -> CardLayout {
    let width = TEXTURE_WIDTH as f32;
    let height = TEXTURE_HEIGHT as f32;

    let background = Paint::Linear {
        from: [0.0, 0.0],
        to: [600.0, 800.0],
        stops: smallvec![
            GradientStop {
                offset: 0.0,
                color: card.color.with_alpha(1.0),
            },
            GradientStop {
                offset: 0.5,
                color: card.accent_color.with_alpha(1.0),
            },
            GradientStop {
                offset: 1.0,
                color: card.shade_color().with_alpha(1.0),
            },
        ],
    };
    let highlight = Paint::Radial {
        center: [CENTER_X, 300.0],
        inner_radius: 0.0,
        outer_radius: 700.0,
        stops: smallvec![
            GradientStop {
                offset: 0.0,
                color: Rgba::white(0.2),
            },
            GradientStop {
                offset: 1.0,
                color: Rgba::white(0.05),
            },
        ],
    };

    let mut rng = speckle_rng(card);
    let speckles = (0..SPECKLE_COUNT)
        .map(|_| {
            let alpha = rng.gen::<f32>() * SPECKLE_MAX_ALPHA;
            Speckle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                alpha,
            }
        })
        .collect();

    let ornament = |cx, cy, radius| Circle {
        cx,
        cy,
        radius,
        fill: Rgba::white(0.1),
    };
    let ornaments = [
        ornament(100.0, 100.0, 50.0),
        ornament(1100.0, 200.0, 30.0),
        ornament(200.0, 1400.0, 40.0),
    ];

    let icon = TextRun {
        shadow: Some(Shadow {
            color: Rgba::black(0.3),
            blur: 15.0,
            offset_y: 8.0,
        }),
        ..centered(card.icon, 220.0, Font::bold(160.0), Rgba::white(1.0))
    };
    let subtitle = centered(card.subtitle, 290.0, Font::bold(32.0), Rgba::white(0.8));

    let title_shadow = Shadow {
        color: Rgba::black(0.4),
        blur: 8.0,
        offset_y: 3.0,
    };
    let title = card
        .title
        .split(' ')
        .enumerate()
        .map(|(i, word)| TextRun {
            shadow: Some(title_shadow),
            ..centered(
                word,
                TITLE_BASELINE + i as f32 * TITLE_LINE_STEP,
                Font::bold(64.0),
                Rgba::white(1.0),
            )
        })
        .collect();

    let badges = card
        .features
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            let badge_y = BADGE_FIRST_Y + i as f32 * BADGE_STEP;
            Pill {
                rect: Rect::new(150.0, badge_y - 25.0, 900.0, 45.0),
                radius: 22.0,
                fill: Paint::Solid(Rgba::white(0.15)),
                stroke: Stroke {
                    color: Rgba::white(0.3),
                    width: 1.0,
                },
                label: TextRun {
                    text: format!("• {feature}"),
                    x: 180.0,
                    y: badge_y + 5.0,
                    font: Font::bold(24.0),
                    fill: Rgba::white(1.0),
                    align: TextAlign::Left,
                    shadow: None,
                },
            }
        })
        .collect();

    let description_font = Font::regular(28.0);
    let description = wrap_words(
        card.description,
        &description_font,
        DESCRIPTION_MAX_WIDTH,
        measure,
    )
    .into_iter()
    .enumerate()
    .map(|(i, line)| {
        centered(
            line,
            DESCRIPTION_BASELINE + i as f32 * DESCRIPTION_LINE_STEP,
            description_font,
            Rgba::white(0.9),
        )
    })
    .collect();

    let stats = card
        .stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let x = STAT_FIRST_X + i as f32 * STAT_STEP_X;
            StatCallout {
                disc: Circle {
                    cx: x,
                    cy: STAT_Y,
                    radius: STAT_RADIUS,
                    fill: Rgba::white(0.2),
                },
                label: TextRun {
                    x,
                    ..centered(*stat, STAT_Y + 8.0, Font::bold(24.0), Rgba::white(1.0))
                },
            }
        })
        .collect();

    let button = Pill {
        rect: Rect::new(350.0, 1200.0, 500.0, 80.0),
        radius: 40.0,
        fill: Paint::Linear {
            from: [0.0, 1200.0],
            to: [0.0, 1280.0],
            stops: smallvec![
                GradientStop {
                    offset: 0.0,
                    color: Rgba::white(0.25),
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgba::white(0.15),
                },
            ],
        },
        stroke: Stroke {
            color: Rgba::white(0.3),
            width: 3.0,
        },
        label: TextRun {
            shadow: Some(Shadow {
                color: Rgba::black(0.3),
                blur: 5.0,
                offset_y: 2.0,
            }),
            ..centered(card.button_text, 1250.0, Font::bold(36.0), Rgba::white(1.0))
        },
    };

    CardLayout {
        width: TEXTURE_WIDTH,
        height: TEXTURE_HEIGHT,
        background,
        highlight,
        speckles,
        ornaments,
        icon,
        subtitle,
        title,
        badges,
        description,
        stats,
        button,
    }
}
