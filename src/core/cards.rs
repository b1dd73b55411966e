/// 8-bit sRGB color, stored the way it is written in CSS hex notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_hex(0xffffff);
    pub const BLACK: Rgb = Rgb::from_hex(0x000000);

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Multiply every channel by `factor` in linear light, then encode back
    /// to sRGB, rounding and saturating to 0..=255.
    pub fn scaled_linear(self, factor: f32) -> Self {
        let ch = |c: u8| linear_to_srgb(srgb_to_linear(c) * factor);
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba { rgb: self, a }
    }

    /// `#rrggbb`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear-light channels for shading, alpha fixed at 1.
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        ]
    }
}

#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let s = c as f32 / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(l: f32) -> u8 {
    let s = if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round().clamp(0.0, 255.0) as u8
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    pub const fn white(a: f32) -> Self {
        Self { rgb: Rgb::WHITE, a }
    }

    pub const fn black(a: f32) -> Self {
        Self { rgb: Rgb::BLACK, a }
    }

    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: Rgb,
    pub accent_color: Rgb,
    pub link: &'static str,
    pub button_text: &'static str,
    pub features: [&'static str; 3],
    pub stats: [&'static str; 2],
}

impl Card {
    /// Third gradient stop: the primary color pulled toward black.
    pub fn shade_color(&self) -> Rgb {
        self.color.scaled_linear(0.6)
    }
}

pub const CARDS: [Card; 4] = [
    Card {
        id: 1,
        title: "Bioinformatics Hub",
        subtitle: "Advanced Genomics & Computational Biology",
        description: "Master computational biology with our comprehensive platform featuring advanced genomics tools, protein structure prediction, and machine learning applications.",
        icon: "⚗️",
        color: Rgb::from_hex(0x6366f1),
        accent_color: Rgb::from_hex(0x8b5cf6),
        link: "https://example.com/bioinformatics",
        button_text: "Explore Tools",
        features: ["DNA Analysis", "ML Tools", "BLAST Search"],
        stats: ["10K+ Tools", "500+ Datasets"],
    },
    Card {
        id: 2,
        title: "Research Community",
        subtitle: "Global Network of Scientists & Researchers",
        description: "Connect with 50,000+ researchers worldwide. Participate in collaborative projects, share discoveries, and attend virtual conferences.",
        icon: "🌐",
        color: Rgb::from_hex(0x06b6d4),
        accent_color: Rgb::from_hex(0x0891b2),
        link: "https://example.com/forum",
        button_text: "Join Network",
        features: ["Global Network", "Collaboration", "Peer Review"],
        stats: ["50K+ Users", "200+ Countries"],
    },
    Card {
        id: 3,
        title: "Support Center",
        subtitle: "Technical Support & Issue Resolution",
        description: "Get instant help with 24/7 support. Report bugs, access documentation, video tutorials, and live chat with 2-hour response time.",
        icon: "🛠️",
        color: Rgb::from_hex(0xf59e0b),
        accent_color: Rgb::from_hex(0xd97706),
        link: "https://example.com/error-report",
        button_text: "Get Support",
        features: ["24/7 Support", "Live Chat", "Documentation"],
        stats: ["2hr Response", "24/7 Available"],
    },
    Card {
        id: 4,
        title: "Innovation Lab",
        subtitle: "Cutting-Edge Research & Development",
        description: "Access virtual laboratory with AI-powered research assistants, cloud computing, and collaboration tools for breakthrough projects.",
        icon: "🔬",
        color: Rgb::from_hex(0x10b981),
        accent_color: Rgb::from_hex(0x059669),
        link: "https://example.com/research",
        button_text: "Start Research",
        features: ["AI Powered", "Cloud Computing", "Virtual Lab"],
        stats: ["99.9% Uptime", "AI Assisted"],
    },
];
