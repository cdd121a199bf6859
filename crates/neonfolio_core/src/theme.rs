//! Palettes, typography and the `Theme` context object handed to every widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NeonError;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Packed `0xAARRGGBB`.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn css(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

pub mod neon {
    use super::Color;

    pub const YELLOW: Color = Color::from_argb(0xFFF9F002);
    pub const YELLOW_OPACITY: Color = Color::from_argb(0x42F9F002);
    pub const RED: Color = Color::from_argb(0xFFFF003C);
    pub const BLUE: Color = Color::from_argb(0xFF0C5F74);
    pub const GREEN: Color = Color::from_argb(0xFF298D29);
    pub const PURPLE: Color = Color::from_argb(0xFF800080);
    pub const NEON_GREEN: Color = Color::from_argb(0xFF39FF14);
    pub const BLACK: Color = Color::from_argb(0xFF000000);
    pub const ORANGE: Color = Color::from_argb(0xFFFF9800);
    pub const BORDER_GREEN: Color = Color::from_argb(0xFF8AE66E);
    pub const WHITE: Color = Color::from_argb(0xFFFFFFFF);
}

/// Semantic roles plus the fixed neon accents. Two immutable instances exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub tertiary: Color,
    pub on_tertiary: Color,
    pub error: Color,
    pub on_error: Color,
    pub outline: Color,
    pub inverse_surface: Color,
    pub inverse_on_surface: Color,
    pub inverse_primary: Color,

    pub yellow: Color,
    pub red: Color,
    pub blue: Color,
    pub green: Color,
    pub purple: Color,
    pub neon_green: Color,
    pub black: Color,
    pub orange: Color,
    pub border_green: Color,
    pub background_scanned: Color,
    pub glitch: Color,
    pub white: Color,
}

impl ColorPalette {
    pub const NORMAL: ColorPalette = ColorPalette {
        background: neon::YELLOW,
        on_background: neon::BLACK,
        surface: neon::YELLOW,
        on_surface: neon::BLACK,
        surface_variant: neon::BLACK,
        on_surface_variant: neon::YELLOW,
        primary: neon::RED,
        on_primary: neon::WHITE,
        secondary: neon::BLUE,
        on_secondary: neon::WHITE,
        tertiary: neon::GREEN,
        on_tertiary: neon::WHITE,
        error: neon::RED,
        on_error: neon::WHITE,
        outline: neon::BORDER_GREEN,
        inverse_surface: neon::BLACK,
        inverse_on_surface: neon::YELLOW,
        inverse_primary: neon::YELLOW,

        yellow: neon::YELLOW,
        red: neon::RED,
        blue: neon::BLUE,
        green: neon::GREEN,
        purple: neon::PURPLE,
        neon_green: neon::NEON_GREEN,
        black: neon::BLACK,
        orange: neon::ORANGE,
        border_green: neon::BORDER_GREEN,
        background_scanned: neon::YELLOW_OPACITY,
        glitch: neon::BORDER_GREEN,
        white: neon::WHITE,
    };

    /// Yellow and black trade places; accents stay put.
    pub const DARK: ColorPalette = ColorPalette {
        background: neon::BLACK,
        on_background: neon::YELLOW,
        surface: neon::BLACK,
        on_surface: neon::YELLOW,
        surface_variant: neon::YELLOW,
        on_surface_variant: neon::BLACK,
        inverse_surface: neon::YELLOW,
        inverse_on_surface: neon::BLACK,
        inverse_primary: neon::BLACK,
        ..Self::NORMAL
    };

    pub fn for_dark(is_dark: bool) -> &'static ColorPalette {
        if is_dark {
            &Self::DARK
        } else {
            &Self::NORMAL
        }
    }
}

/// Surface pairing for cards, paragraphs and sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Normal,
    Inverse,
}

impl Tone {
    pub fn background(self, palette: &ColorPalette) -> Color {
        match self {
            Tone::Normal => palette.surface,
            Tone::Inverse => palette.inverse_surface,
        }
    }

    pub fn foreground(self, palette: &ColorPalette) -> Color {
        match self {
            Tone::Normal => palette.on_surface,
            Tone::Inverse => palette.inverse_on_surface,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Tone::Normal => Tone::Inverse,
            Tone::Inverse => Tone::Normal,
        }
    }
}

/// Named accent, resolved against whichever palette is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Yellow,
    Red,
    Blue,
    Green,
    Purple,
    NeonGreen,
    Orange,
    BorderGreen,
    /// The palette's foreground, black on the normal palette.
    Foreground,
}

impl Accent {
    pub fn color(self, palette: &ColorPalette) -> Color {
        match self {
            Accent::Yellow => palette.yellow,
            Accent::Red => palette.red,
            Accent::Blue => palette.blue,
            Accent::Green => palette.green,
            Accent::Purple => palette.purple,
            Accent::NeonGreen => palette.neon_green,
            Accent::Orange => palette.orange,
            Accent::BorderGreen => palette.border_green,
            Accent::Foreground => palette.on_surface,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Dark or not, given what the host environment currently reports.
    pub fn resolve(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::System => system_is_dark,
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = NeonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "system" | "auto" => Ok(ThemeMode::System),
            "light" | "normal" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(NeonError::InvalidThemeMode(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
}

pub const FONT_FAMILY: &str = "Hack, 'Fira Code', 'DejaVu Sans Mono', monospace";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub family: &'static str,
    pub size: f32,
    pub weight: u16,
    pub line_height: f32,
    pub letter_spacing: f32,
}

impl TextStyle {
    const fn hack(weight: u16, size: f32, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            family: FONT_FAMILY,
            size,
            weight,
            line_height,
            letter_spacing,
        }
    }

    /// Inline CSS declarations for this style.
    pub fn css(&self) -> String {
        format!(
            "font-family: {}; font-size: {}px; font-weight: {}; line-height: {}px; letter-spacing: {}px;",
            self.family, self.size, self.weight, self.line_height, self.letter_spacing
        )
    }
}

/// Text role to style mapping. Constant for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypographyScale {
    pub headline_large: TextStyle,
    pub headline_medium: TextStyle,
    pub headline_small: TextStyle,
    pub title_large: TextStyle,
    pub title_medium: TextStyle,
    pub body_large: TextStyle,
    pub body_medium: TextStyle,
    pub body_small: TextStyle,
    pub label_large: TextStyle,
}

impl TypographyScale {
    pub const HACK: TypographyScale = TypographyScale {
        headline_large: TextStyle::hack(200, 72.0, 80.0, -2.0),
        headline_medium: TextStyle::hack(300, 36.0, 42.0, -1.0),
        headline_small: TextStyle::hack(500, 28.0, 32.0, 0.0),
        title_large: TextStyle::hack(700, 20.0, 24.0, 0.0),
        title_medium: TextStyle::hack(600, 24.0, 24.0, 2.0),
        body_large: TextStyle::hack(400, 19.0, 24.0, 0.0),
        body_medium: TextStyle::hack(400, 16.0, 24.0, 0.0),
        body_small: TextStyle::hack(400, 12.0, 16.0, 0.0),
        label_large: TextStyle::hack(600, 24.0, 24.0, 2.0),
    };

    pub fn style(&self, role: TextRole) -> TextStyle {
        match role {
            TextRole::HeadlineLarge => self.headline_large,
            TextRole::HeadlineMedium => self.headline_medium,
            TextRole::HeadlineSmall => self.headline_small,
            TextRole::TitleLarge => self.title_large,
            TextRole::TitleMedium => self.title_medium,
            TextRole::BodyLarge => self.body_large,
            TextRole::BodyMedium => self.body_medium,
            TextRole::BodySmall => self.body_small,
            TextRole::LabelLarge => self.label_large,
        }
    }
}

/// Heading level for titles. Picks both the text role and the underline shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleLevel {
    #[default]
    H1,
    H2,
    H3,
    H4,
}

impl TitleLevel {
    pub const ALL: [TitleLevel; 4] = [TitleLevel::H1, TitleLevel::H2, TitleLevel::H3, TitleLevel::H4];

    pub fn text_role(self) -> TextRole {
        match self {
            TitleLevel::H1 => TextRole::HeadlineLarge,
            TitleLevel::H2 => TextRole::HeadlineMedium,
            TitleLevel::H3 => TextRole::HeadlineSmall,
            TitleLevel::H4 => TextRole::TitleLarge,
        }
    }

    /// Space reserved under the text for the underline.
    pub fn underline_gap(self) -> f64 {
        match self {
            TitleLevel::H1 => 10.0,
            TitleLevel::H2 => 8.0,
            TitleLevel::H3 => 6.0,
            TitleLevel::H4 => 4.0,
        }
    }
}

/// Explicit theme context. Cheap to copy into every widget's props.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub palette: &'static ColorPalette,
    pub typography: &'static TypographyScale,
    pub is_dark: bool,
}

impl Theme {
    pub fn new(is_dark: bool) -> Self {
        Self {
            palette: ColorPalette::for_dark(is_dark),
            typography: &TypographyScale::HACK,
            is_dark,
        }
    }

    pub fn light() -> Self {
        Self::new(false)
    }

    pub fn dark() -> Self {
        Self::new(true)
    }

    pub fn text(&self, role: TextRole) -> TextStyle {
        self.typography.style(role)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
