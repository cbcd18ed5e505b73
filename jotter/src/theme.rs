use iced::theme::Palette;
use iced::{Color, Theme};

use crate::features::settings::Appearance;

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub foreground: String,
    pub background: String,
    pub panel: String,
    pub hover: String,
    pub muted_foreground: String,
    pub border: String,
    pub accent: String,
    pub danger: String,
    pub success: String,
    pub overlay: String,
}

impl ColorPalette {
    pub fn light() -> Self {
        Self {
            foreground: String::from("#1F1F1F"),
            background: String::from("#FFFFFF"),
            panel: String::from("#F7F7F5"),
            hover: String::from("#EBEBEA"),
            muted_foreground: String::from("#6B7280"),
            border: String::from("#E5E5E3"),
            accent: String::from("#2383E2"),
            danger: String::from("#E03E3E"),
            success: String::from("#0F7B6C"),
            overlay: String::from("#FFFFFF"),
        }
    }

    pub fn dark() -> Self {
        Self {
            foreground: String::from("#E6E6E6"),
            background: String::from("#1F1F1F"),
            panel: String::from("#202020"),
            hover: String::from("#2C2C2C"),
            muted_foreground: String::from("#9B9B9B"),
            border: String::from("#2F2F2F"),
            accent: String::from("#4FA6ED"),
            danger: String::from("#E06C75"),
            success: String::from("#98C379"),
            overlay: String::from("#262626"),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

#[derive(Debug, Clone)]
pub struct IcedColorPalette {
    pub foreground: Color,
    pub background: Color,
    pub panel: Color,
    pub hover: Color,
    pub muted_foreground: Color,
    pub border: Color,
    pub accent: Color,
    pub danger: Color,
    pub success: Color,
    pub overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            panel: parse_hex_color(&p.panel),
            hover: parse_hex_color(&p.hover),
            muted_foreground: parse_hex_color(&p.muted_foreground),
            border: parse_hex_color(&p.border),
            accent: parse_hex_color(&p.accent),
            danger: parse_hex_color(&p.danger),
            success: parse_hex_color(&p.success),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleOverrides {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

/// Global application theme.
#[derive(Debug, Clone)]
pub struct AppTheme {
    appearance: Appearance,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::for_appearance(Appearance::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.danger,
        };

        Theme::custom(value.id().to_string(), palette)
    }
}

impl AppTheme {
    /// Build the theme for a light or dark appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        let raw_palette = match appearance {
            Appearance::Light => ColorPalette::light(),
            Appearance::Dark => ColorPalette::dark(),
        };

        Self {
            appearance,
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }

    pub fn id(&self) -> &'static str {
        match self.appearance {
            Appearance::Light => "jotter-light",
            Appearance::Dark => "jotter-dark",
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub struct ThemeProps<'a> {
    pub theme: &'a AppTheme,
    pub overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub fn with_overrides(self, overrides: StyleOverrides) -> Self {
        Self {
            overrides: Some(overrides),
            ..self
        }
    }
}

/// Holds the theme currently applied to the window.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            current: AppTheme::for_appearance(appearance),
        }
    }

    pub fn current(&self) -> &AppTheme {
        &self.current
    }

    pub fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Switch to another appearance. Returns `false` when unchanged.
    pub fn set_appearance(&mut self, appearance: Appearance) -> bool {
        if self.current.appearance() == appearance {
            return false;
        }

        self.current = AppTheme::for_appearance(appearance);
        true
    }
}

fn parse_hex_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or(Color::BLACK)
}
