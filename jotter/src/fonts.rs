use iced::Font;
use iced::font::Weight;

#[derive(Debug, Clone, Copy)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            size: 32.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
}
