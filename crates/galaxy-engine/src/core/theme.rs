//! Theme table: the two named palettes every draw call is parametrized by.

use crate::components::color::Color;

/// Top and bottom stops of the vertical background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStops {
    pub top: Color,
    pub bottom: Color,
}

/// Immutable palette resolved once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: GradientStops,
    /// Base orb opacity before pulsation.
    pub orb_alpha: f32,
    pub star_color: Color,
    /// Base star opacity before twinkle.
    pub star_alpha: f32,
    /// Foreground text color for the surrounding UI. The engine never draws text.
    pub text_color: Color,
}

/// Deep space.
pub const DARK: Theme = Theme {
    background: GradientStops {
        top: Color::hex(0x0f172a),
        bottom: Color::hex(0x020617),
    },
    orb_alpha: 0.6,
    star_color: Color::hex(0xfbbf24),
    star_alpha: 0.5,
    text_color: Color::hex(0xe2e8f0),
};

/// Bright sky.
pub const LIGHT: Theme = Theme {
    background: GradientStops {
        top: Color::hex(0xf8fafc),
        bottom: Color::hex(0xe2e8f0),
    },
    orb_alpha: 0.8,
    star_color: Color::hex(0xd97706),
    star_alpha: 0.3,
    text_color: Color::hex(0x334155),
};

/// Name of one of the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    /// Resolve a UI-supplied name. Anything other than `"light"` is dark.
    pub fn parse(name: &str) -> Self {
        match name {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(ThemeName::parse("dark"), ThemeName::Dark);
        assert_eq!(ThemeName::parse("light"), ThemeName::Light);
        assert_eq!(ThemeName::Light.as_str(), "light");
    }

    #[test]
    fn unknown_name_falls_back_to_dark() {
        assert_eq!(ThemeName::parse("sepia"), ThemeName::Dark);
        assert_eq!(ThemeName::parse(""), ThemeName::Dark);
        assert_eq!(ThemeName::parse("Light"), ThemeName::Dark);
        assert_eq!(ThemeName::parse("sepia").theme(), ThemeName::Dark.theme());
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(DARK, LIGHT);
        assert_eq!(ThemeName::default().theme().star_color, Color::hex(0xfbbf24));
    }
}
