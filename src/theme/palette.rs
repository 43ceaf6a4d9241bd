use ratatui::style::Color;

use super::color::Rgb;

/// Drop shadow drawn beneath raised cards. Offsets are in terminal cells.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub color: Rgb,
    pub opacity: f32,
    pub offset_x: u16,
    pub offset_y: u16,
}

/// A named set of semantic colours.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub name: &'static str,

    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,

    pub background: Rgb,
    pub surface: Rgb,
    pub card: Rgb,

    pub text: Rgb,
    pub text_secondary: Rgb,
    pub text_tertiary: Rgb,

    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,

    pub border: Rgb,
    pub separator: Rgb,

    pub button: Rgb,
    pub button_pressed: Rgb,
    pub input_background: Rgb,
    pub input_border: Rgb,

    pub shadow: Shadow,
}

impl Palette {
    pub const LIGHT: Self = Self {
        name: "light",

        primary: Rgb::from_hex("#007AFF"),
        secondary: Rgb::from_hex("#5856D6"),
        accent: Rgb::from_hex("#FF2D55"),

        background: Rgb::from_hex("#FFFFFF"),
        surface: Rgb::from_hex("#F5F5F5"),
        card: Rgb::from_hex("#FFFFFF"),

        text: Rgb::from_hex("#000000"),
        text_secondary: Rgb::from_hex("#666666"),
        text_tertiary: Rgb::from_hex("#999999"),

        success: Rgb::from_hex("#34C759"),
        warning: Rgb::from_hex("#FF9500"),
        error: Rgb::from_hex("#FF3B30"),

        border: Rgb::from_hex("#E5E5EA"),
        separator: Rgb::from_hex("#C6C6C8"),

        button: Rgb::from_hex("#007AFF"),
        button_pressed: Rgb::from_hex("#0055B3"),
        input_background: Rgb::from_hex("#FFFFFF"),
        input_border: Rgb::from_hex("#E5E5EA"),

        shadow: Shadow {
            color: Rgb::from_hex("#000000"),
            opacity: 0.25,
            offset_x: 1,
            offset_y: 1,
        },
    };

    pub const DARK: Self = Self {
        name: "dark",

        primary: Rgb::from_hex("#0A84FF"),
        secondary: Rgb::from_hex("#5E5CE6"),
        accent: Rgb::from_hex("#FF375F"),

        background: Rgb::from_hex("#000000"),
        surface: Rgb::from_hex("#1C1C1E"),
        card: Rgb::from_hex("#2C2C2E"),

        text: Rgb::from_hex("#FFFFFF"),
        text_secondary: Rgb::from_hex("#EBEBF5"),
        text_tertiary: Rgb::from_hex("#8E8E93"),

        success: Rgb::from_hex("#32D74B"),
        warning: Rgb::from_hex("#FFD60A"),
        error: Rgb::from_hex("#FF453A"),

        border: Rgb::from_hex("#38383A"),
        separator: Rgb::from_hex("#484848"),

        button: Rgb::from_hex("#0A84FF"),
        button_pressed: Rgb::from_hex("#0066CC"),
        input_background: Rgb::from_hex("#1C1C1E"),
        input_border: Rgb::from_hex("#38383A"),

        shadow: Shadow {
            color: Rgb::from_hex("#000000"),
            opacity: 0.5,
            offset_x: 1,
            offset_y: 1,
        },
    };

    /// Blend `color` at `opacity` over `base` and convert for ratatui.
    pub fn tint(&self, color: Rgb, opacity: f32, base: Rgb) -> Color {
        color.with_opacity(opacity).over(base).into()
    }

    /// The shadow colour as it appears over this palette's surface.
    pub fn shadow_color(&self) -> Color {
        self.tint(self.shadow.color, self.shadow.opacity, self.surface)
    }
}

/// Neutral colours that stay the same in every theme.
pub mod common {
    use ratatui::style::Color;

    use super::Rgb;

    /// No fill; the terminal's own background shows through.
    pub const TRANSPARENT: Color = Color::Reset;
    pub const WHITE: Rgb = Rgb::from_hex("#FFFFFF");
    pub const BLACK: Rgb = Rgb::from_hex("#000000");

    /// Gray scale from step 100 (lightest) to 900 (darkest).
    pub const GRAY: [Rgb; 9] = [
        Rgb::from_hex("#F5F5F5"),
        Rgb::from_hex("#EEEEEE"),
        Rgb::from_hex("#E0E0E0"),
        Rgb::from_hex("#BDBDBD"),
        Rgb::from_hex("#9E9E9E"),
        Rgb::from_hex("#757575"),
        Rgb::from_hex("#616161"),
        Rgb::from_hex("#424242"),
        Rgb::from_hex("#212121"),
    ];

    /// The gray for a step of 100 through 900.
    pub fn gray(step: u16) -> Option<Rgb> {
        if step % 100 != 0 {
            return None;
        }
        let index = usize::from(step / 100).checked_sub(1)?;
        GRAY.get(index).copied()
    }
}

/// Which palette is active.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ThemeName {
    Light,
    #[default]
    Dark,
}

impl ThemeName {
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeName::Light => &Palette::LIGHT,
            ThemeName::Dark => &Palette::DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }
}
