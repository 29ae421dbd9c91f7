use ratatui::style::{Color, Modifier, Style};

use crate::model::{TaskPriority, TaskStatus};
use crate::state::Theme;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub muted_dark: Color,
    pub border: Color,
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub destructive: Color,
    pub selection: Color,
}

const DARK: Palette = Palette {
    background: Color::Rgb(17, 19, 23),
    surface: Color::Rgb(28, 31, 36),
    text: Color::Rgb(234, 236, 239),
    muted: Color::Rgb(160, 165, 172),
    muted_dark: Color::Rgb(118, 124, 130),
    border: Color::Rgb(52, 56, 60),
    primary: Color::Rgb(122, 126, 244),
    success: Color::Rgb(126, 210, 146),
    warning: Color::Rgb(244, 200, 98),
    destructive: Color::Rgb(255, 107, 107),
    selection: Color::Rgb(44, 48, 64),
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 251),
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(24, 26, 31),
    muted: Color::Rgb(96, 102, 112),
    muted_dark: Color::Rgb(140, 146, 156),
    border: Color::Rgb(222, 224, 230),
    primary: Color::Rgb(79, 84, 229),
    success: Color::Rgb(34, 160, 84),
    warning: Color::Rgb(196, 132, 8),
    destructive: Color::Rgb(214, 48, 49),
    selection: Color::Rgb(230, 232, 252),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.selection).add_modifier(Modifier::BOLD)
    }

    pub fn priority_style(&self, priority: TaskPriority) -> Style {
        let (fg, bg) = match priority {
            TaskPriority::Low => (self.muted, self.border),
            TaskPriority::Medium => (self.background, self.warning),
            TaskPriority::High => (self.background, self.primary),
            TaskPriority::Urgent => (self.background, self.destructive),
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }

    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Todo => self.muted,
            TaskStatus::InProgress => self.warning,
            TaskStatus::Done => self.success,
        }
    }

    /// Avatar tint keyed by glyph, muted for unknown glyphs.
    pub fn avatar_color(&self, glyph: &str) -> Color {
        match glyph {
            "F" => self.primary,
            "A" => self.success,
            "S" => self.warning,
            "M" => self.destructive,
            _ => self.muted,
        }
    }
}

/// Parse a project color hint such as `hsl(239 84% 67%)`.
pub fn parse_hsl(value: &str) -> Option<Color> {
    let inner = value
        .trim()
        .strip_prefix("hsl(")?
        .strip_suffix(')')?
        .replace(',', " ");
    let parts: Vec<&str> = inner.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    let hue: f64 = parts[0].trim_end_matches("deg").parse().ok()?;
    let saturation: f64 = parts[1].strip_suffix('%')?.parse().ok()?;
    let lightness: f64 = parts[2].strip_suffix('%')?.parse().ok()?;
    let (r, g, b) = hsl_to_rgb(hue, saturation / 100.0, lightness / 100.0);
    Some(Color::Rgb(r, g, b))
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hsl_handles_builtin_colors() {
        assert_eq!(parse_hsl("hsl(142 71% 45%)"), Some(Color::Rgb(33, 196, 93)));
        assert_eq!(parse_hsl("hsl(0, 100%, 50%)"), Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn parse_hsl_rejects_other_formats() {
        assert_eq!(parse_hsl("#ff0000"), None);
        assert_eq!(parse_hsl("hsl(10 20 30)"), None);
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_ne!(Palette::for_theme(Theme::Dark), Palette::for_theme(Theme::Light));
    }
}
