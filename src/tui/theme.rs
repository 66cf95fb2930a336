use ratatui::style::Color;

use crate::config::ThemeConfig;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Some(Color::Rgb(r, g, b))
}

/// Overlay the `[theme]` table of the settings file on the built-in palette.
/// Colors that do not parse keep their default.
pub fn from_config(cfg: &ThemeConfig) -> Theme {
    let fallback = zenburn();
    let pick = |v: &Option<String>, default: Color| {
        v.as_deref().and_then(hex_to_color).unwrap_or(default)
    };
    Theme {
        bg: pick(&cfg.bg, fallback.bg),
        fg: pick(&cfg.fg, fallback.fg),
        accent: pick(&cfg.accent, fallback.accent),
        muted: pick(&cfg.muted, fallback.muted),
        error: pick(&cfg.error, fallback.error),
    }
}

pub fn zenburn() -> Theme {
    Theme {
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(220, 220, 204),
        accent: Color::Rgb(181, 189, 104),
        muted: Color::Rgb(150, 150, 150),
        error: Color::Rgb(204, 102, 102),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(hex_to_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(hex_to_color("ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(hex_to_color("#fff"), None);
        assert_eq!(hex_to_color("#gggggg"), None);
    }

    #[test]
    fn config_overrides_only_valid_colors() {
        let cfg = ThemeConfig {
            accent: Some("#010203".into()),
            error: Some("nope".into()),
            ..ThemeConfig::default()
        };
        let theme = from_config(&cfg);
        assert_eq!(theme.accent, Color::Rgb(1, 2, 3));
        assert_eq!(theme.error, zenburn().error);
        assert_eq!(theme.bg, zenburn().bg);
    }
}
