//! Palette coloring for calendar events and PO badges.
//!
//! Two schemes coexist and are not interchangeable:
//!
//! | Scheme | Palette index | Text contrast |
//! |--------|---------------|---------------|
//! | Group | `group_index % len` (sequential) | perceptual luma `0.299R+0.587G+0.114B`, threshold 0.5 |
//! | PO number | FNV-1a hash of the string `% len` | WCAG relative luminance, threshold 0.56 |
//!
//! The hash scheme is a pure function of the key string, so a PO keeps
//! its color regardless of how many other POs were colored before it.
//!
//! # Reference
//! WCAG 2.1, "relative luminance" definition (sRGB gamma expansion).

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};

/// The built-in 100-color palette.
pub const PALETTE: [&str; 100] = [
    "#C91D1D", "#5CD680", "#660DA5", "#ECDE79", "#2EA1B8", "#F042A0", "#389C16", "#8985E0",
    "#D45211", "#4CE6AC", "#86248F", "#D8F471", "#1D72C9", "#D65C75", "#0DA51A", "#A479EC",
    "#B88A2E", "#42F0E9", "#9C167A", "#AEE085", "#1131D4", "#E6604C", "#248F51", "#CE71F4",
    "#C8C91D", "#5CB2D6", "#A50D4C", "#87EC79", "#452EB8", "#F09242", "#169C7B", "#E085DC",
    "#92D411", "#4C85E6", "#8F242C", "#71F48D", "#741DC9", "#D6BD5C", "#0D98A5", "#EC79C0",
    "#5BB82E", "#4249F0", "#9C3916", "#85E0B7", "#B511D4", "#D1E64C", "#24628F", "#F47197",
    "#1DC91E", "#805CD6", "#A5670D", "#79ECDE", "#B82EA0", "#9FF042", "#16379C", "#E08985",
    "#11D454", "#AD4CE6", "#8F8724", "#71D7F4", "#C91D71", "#74D65C", "#1B0DA5", "#ECA579",
    "#2EB88B", "#EA42F0", "#7A9C16", "#85AEE0", "#D41130", "#4CE661", "#51248F", "#F4CF71",
    "#1DC7C9", "#D65CB1", "#4BA50D", "#7986EC", "#B8462E", "#42F094", "#7C169C", "#DCE085",
    "#1191D4", "#E64C84", "#2B8F24", "#8E71F4", "#C9751D", "#5CD6BE", "#A50D97", "#C0EC79",
    "#2E5AB8", "#F04247", "#169C39", "#B785E0", "#D4B611", "#4CD0E6", "#8F2461", "#96F471",
    "#1F1DC9", "#D6815C", "#0DA568", "#DF79EC",
];

/// Text color on light group backgrounds.
pub const GROUP_TEXT_DARK: &str = "#000000";
/// Text color on light PO backgrounds.
pub const PO_TEXT_DARK: &str = "#111827";
/// Text color on dark backgrounds (both schemes).
pub const TEXT_LIGHT: &str = "#ffffff";

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Background/foreground pair for an index-colored group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub bg: String,
    pub text: String,
}

/// Hash-derived colors for a PO badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoColors {
    pub bg: String,
    pub text: String,
    /// Palette slot chosen by the hash.
    pub index: usize,
    pub rgb: Rgb,
    /// WCAG relative luminance of `bg` (0..1).
    pub luminance: f64,
}

/// Parses `#RRGGBB` (leading `#` optional).
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let cleaned = hex.trim().trim_start_matches('#');
    if cleaned.len() != 6 || !cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TimelineError::InvalidColor(hex.to_string()));
    }
    let value =
        u32::from_str_radix(cleaned, 16).map_err(|_| TimelineError::InvalidColor(hex.to_string()))?;
    Ok(Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    })
}

/// Perceptual luma normalized to 0..1.
#[inline]
pub fn perceptual_luminance(rgb: Rgb) -> f64 {
    (0.299 * rgb.r as f64 + 0.587 * rgb.g as f64 + 0.114 * rgb.b as f64) / 255.0
}

/// WCAG relative luminance (gamma-expanded sRGB).
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let expand = |v: u8| {
        let v = v as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * expand(rgb.r) + 0.7152 * expand(rgb.g) + 0.0722 * expand(rgb.b)
}

/// 32-bit FNV-1a over the UTF-16 code units of `s`.
///
/// Hashing code units rather than bytes keeps the index identical to
/// what a JavaScript client computes with `charCodeAt`.
pub fn fnv1a_utf16(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ unit as u32).wrapping_mul(FNV_PRIME)
    })
}

/// Colors for the group at `index` using the default palette.
pub fn colors_for_index(index: usize) -> ColorPair {
    colors_for_index_with(index, &TimelineConfig::default())
}

/// Colors for the group at `index`.
///
/// Palette entries that fail to parse are treated as black, which
/// selects white text.
pub fn colors_for_index_with(index: usize, config: &TimelineConfig) -> ColorPair {
    let Some(bg) = palette_entry(&config.palette, index) else {
        return ColorPair {
            bg: String::new(),
            text: TEXT_LIGHT.into(),
        };
    };
    let rgb = entry_rgb(bg);
    let text = if perceptual_luminance(rgb) > 0.5 {
        GROUP_TEXT_DARK
    } else {
        TEXT_LIGHT
    };
    ColorPair {
        bg: bg.to_string(),
        text: text.into(),
    }
}

/// Colors for a PO number using the default palette.
pub fn colors_for_po_number(po_number: &str) -> PoColors {
    colors_for_po_number_with(po_number, &TimelineConfig::default())
}

/// Colors for a PO number: stable across calls and call order.
pub fn colors_for_po_number_with(po_number: &str, config: &TimelineConfig) -> PoColors {
    let len = config.palette.len().max(1);
    let index = (fnv1a_utf16(po_number) as usize) % len;
    let bg = palette_entry(&config.palette, index).unwrap_or_default();
    let rgb = entry_rgb(bg);
    let luminance = relative_luminance(rgb);
    let text = if luminance > 0.56 { PO_TEXT_DARK } else { TEXT_LIGHT };
    PoColors {
        bg: bg.to_string(),
        text: text.into(),
        index,
        rgb,
        luminance,
    }
}

fn entry_rgb(bg: &str) -> Rgb {
    parse_hex(bg).unwrap_or_else(|_| {
        warn!("palette entry {bg:?} is not a hex color, using black");
        Rgb { r: 0, g: 0, b: 0 }
    })
}

fn palette_entry(palette: &[String], index: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    palette.get(index % palette.len()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF8000").unwrap(), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(parse_hex("0a0B0c").unwrap(), Rgb { r: 10, g: 11, b: 12 });
        assert!(parse_hex("#FFF").is_err());
        assert!(parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_builtin_palette_parses() {
        for hex in PALETTE {
            assert!(parse_hex(hex).is_ok(), "{hex}");
        }
    }

    #[test]
    fn test_fnv1a_reference_values() {
        // Standard FNV-1a 32-bit vectors (ASCII: code units == bytes)
        assert_eq!(fnv1a_utf16(""), 0x811C9DC5);
        assert_eq!(fnv1a_utf16("a"), 0xE40C292C);
        assert_eq!(fnv1a_utf16("foobar"), 0xBF9CF968);
    }

    #[test]
    fn test_fnv1a_hashes_utf16_units() {
        // 'é' is one UTF-16 unit (0xE9) but two UTF-8 bytes
        let expected = (FNV_OFFSET_BASIS ^ 0xE9).wrapping_mul(FNV_PRIME);
        assert_eq!(fnv1a_utf16("é"), expected);
    }

    #[test]
    fn test_po_colors_are_stable() {
        let first = colors_for_po_number("PO-123");
        for other in ["PO-1", "PO-2", "X", "PO-999"] {
            let _ = colors_for_po_number(other);
        }
        let again = colors_for_po_number("PO-123");
        assert_eq!(first, again);
        assert_eq!(first.index, (fnv1a_utf16("PO-123") as usize) % PALETTE.len());
        assert_eq!(first.bg, PALETTE[first.index]);
    }

    #[test]
    fn test_po_text_threshold() {
        let config = TimelineConfig::default()
            .with_palette(vec!["#FFFFFF".into()]);
        let light = colors_for_po_number_with("any", &config);
        assert_eq!(light.text, PO_TEXT_DARK);
        assert!((light.luminance - 1.0).abs() < 1e-9);

        // Mid grey: luma ≈ 0.5 but relative luminance ≈ 0.22 → white text
        let config = TimelineConfig::default().with_palette(vec!["#808080".into()]);
        let grey = colors_for_po_number_with("any", &config);
        assert_eq!(grey.text, TEXT_LIGHT);
    }

    #[test]
    fn test_group_colors_wrap_and_contrast() {
        let config = TimelineConfig::default()
            .with_palette(vec!["#FFFF00".into(), "#000080".into()]);
        let yellow = colors_for_index_with(0, &config);
        assert_eq!(yellow.bg, "#FFFF00");
        assert_eq!(yellow.text, GROUP_TEXT_DARK);

        let navy = colors_for_index_with(1, &config);
        assert_eq!(navy.text, TEXT_LIGHT);

        assert_eq!(colors_for_index_with(2, &config), yellow);
    }

    #[test]
    fn test_schemes_disagree_on_threshold() {
        // #A0A0A0: luma 0.627 (> 0.5) but relative luminance 0.352 (< 0.56)
        let rgb = parse_hex("#A0A0A0").unwrap();
        assert!(perceptual_luminance(rgb) > 0.5);
        assert!(relative_luminance(rgb) < 0.56);
    }
}
