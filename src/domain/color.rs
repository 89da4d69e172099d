// Color math for chart palettes

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

const PALETTE_SATURATION: f64 = 70.0;
const PALETTE_LIGHTNESS: f64 = 50.0;
const LIGHTNESS_STEP: f64 = 10.0;

/// True for `#RRGGBB` strings.
pub fn is_valid_hex(hex: &str) -> bool {
    parse_rgb(hex).is_some()
}

fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let (r, g, b) = parse_rgb(hex)?;
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Some(Hsl { h: 0.0, s: 0.0, l: l * 100.0 });
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Some(Hsl {
        h: h / 6.0 * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    })
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let to_byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// `count` colors evenly spaced in hue starting at the base color's hue,
/// alternating between two lightness levels.
pub fn generate_palette(count: usize, base_color: &str) -> Vec<String> {
    let base_hue = hex_to_hsl(base_color).map(|hsl| hsl.h).unwrap_or(0.0);

    (0..count)
        .map(|i| {
            let hue = (base_hue + i as f64 * 360.0 / count as f64) % 360.0;
            let lightness = PALETTE_LIGHTNESS + (i % 2) as f64 * LIGHTNESS_STEP;
            hsl_to_hex(Hsl {
                h: hue,
                s: PALETTE_SATURATION,
                l: lightness,
            })
        })
        .collect()
}

/// Reduces lightness by `lightness * factor`. Unparsable input is returned unchanged.
pub fn darken(hex: &str, factor: f64) -> String {
    match hex_to_hsl(hex) {
        Some(mut hsl) => {
            hsl.l = (hsl.l - hsl.l * factor).max(0.0);
            hsl_to_hex(hsl)
        }
        None => hex.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(hex: &str) -> (i32, i32, i32) {
        let (r, g, b) = parse_rgb(hex).unwrap();
        (r as i32, g as i32, b as i32)
    }

    #[test]
    fn test_known_conversions() {
        let red = hex_to_hsl("#ff0000").unwrap();
        assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));

        let gray = hex_to_hsl("#808080").unwrap();
        assert_eq!(gray.s, 0.0);

        assert_eq!(hsl_to_hex(Hsl { h: 120.0, s: 100.0, l: 50.0 }), "#00ff00");
        assert_eq!(hsl_to_hex(Hsl { h: 240.0, s: 100.0, l: 50.0 }), "#0000ff");
        assert_eq!(hsl_to_hex(Hsl { h: 0.0, s: 0.0, l: 100.0 }), "#ffffff");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(hex_to_hsl("ff0000").is_none());
        assert!(hex_to_hsl("#ff00").is_none());
        assert!(hex_to_hsl("#gg0000").is_none());
        assert!(is_valid_hex("#3B82F6"));
        assert!(!is_valid_hex("#3B82F6AA"));
    }

    #[test]
    fn test_round_trip_within_one_unit() {
        // Walk a lattice over RGB space instead of all 16M colors
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(5) {
                    let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
                    let back = hsl_to_hex(hex_to_hsl(&hex).unwrap());
                    let (r2, g2, b2) = channels(&back);
                    assert!(
                        (r - r2).abs() <= 1 && (g - g2).abs() <= 1 && (b - b2).abs() <= 1,
                        "{} -> {}",
                        hex,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_palette_hues_evenly_spaced() {
        for count in 1..=12 {
            let palette = generate_palette(count, "#3b82f6");
            assert_eq!(palette.len(), count);

            let base_hue = hex_to_hsl("#3b82f6").unwrap().h;
            let step = 360.0 / count as f64;
            for (i, color) in palette.iter().enumerate() {
                let hsl = hex_to_hsl(color).unwrap();
                let expected = (base_hue + i as f64 * step) % 360.0;
                let diff = (hsl.h - expected).abs();
                let diff = diff.min(360.0 - diff);
                assert!(diff < 2.0, "count {} index {}: {} vs {}", count, i, hsl.h, expected);
            }
        }
    }

    #[test]
    fn test_palette_alternates_lightness() {
        let palette = generate_palette(4, "#ff0000");
        let lightness: Vec<f64> = palette
            .iter()
            .map(|c| hex_to_hsl(c).unwrap().l.round())
            .collect();
        assert_eq!(lightness, vec![50.0, 60.0, 50.0, 60.0]);
        assert_eq!(palette[0], "#d92626");
    }

    #[test]
    fn test_palette_with_invalid_base_starts_at_red() {
        let palette = generate_palette(1, "not-a-color");
        assert_eq!(palette, generate_palette(1, "#ff0000"));
        assert!(generate_palette(0, "#ff0000").is_empty());
    }

    #[test]
    fn test_darken() {
        let darker = darken("#d92626", 0.2);
        let before = hex_to_hsl("#d92626").unwrap();
        let after = hex_to_hsl(&darker).unwrap();
        assert!((after.l - before.l * 0.8).abs() < 0.5);
        assert!((after.h - before.h).abs() < 1.0);

        assert_eq!(darken("#000000", 0.2), "#000000");
        assert_eq!(darken("#ffffff", 1.0), "#000000");
        assert_eq!(darken("bogus", 0.2), "bogus");
    }
}
