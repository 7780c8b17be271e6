//! Piecewise-linear interpolation over the keyframe tables.

use crate::color::lerp_color;
use crate::keyframes::{GRADIENT_KEYFRAMES, STAR_KEYFRAMES};

/// Wrap an arbitrary hour into [0, 24). `rem_euclid` alone can round a tiny
/// negative input up to exactly 24.0 (the gap to the previous f32 is about
/// 1e-6 there), which no scan segment covers, so 24.0 folds back to 0.0.
fn wrap_hour(hour: f32) -> f32 {
    let h = hour.rem_euclid(24.0);
    if h >= 24.0 {
        0.0
    } else {
        h
    }
}

/// Find the keyframe pair bounding `h` (already wrapped into [0, 24)) and
/// the clamped local parameter within that segment. Falls back to the first
/// pair if no segment matches, which cannot happen for a wrapped hour.
fn segment<'a, K>(table: &'a [K], hour_of: impl Fn(&K) -> f32, h: f32) -> (&'a K, &'a K, f32) {
    let mut pair = (&table[0], &table[1]);
    for window in table.windows(2) {
        if hour_of(&window[0]) <= h && h < hour_of(&window[1]) {
            pair = (&window[0], &window[1]);
            break;
        }
    }
    let (from, to) = pair;
    let span = hour_of(to) - hour_of(from);
    let t = if span == 0.0 {
        0.0
    } else {
        ((h - hour_of(from)) / span).clamp(0.0, 1.0)
    };
    (from, to, t)
}

/// Interpolated zenith-to-horizon strip for a fractional hour.
/// `hour` is wrapped modulo 24, so 24.0 and 0.0 (and any offset by whole
/// days) produce identical output.
pub fn gradient_colors_at(hour: f32) -> [String; 5] {
    let h = wrap_hour(hour);
    let (from, to, t) = segment(GRADIENT_KEYFRAMES, |kf| kf.hour, h);
    std::array::from_fn(|i| lerp_color(from.colors[i], to.colors[i], t))
}

/// Interpolated star tint for a fractional hour, wrapped modulo 24.
pub fn star_color_at(hour: f32) -> String {
    let h = wrap_hour(hour);
    let (from, to, t) = segment(STAR_KEYFRAMES, |kf| kf.hour, h);
    lerp_color(from.color, to.color, t)
}

#[cfg(test)]
mod tests {
    use super::{gradient_colors_at, star_color_at};
    use crate::color::{hex_to_rgb, lerp_color};
    use crate::keyframes::{GRADIENT_KEYFRAMES, STAR_KEYFRAMES};

    #[test]
    fn daylight_anchor_is_returned_verbatim() {
        assert_eq!(
            gradient_colors_at(13.0),
            ["#1848A8", "#2C70CC", "#5898DC", "#A8C8E4", "#DED4C0"]
        );
    }

    #[test]
    fn morning_star_anchor_is_returned_verbatim() {
        assert_eq!(star_color_at(6.5), "#E88840");
    }

    #[test]
    fn every_anchor_is_exact() {
        for kf in GRADIENT_KEYFRAMES {
            let got = gradient_colors_at(kf.hour);
            for (out, expected) in got.iter().zip(kf.colors) {
                assert_eq!(out, expected, "gradient anchor at hour {}", kf.hour);
            }
        }
        for kf in STAR_KEYFRAMES {
            assert_eq!(star_color_at(kf.hour), kf.color, "star anchor at hour {}", kf.hour);
        }
    }

    #[test]
    fn midnight_wraps_seamlessly() {
        assert_eq!(gradient_colors_at(0.0), gradient_colors_at(24.0));
        assert_eq!(star_color_at(0.0), star_color_at(24.0));
    }

    #[test]
    fn out_of_range_hours_wrap_modulo_24() {
        assert_eq!(gradient_colors_at(13.0), gradient_colors_at(37.0));
        assert_eq!(star_color_at(6.5), star_color_at(-17.5));
    }

    #[test]
    fn tiny_negative_hour_stays_on_the_night_palette() {
        // rem_euclid rounds hours like -1e-7 up to exactly 24.0; the wrap
        // must still land on the midnight anchor, not jump to Dawn.
        assert_eq!(gradient_colors_at(-1e-7), gradient_colors_at(0.0));
        assert_eq!(star_color_at(-1e-7), star_color_at(0.0));
    }

    #[test]
    fn segment_midpoint_mixes_bounding_anchors() {
        // 8.25 is halfway between the Morning (6.5) and Mid-morning (10.0)
        // anchors, so the zenith stop is the midpoint of their zenith colors.
        let strip = gradient_colors_at(8.25);
        assert_eq!(strip[0], lerp_color("#06051C", "#1438A0", 0.5));
    }

    #[test]
    fn channels_move_monotonically_within_a_segment() {
        // Sample the Morning -> Mid-morning segment; each RGB channel of the
        // zenith stop must move one way between the anchor values.
        let (sr, sg, sb) = hex_to_rgb("#06051C");
        let (er, eg, eb) = hex_to_rgb("#1438A0");
        let mut prev = (sr as i32, sg as i32, sb as i32);
        let end = (er as i32, eg as i32, eb as i32);
        for step in 1..=20 {
            let h = 6.5 + (10.0 - 6.5) * step as f32 / 20.0;
            let (r, g, b) = hex_to_rgb(&gradient_colors_at(h)[0]);
            let cur = (r as i32, g as i32, b as i32);
            assert!((cur.0 - prev.0).signum() * (end.0 - prev.0).signum() >= 0);
            assert!((cur.1 - prev.1).signum() * (end.1 - prev.1).signum() >= 0);
            assert!((cur.2 - prev.2).signum() * (end.2 - prev.2).signum() >= 0);
            prev = cur;
        }
        assert_eq!(prev, end);
    }
}
