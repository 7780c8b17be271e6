//! Hex/RGB color math shared by the gradient and star interpolators.

/// Parse a `#RRGGBB` string into its three 8-bit channels.
///
/// Precondition: `hex` is a 7-character `#RRGGBB` string (either case).
/// Inputs come from the fixed keyframe tables, so no validation is done;
/// a malformed digit pair decays to 0 rather than erroring.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    (channel(1..3), channel(3..5), channel(5..7))
}

/// Render three channel values as an uppercase `#RRGGBB` string.
/// Components are clamped to [0, 255] and rounded, so the output is a valid
/// hex color for any finite input.
pub fn rgb_to_hex(r: f32, g: f32, b: f32) -> String {
    let quantize = |c: f32| c.clamp(0.0, 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", quantize(r), quantize(g), quantize(b))
}

/// Linear interpolation between two hex colors, per channel.
///
/// `t` is not clamped here; callers supply `t` in [0, 1] (the interpolator
/// clamps before calling) and anything outside extrapolates.
pub fn lerp_color(a: &str, b: &str, t: f32) -> String {
    let (ar, ag, ab) = hex_to_rgb(a);
    let (br, bg, bb) = hex_to_rgb(b);
    let mix = |from: u8, to: u8| from as f32 + (to as f32 - from as f32) * t;
    rgb_to_hex(mix(ar, br), mix(ag, bg), mix(ab, bb))
}
