use serde::Deserialize;

/// Knobs for the frosted call-to-action panel.
///
/// The noise settings are accepted so existing configs keep parsing, the
/// panel does not draw a noise layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiquidGlassParams {
    pub tint_hex: String,
    pub tint_opacity: f64,
    pub blur: f64,
    pub noise_frequency: f64,
    pub noise_scale: f64,
    pub noise_octaves: u32,
    pub inner_shadow_blur: f64,
    pub inner_shadow_spread: f64,
    pub highlight_opacity: f64,
}

impl Default for LiquidGlassParams {
    fn default() -> Self {
        Self {
            tint_hex: "#ffffff".to_string(),
            // Must stay slightly visible or the backdrop blur is skipped.
            tint_opacity: 0.05,
            blur: 12.0,
            noise_frequency: 0.45,
            noise_scale: 0.0,
            noise_octaves: 2,
            inner_shadow_blur: 43.0,
            inner_shadow_spread: -10.0,
            highlight_opacity: 0.2,
        }
    }
}

impl LiquidGlassParams {
    pub fn tint_rgb(&self) -> (u8, u8, u8) {
        tint_rgb(&self.tint_hex)
    }

    /// Space separated channels for `rgba(r g b / a)`.
    fn tint_channels(&self) -> String {
        let (r, g, b) = self.tint_rgb();
        format!("{} {} {}", r, g, b)
    }

    pub fn panel_style(&self) -> String {
        let rgb = self.tint_channels();
        let backdrop = format!("blur({}px) saturate(1.6)", self.blur);
        format!(
            "background: rgba({rgb} / {opacity}); \
             backdrop-filter: {backdrop}; \
             -webkit-backdrop-filter: {backdrop}; \
             transform: translate3d(0,0,0); \
             border: 1px solid rgba({rgb} / 0.2); \
             box-shadow: 0 8px 32px 0 rgba(0, 0, 0, 0.37), \
             inset 0 0 0 1px rgba(255, 255, 255, 0.1), \
             inset 0 0 12px 0 rgba(255, 255, 255, 0.1);",
            rgb = rgb,
            opacity = self.tint_opacity,
            backdrop = backdrop,
        )
    }

    pub fn inner_shadow_style(&self) -> String {
        format!(
            "box-shadow: inset 0 1px 0 rgba(255,255,255,0.25), inset 0 {}px {}px rgba(0,0,0,0.35);",
            self.inner_shadow_spread, self.inner_shadow_blur
        )
    }
}

/// Parses `#rgb`, `#rrggbb` or a truncated hex string into channels.
///
/// Short input is right-padded with `0`; a channel that is not hex at all
/// falls back to full intensity.
pub fn tint_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim().trim_start_matches('#');
    let mut normalized: String = if hex.chars().count() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.chars().take(6).collect()
    };
    while normalized.chars().count() < 6 {
        normalized.push('0');
    }
    let chars: Vec<char> = normalized.chars().collect();
    let channel = |i: usize| -> u8 {
        let pair: String = chars[i..i + 2].iter().collect();
        u8::from_str_radix(&pair, 16).unwrap_or(255)
    };
    (channel(0), channel(2), channel(4))
}
