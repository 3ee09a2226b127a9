use crate::carousel::controller::DEFAULT_DWELL_MS;
use crate::glass::LiquidGlassParams;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_VIDEOS: [&str; 3] = [
    "https://res.cloudinary.com/dkjokhb4w/video/upload/v1770005519/TIKTOK_AU_GAMERS_1_cb5b7l.mp4",
    "https://res.cloudinary.com/dkjokhb4w/video/upload/v1769128347/ssstik.io__boilerroomtv_1769128318966_odpdxo.mp4",
    "https://res.cloudinary.com/dkjokhb4w/video/upload/v1769401959/TIKTOK_BRAZIL_TOURISTS_2_ze2vye.mp4",
];
const DEFAULT_TOP_OVERLAY: &str =
    "https://res.cloudinary.com/dkjokhb4w/image/upload/v1770006552/Top_tab_navigation_n9q5gp.png";
const DEFAULT_SIDE_OVERLAY: &str =
    "https://res.cloudinary.com/dkjokhb4w/image/upload/v1770006552/Interaction_buttons_qs4eq5.png";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid FEED_CONFIG json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("FEED_CONFIG must list at least one video")]
    NoVideos,
    #[error("FEED_CONFIG dwellMs must be greater than zero")]
    ZeroDwell,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub videos: Vec<String>,
    /// Static tab bar image laid over the top of the feed.
    pub top_overlay: String,
    /// Like/comment/share column drawn on every slot.
    pub side_overlay: String,
    pub dwell_ms: u32,
    pub glass: LiquidGlassParams,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            videos: DEFAULT_VIDEOS.iter().map(|s| s.to_string()).collect(),
            top_overlay: DEFAULT_TOP_OVERLAY.to_string(),
            side_overlay: DEFAULT_SIDE_OVERLAY.to_string(),
            dwell_ms: DEFAULT_DWELL_MS,
            glass: LiquidGlassParams::default(),
        }
    }
}

/// Builds the page config from an optional JSON override.
pub fn load(raw: Option<&str>) -> Result<PageConfig, ConfigError> {
    let config = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => serde_json::from_str::<PageConfig>(json)?,
        None => PageConfig::default(),
    };
    if config.videos.is_empty() {
        return Err(ConfigError::NoVideos);
    }
    if config.dwell_ms == 0 {
        return Err(ConfigError::ZeroDwell);
    }
    Ok(config)
}

static CONFIG: Lazy<PageConfig> = Lazy::new(|| {
    load(option_env!("FEED_CONFIG")).unwrap_or_else(|e| {
        log::warn!("{}, using built-in feed", e);
        PageConfig::default()
    })
});

pub fn get() -> &'static PageConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_override_gives_builtin_feed() {
        let config = load(None).unwrap();
        assert_eq!(config.videos.len(), 3);
        assert_eq!(config.dwell_ms, 4_000);
        assert_eq!(config, load(Some("  ")).unwrap());
    }

    #[test]
    fn partial_override_merges_over_defaults() {
        let config = load(Some(r#"{"dwellMs": 2500, "glass": {"blur": 4}}"#)).unwrap();
        assert_eq!(config.dwell_ms, 2_500);
        assert_eq!(config.glass.blur, 4.0);
        assert_eq!(config.glass.tint_opacity, 0.05);
        assert_eq!(config.top_overlay, DEFAULT_TOP_OVERLAY);
    }

    #[test]
    fn rejects_empty_feed_and_zero_dwell() {
        assert!(matches!(
            load(Some(r#"{"videos": []}"#)),
            Err(ConfigError::NoVideos)
        ));
        assert!(matches!(
            load(Some(r#"{"dwellMs": 0}"#)),
            Err(ConfigError::ZeroDwell)
        ));
        assert!(matches!(load(Some("{videos")), Err(ConfigError::Parse(_))));
    }
}
