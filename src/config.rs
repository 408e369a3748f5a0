use log::Level;

/// Milliseconds between two carousel advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 3000;

/// Scroll offset (px) after which the header switches to its compact look.
pub const HEADER_SCROLL_THRESHOLD: i32 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: CAROUSEL_INTERVAL_MS,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Public assets are served from the same origin as `index.html`.
pub const ASSET_ROOT: &str = "";

/// Resolves a public asset path (`/images/x.jpeg`) against the asset root.
pub fn asset_url(path: &str) -> String {
    let root = ASSET_ROOT.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", root, path)
    } else {
        format!("{}/{}", root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_keeps_a_single_slash() {
        assert_eq!(asset_url("/images/a.jpeg"), format!("{}/images/a.jpeg", ASSET_ROOT));
        assert_eq!(asset_url("images/a.jpeg"), format!("{}/images/a.jpeg", ASSET_ROOT));
    }

    #[test]
    fn carousel_defaults_to_three_seconds() {
        assert_eq!(CarouselConfig::default().interval_ms, 3000);
    }
}
