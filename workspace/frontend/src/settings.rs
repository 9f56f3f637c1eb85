use log::Level;
use web_sys::window;

/// Scroll offset, in pixels, past which the navigation bar turns opaque.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Navbar switches to its solid style once `scrollY` exceeds this
    pub scroll_threshold_px: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Optional overrides from localStorage; the site never writes these
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(log_level)) = storage.get_item("reiv_log_level") {
                settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
            }

            if let Ok(Some(threshold)) = storage.get_item("reiv_scroll_threshold_px") {
                settings.scroll_threshold_px =
                    parse_threshold(&threshold).unwrap_or(settings.scroll_threshold_px);
            }
        }

        settings
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

fn parse_threshold(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite() && *px >= 0.0)
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.log_level, Level::Info);
        assert!(!settings.debug_mode);
        assert_eq!(settings.scroll_threshold_px, 10.0);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_log_level("warn"), Some(Level::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_parse_threshold_rejects_garbage() {
        assert_eq!(parse_threshold(" 24 "), Some(24.0));
        assert_eq!(parse_threshold("-5"), None);
        assert_eq!(parse_threshold("NaN"), None);
        assert_eq!(parse_threshold("far"), None);
    }

    #[test]
    fn test_uninitialized_settings_are_defaults() {
        assert_eq!(get_settings(), AppSettings::default());
    }
}
