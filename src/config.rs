//! Site configuration.
//!
//! Tunables live in `site.json` next to the binary. Every field has a default,
//! so a missing file or a partial one still produces a working page.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const CONFIG_FILE: &str = "site.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scroll offset past which the navbar switches to its solid style.
    #[serde(default = "default_nav_scroll_threshold_px")]
    pub nav_scroll_threshold_px: f64,
    /// Delay before the dropdown closes after the pointer leaves it.
    #[serde(default = "default_dropdown_close_ms")]
    pub dropdown_close_ms: u64,
    /// Simulated latency of a contact submission.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// How long the confirmation stays up before the form resets.
    #[serde(default = "default_confirmation_ms")]
    pub confirmation_ms: u64,
    /// Prefix for images served with the page.
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    #[serde(default)]
    pub contact: ContactChannels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannels {
    /// Digits only, country code first.
    #[serde(default = "default_phone_digits")]
    pub phone_digits: String,
    #[serde(default = "default_phone_display")]
    pub phone_display: String,
    #[serde(default = "default_telegram_handle")]
    pub telegram_handle: String,
    #[serde(default = "default_email")]
    pub email: String,
}

impl ContactChannels {
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.phone_digits)
    }

    pub fn telegram_url(&self) -> String {
        format!("https://t.me/{}", self.telegram_handle)
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.phone_digits)
    }
}

impl Default for ContactChannels {
    fn default() -> Self {
        Self {
            phone_digits: default_phone_digits(),
            phone_display: default_phone_display(),
            telegram_handle: default_telegram_handle(),
            email: default_email(),
        }
    }
}

impl SiteConfig {
    pub fn dropdown_close_delay(&self) -> Duration {
        Duration::from_millis(self.dropdown_close_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }

    /// URL for a bundled image, e.g. `hero-bg.jpg`.
    pub fn asset_url(&self, name: &str) -> String {
        let base = self.asset_base.trim_end_matches('/');
        format!("{}/{}", base, urlencoding::encode(name))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold_px: default_nav_scroll_threshold_px(),
            dropdown_close_ms: default_dropdown_close_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            confirmation_ms: default_confirmation_ms(),
            asset_base: default_asset_base(),
            contact: ContactChannels::default(),
        }
    }
}

/// Load `path`, falling back to defaults when it is missing or malformed.
pub fn load_config(path: &Path) -> SiteConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            info!(path = %path.display(), "Using default site config: {err}");
            return SiteConfig::default();
        }
    };
    parse_config(&contents).unwrap_or_else(|err| {
        warn!(path = %path.display(), "Invalid site config JSON: {err}");
        SiteConfig::default()
    })
}

pub fn parse_config(contents: &str) -> Result<SiteConfig, serde_json::Error> {
    let config = serde_json::from_str::<SiteConfig>(contents)?;
    debug!(?config, "Parsed site config");
    Ok(config)
}

fn default_nav_scroll_threshold_px() -> f64 {
    50.0
}

fn default_dropdown_close_ms() -> u64 {
    1000
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_confirmation_ms() -> u64 {
    3000
}

fn default_asset_base() -> String {
    "/siteadvocacia".to_string()
}

fn default_phone_digits() -> String {
    "5561993873267".to_string()
}

fn default_phone_display() -> String {
    "55 (61) 99387-3267".to_string()
}

fn default_telegram_handle() -> String {
    "Brain_590".to_string()
}

fn default_email() -> String {
    "pereirabrito.adv.assoc@gmail.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.nav_scroll_threshold_px, 50.0);
        assert_eq!(config.dropdown_close_delay(), Duration::from_millis(1000));
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.confirmation_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = parse_config(r#"{ "submit_delay_ms": 10, "contact": { "telegram_handle": "escritorio" } }"#).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.confirmation_ms, 3000);
        assert_eq!(config.contact.telegram_url(), "https://t.me/escritorio");
        assert_eq!(config.contact.whatsapp_url(), "https://wa.me/5561993873267");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_config("{ nav_scroll_threshold_px: }").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        assert_eq!(load_config(Path::new("no/such/site.json")), SiteConfig::default());
    }

    #[test]
    fn test_contact_links() {
        let contact = ContactChannels::default();
        assert_eq!(contact.mailto_url(), "mailto:pereirabrito.adv.assoc@gmail.com");
        assert_eq!(contact.tel_url(), "tel:5561993873267");
    }

    #[test]
    fn test_asset_url_encodes_name() {
        let config = SiteConfig { asset_base: "/static/".to_string(), ..SiteConfig::default() };
        assert_eq!(config.asset_url("hero-bg.jpg"), "/static/hero-bg.jpg");
        assert_eq!(config.asset_url("foto equipe.jpg"), "/static/foto%20equipe.jpg");
    }
}
