use anyhow::{Context, Result};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Page being localized, including any `lang` query parameter
    pub page_url: Url,

    /// Dictionary path prefix (the script's `data-base` attribute)
    pub base: Option<String>,

    /// Locale reported by the browser
    pub browser_locale: Option<String>,

    /// File backing the persisted language preference
    pub prefs_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let page_url = std::env::var("SITE_PAGE_URL").context("SITE_PAGE_URL not set")?;

        Ok(Self {
            page_url: Url::parse(&page_url)
                .with_context(|| format!("SITE_PAGE_URL is not a valid URL: {}", page_url))?,
            base: std::env::var("SITE_BASE").ok().filter(|v| !v.is_empty()),
            browser_locale: std::env::var("SITE_BROWSER_LOCALE").ok(),
            prefs_file: std::env::var("SITE_PREFS_FILE")
                .unwrap_or_else(|_| ".site_i18n_prefs.json".to_string()),
        })
    }
}
