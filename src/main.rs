//! Preview how a page would be localized for a visitor.
//!
//! Usage:
//!   cargo run -- nav.home hero.title   # Print these keys as the page would show them
//!   cargo run                          # Print every key of the dictionary
//!
//! Required environment variables:
//! - SITE_PAGE_URL (e.g. https://example.com/?lang=es)
//!
//! Optional:
//! - SITE_BASE (dictionary path prefix, the script's data-base attribute)
//! - SITE_BROWSER_LOCALE (e.g. pt-BR)
//! - SITE_PREFS_FILE (defaults to .site_i18n_prefs.json)

use anyhow::Result;
use site_i18n::config::Config;
use site_i18n::dom::{Element, MemoryDocument};
use site_i18n::loader::HttpDictionaryLoader;
use site_i18n::localizer::ATTR_BASE;
use site_i18n::storage::FileStore;
use site_i18n::substitute::ATTR_KEY;
use site_i18n::{Localizer, PageState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let keys: Vec<String> = std::env::args().skip(1).collect();

    let mut doc = MemoryDocument::new();
    let mut script = Element::new("script");
    if let Some(base) = &config.base {
        script = script.with_attribute(ATTR_BASE, base);
    }
    let script = doc.append(script);
    doc.set_current_script(script);

    let nodes: Vec<_> = keys
        .iter()
        .map(|key| doc.append(Element::new("span").with_attribute(ATTR_KEY, key).with_text(key)))
        .collect();

    info!("Previewing {}", config.page_url);

    let mut localizer = Localizer::new(
        doc,
        FileStore::open(&config.prefs_file),
        HttpDictionaryLoader::default(),
        config.page_url.clone(),
        config.browser_locale.clone(),
    );

    let language = match localizer.init().await {
        PageState::Translated(language) => language,
        state => {
            warn!("Page left untranslated ({:?})", state);
            return Ok(());
        }
    };

    println!(
        "# {} ({}, {})",
        language.native_name(),
        language.code(),
        language.direction().as_str()
    );

    if keys.is_empty() {
        if let Some(dict) = localizer.dictionary() {
            for key in dict.keys() {
                println!("{} = {}", key, dict.lookup(&key).unwrap_or_default());
            }
        }
        return Ok(());
    }

    let doc = localizer.document();
    for (key, node) in keys.iter().zip(nodes) {
        match doc.element(node) {
            Some(element) if doc.mutations().iter().any(|m| m.node == node) => {
                println!("{} = {}", key, element.text);
            }
            _ => println!("{} (missing)", key),
        }
    }

    Ok(())
}
