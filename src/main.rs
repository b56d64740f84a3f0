//! Language pack inspector - loads the translator the way the application
//! does and prints what it resolved.
//!
//! Usage:
//!   cargo run -- ok cancel menu_file
//!
//! Optional environment variables:
//! - LANGUAGES_PATH (defaults to lang)
//! - LANGUAGE_ID (defaults to 1033)

use anyhow::{Context, Result};
use langpack::config::Config;
use langpack::i18n::{EmbeddedResources, Translator};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langpack=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Loading languages from {}", config.languages_path().display());

    let translator = Translator::load(&EmbeddedResources::builtin(), &config)
        .context("Failed to load language packs")?;

    println!("Available languages:");
    for lang in translator.available_languages() {
        let marker = if lang.code() == translator.selected_language_id() {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:>5}  {} ({} strings)",
            marker,
            lang.code(),
            lang.name(),
            lang.len()
        );
    }

    let keys: Vec<String> = std::env::args().skip(1).collect();
    if !keys.is_empty() {
        println!();
        for key in &keys {
            println!("{} = {}", key, translator.translate(key));
        }
    }

    Ok(())
}
