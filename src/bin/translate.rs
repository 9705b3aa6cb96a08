//! Translate binary - translates one piece of text against a running proxy
//! server and records the result in the local history.
//!
//! Usage:
//!   cargo run --bin translate -- "Good morning"       # en -> ja
//!   cargo run --bin translate -- "おはよう" ja         # ja -> en
//!
//! Optional environment variables:
//! - KOTOBA_ENDPOINT (defaults to http://127.0.0.1:8787/api/translate)
//! - HISTORY_DB_PATH (defaults to data/history.db)

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use kotoba::config::Config;
use kotoba::gateway::TranslationGateway;
use kotoba::history::{HistoryStore, TranslationEntry};
use kotoba::language::Language;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kotoba=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let text = args
        .get(1)
        .context("Usage: translate <text> [source-language]")?;
    let source = match args.get(2) {
        Some(code) => Language::from_code(code)?,
        None => Language::En,
    };
    let target = source.opposite();

    let config = Config::from_env()?;
    let gateway = TranslationGateway::new(config.endpoint_url.clone());

    let result = match gateway.translate(text, source, target).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Translation failed [{}] {} (status {})", e.code, e.message, e.status);
            std::process::exit(1);
        }
    };

    println!("{}", result.translated_text);
    if let Some(detected) = &result.detected_source_language {
        if detected.as_str() != source.code() {
            println!("(detected source language: {})", detected);
        }
    }

    // Record the translation locally
    if let Some(parent) = std::path::Path::new(&config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("Failed to create history directory")?;
        }
    }
    let store = HistoryStore::new(&config.database_path)?;

    let now = Utc::now().timestamp_millis();
    let entry = TranslationEntry {
        id: format!("{}-{}", now, std::process::id()),
        source_text: text.clone(),
        translated_text: result.translated_text,
        source_language: source,
        target_language: target,
        romanization: None,
        created_at: now,
    };
    store.save_entry(&entry)?;
    info!("Saved history entry {}", entry.id);

    Ok(())
}
