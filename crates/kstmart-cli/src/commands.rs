use std::path::Path;

use anyhow::Result;
use kstmart_core::api::{ApiClient, ApiError, FileSource};
use kstmart_core::cache::{FileStore, ProductsCache};
use kstmart_core::catalog::{filter_by_group, products_in_category};
use kstmart_core::config::Config;
use kstmart_core::models::GroupFilter;
use kstmart_core::state::{apply_preferences, Preferences, SortType};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cli::{Cli, Command};
use crate::output;

/// Build the product cache for this invocation from flags and config.
pub fn build_cache(cli: &Cli, config: &Config) -> Result<ProductsCache> {
    let cache = match &cli.file {
        Some(path) => {
            debug!(path = %path.display(), "Reading products from file");
            ProductsCache::new(FileSource::new(path))
        }
        None => {
            let base_url = cli.api_url.as_deref().unwrap_or(config.api_base_url());
            debug!(base_url = %base_url, "Reading products from API");
            ProductsCache::new(ApiClient::with_base_url(base_url)?)
        }
    }
    .with_ttl(config.cache_ttl());

    // A local file is already durable; only mirror API responses
    if cli.file.is_some() || cli.no_persist || !config.persist_cache {
        return Ok(cache);
    }

    match config.cache_dir().and_then(FileStore::new) {
        Ok(store) => Ok(cache.with_store(store)),
        Err(e) => {
            warn!(error = %e, "Durable product cache unavailable, continuing without it");
            Ok(cache)
        }
    }
}

pub async fn run(command: Command, cache: &ProductsCache, cancel: &CancellationToken) -> Result<()> {
    let result = match command {
        Command::Categories { group, refresh, json } => {
            categories(cache, cancel, group, refresh, json).await
        }
        Command::Products {
            category,
            sort,
            filter,
            json,
        } => products(cache, cancel, &category, sort, filter, json).await,
        Command::Invalidate => {
            cache.invalidate();
            println!("Product cache cleared.");
            Ok(())
        }
        Command::Config {
            base_url,
            ttl,
            persist,
        } => {
            let path = Config::config_path()?;
            let config = update_config(&path, base_url, ttl, persist)?;
            println!("{}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    };

    match result {
        Err(e) if is_cancelled(&e) => {
            eprintln!("Cancelled.");
            Ok(())
        }
        other => other,
    }
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ApiError>()
        .is_some_and(ApiError::is_cancelled)
}

/// Apply any given settings to the config file at `path`.
///
/// Env overrides are not applied here so they never end up on disk.
/// Nothing is written when no setting is given.
fn update_config(
    path: &Path,
    base_url: Option<String>,
    ttl: Option<u64>,
    persist: Option<bool>,
) -> Result<Config> {
    let mut config = Config::load_from(path)?;
    if base_url.is_none() && ttl.is_none() && persist.is_none() {
        return Ok(config);
    }

    if let Some(url) = base_url {
        config.api_base_url = Some(url);
    }
    if let Some(secs) = ttl {
        config.cache_ttl_secs = Some(secs);
    }
    if let Some(persist) = persist {
        config.persist_cache = persist;
    }

    config.save_to(path)?;
    debug!(path = %path.display(), "Configuration saved");
    Ok(config)
}

async fn categories(
    cache: &ProductsCache,
    cancel: &CancellationToken,
    group: GroupFilter,
    refresh: bool,
    json: bool,
) -> Result<()> {
    if refresh {
        cache.invalidate();
    }

    let summaries = cache.categories(cancel).await?;
    let visible = filter_by_group(&summaries, group);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        print!("{}", output::render_categories(&visible, group));
        eprintln!("Product cache {}", cache.expiry_display());
    }
    Ok(())
}

async fn products(
    cache: &ProductsCache,
    cancel: &CancellationToken,
    category: &str,
    sort: SortType,
    filter: String,
    json: bool,
) -> Result<()> {
    let all = cache.fetch_all(cancel).await?;
    let in_category = products_in_category(&all, category);
    if in_category.is_empty() {
        anyhow::bail!("No products in category '{}'", category);
    }

    let prefs = Preferences::default().with_sort(sort).with_filter(filter);
    let visible = apply_preferences(&in_category, &prefs);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        print!("{}", output::render_products(category, &visible));
    }
    Ok(())
}
