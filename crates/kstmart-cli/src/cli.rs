use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kstmart_core::models::GroupFilter;
use kstmart_core::state::SortType;

#[derive(Debug, Parser)]
#[command(name = "kstmart", version, about = "Browse the KST Mart catalog from the terminal")]
pub struct Cli {
    /// Read products from a local JSON document instead of the API
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Catalog base URL (overrides config and KSTMART_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Do not read or write the on-disk product cache
    #[arg(long, global = true)]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List categories with item counts and stock
    Categories {
        /// Only show one group: all, electronics, home, clothing, food, other
        #[arg(long, default_value = "all")]
        group: GroupFilter,

        /// Drop the cached product list before fetching
        #[arg(long)]
        refresh: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the products in one category
    Products {
        category: String,

        /// Sort order: price, name, rating
        #[arg(long, default_value = "price")]
        sort: SortType,

        /// Only show products whose title contains this text
        #[arg(long, default_value = "")]
        filter: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Clear the cached product list
    Invalidate,

    /// Show or change the saved configuration
    Config {
        /// Catalog base URL to save
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Product cache lifetime in seconds
        #[arg(long, value_name = "SECS")]
        ttl: Option<u64>,

        /// Whether to keep fetched products on disk between runs
        #[arg(long, value_name = "BOOL")]
        persist: Option<bool>,
    },
}
