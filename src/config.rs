use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::interactive::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_TRENDING_LIMIT};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Connection settings for the movie catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendingBackend {
    Memory,
    Appwrite(AppwriteConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingConfig {
    pub backend: TrendingBackend,
    pub limit: usize,
}

/// Everything the controller and its collaborators need, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub trending: TrendingConfig,
    pub debounce_ms: u64,
    pub log_file: PathBuf,
    pub log_json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Memory,
    Appwrite,
}

/// Connection and tuning options shared by every mode
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// TMDB API read access token
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Catalog base URL
    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_CATALOG_BASE_URL)]
    pub base_url: String,

    /// Quiet period before a typed query is searched, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Number of trending searches to show
    #[arg(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
    pub trending_limit: usize,

    /// Where search counts are kept
    #[arg(long, value_enum, env = "MOVIE_FINDER_TRENDING_STORE", default_value = "memory")]
    pub trending_store: StoreKind,

    /// Appwrite API endpoint (e.g. https://cloud.appwrite.io/v1)
    #[arg(long, env = "APPWRITE_ENDPOINT")]
    pub appwrite_endpoint: Option<String>,

    #[arg(long, env = "APPWRITE_PROJECT_ID")]
    pub appwrite_project: Option<String>,

    #[arg(long, env = "APPWRITE_DATABASE_ID")]
    pub appwrite_database: Option<String>,

    #[arg(long, env = "APPWRITE_COLLECTION_ID")]
    pub appwrite_collection: Option<String>,

    /// Server API key, only needed when the collection is not publicly writable
    #[arg(long, env = "APPWRITE_API_KEY", hide_env_values = true)]
    pub appwrite_key: Option<String>,

    /// Log file used while the terminal UI is running
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Emit log records as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_args(args: ConfigArgs) -> Result<Self> {
        let api_key = args.api_key.trim().to_string();
        if api_key.is_empty() {
            bail!("TMDB API key is empty (set --api-key or TMDB_API_KEY)");
        }

        let base_url = args.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("catalog base URL must start with http:// or https://, got {base_url:?}");
        }

        if args.debounce_ms == 0 {
            bail!("--debounce-ms must be greater than zero");
        }
        if args.trending_limit == 0 {
            bail!("--trending-limit must be greater than zero");
        }

        let backend = match args.trending_store {
            StoreKind::Memory => TrendingBackend::Memory,
            StoreKind::Appwrite => TrendingBackend::Appwrite(AppwriteConfig {
                endpoint: required(args.appwrite_endpoint, "--appwrite-endpoint")?,
                project_id: required(args.appwrite_project, "--appwrite-project")?,
                database_id: required(args.appwrite_database, "--appwrite-database")?,
                collection_id: required(args.appwrite_collection, "--appwrite-collection")?,
                api_key: args.appwrite_key.filter(|k| !k.trim().is_empty()),
            }),
        };

        Ok(Self {
            catalog: CatalogConfig { base_url, api_key },
            trending: TrendingConfig {
                backend,
                limit: args.trending_limit,
            },
            debounce_ms: args.debounce_ms,
            log_file: args.log_file.unwrap_or_else(default_log_file),
            log_json: args.log_json,
        })
    }
}

fn required(value: Option<String>, flag: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => bail!("{flag} is required when --trending-store=appwrite"),
    }
}

pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("movie-finder").join("movie-finder.log"))
        .unwrap_or_else(|| PathBuf::from("movie-finder.log"))
}
