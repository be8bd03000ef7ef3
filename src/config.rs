// Configuration module: collects everything the application needs from the
// environment once, at startup, so the rest of the code receives an explicit
// `Config` value instead of reading ambient state at call time.

use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";
const DEFAULT_LANGUAGE: &str = "en-US";

/// Runtime configuration for the CLI. Built from the environment by
/// `Config::from_env` and passed into `TmdbClient` and `Catalog` at
/// construction time.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub image_base: String,
    pub language: String,
    pub catalog_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment. Only `TMDB_API_KEY` is
    /// required; everything else falls back to a sensible default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TMDB_API_KEY")
            .context("TMDB_API_KEY is not set; create a key at themoviedb.org and export it")?;
        let base_url =
            std::env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let image_base =
            std::env::var("TMDB_IMAGE_BASE").unwrap_or_else(|_| DEFAULT_IMAGE_BASE.into());
        let language =
            std::env::var("TMDB_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.into());
        let catalog_path = match std::env::var_os("MOVIELOG_CATALOG") {
            Some(path) => PathBuf::from(path),
            None => default_catalog_path(),
        };
        Ok(Config {
            api_key,
            base_url,
            image_base,
            language,
            catalog_path,
        })
    }
}

/// Default location of the saved-movies file: the platform's local data
/// directory, falling back to the working directory when it is unknown.
fn default_catalog_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movielog")
        .join("movie_list.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_path_points_at_movie_list() {
        let path = default_catalog_path();
        assert!(path.ends_with("movielog/movie_list.json"));
    }
}
