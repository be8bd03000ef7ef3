// Metadata client module: a small blocking HTTP client that talks to the
// TMDB-shaped movie metadata API. It is intentionally small and synchronous;
// the whole program is one interactive session.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;

/// Client for the remote movie metadata provider. Holds a reqwest blocking
/// client plus the configuration it needs to build request URLs; constructed
/// once at startup from `Config`.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    image_base: String,
    language: String,
}

/// One search hit, not yet fetched in full. Ephemeral: shown during
/// disambiguation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCandidate {
    pub title: String,
    pub id: u64,
    pub year: String,
}

/// Outcome of a search that reached the provider. Zero results is a normal
/// answer ("no movie matched"), not an error, so it gets its own variant
/// instead of an Err.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<SearchCandidate>),
    NotFound,
}

/// Fully fetched, normalized movie. This is both the display shape and the
/// unit stored in the catalog file; list-valued fields stay as lists here and
/// are comma-joined only when rendered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub name: String,
    pub year: String,
    pub plot: String,
    pub poster_url: String,
    pub rating: f64,
    pub popularity: f64,
    pub genres: Vec<String>,
    pub languages: Vec<String>,
    pub production_companies: Vec<String>,
    pub production_countries: Vec<String>,
}

// Wire shapes, mirroring the provider's JSON. Kept private: the rest of the
// crate only sees SearchCandidate and MovieRecord.

#[derive(Deserialize, Debug)]
struct SearchResponse {
    results: Vec<RawCandidate>,
}

#[derive(Deserialize, Debug)]
struct RawCandidate {
    id: u64,
    title: String,
    #[serde(default)]
    release_date: String,
}

#[derive(Deserialize, Debug)]
struct RawDetails {
    title: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    popularity: f64,
    poster_path: Option<String>,
    #[serde(default)]
    genres: Vec<Named>,
    #[serde(default)]
    spoken_languages: Vec<Named>,
    #[serde(default)]
    production_companies: Vec<Named>,
    #[serde(default)]
    production_countries: Vec<Named>,
}

#[derive(Deserialize, Debug)]
struct Named {
    name: String,
}

impl TmdbClient {
    /// Build a client from the given configuration. The request timeout keeps
    /// a hung connection from blocking the session forever.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(TmdbClient {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            image_base: config.image_base.clone(),
            language: config.language.clone(),
        })
    }

    /// Search the provider for movies matching `query`. The caller is
    /// expected to pass a non-empty query; the UI prompts for it.
    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        let url = format!("{}/search/movie", self.base_url);
        let res = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("language", self.language.as_str()),
            ])
            .send()
            .context("Failed to send search request")?;
        if !res.status().is_success() {
            anyhow::bail!("Search failed: {}", res.status());
        }
        let body: SearchResponse = res.json().context("Parsing search response json")?;
        Ok(candidates_from(body))
    }

    /// Fetch the full detail record for one movie id.
    pub fn fetch_details(&self, id: u64) -> Result<MovieRecord> {
        let url = format!("{}/movie/{}", self.base_url, id);
        let res = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("append_to_response", "videos,images"),
                ("language", self.language.as_str()),
            ])
            .send()
            .context("Failed to send detail request")?;
        if !res.status().is_success() {
            anyhow::bail!("Detail fetch failed: {}", res.status());
        }
        let raw: RawDetails = res.json().context("Parsing movie detail json")?;
        Ok(record_from(raw, &self.image_base))
    }
}

fn candidates_from(body: SearchResponse) -> SearchOutcome {
    if body.results.is_empty() {
        return SearchOutcome::NotFound;
    }
    let candidates = body
        .results
        .into_iter()
        .map(|raw| SearchCandidate {
            title: raw.title,
            id: raw.id,
            year: year_of(&raw.release_date),
        })
        .collect();
    SearchOutcome::Found(candidates)
}

fn record_from(raw: RawDetails, image_base: &str) -> MovieRecord {
    let poster_url = raw
        .poster_path
        .map(|path| format!("{}{}", image_base, path))
        .unwrap_or_default();
    MovieRecord {
        name: raw.title,
        year: year_of(&raw.release_date),
        plot: raw.overview,
        poster_url,
        rating: raw.vote_average,
        popularity: raw.popularity,
        genres: names(raw.genres),
        languages: names(raw.spoken_languages),
        production_companies: names(raw.production_companies),
        production_countries: names(raw.production_countries),
    }
}

// The provider's release_date is a "YYYY-MM-DD" string; the year is taken as
// a plain four-character slice, not a date parse. An empty date yields an
// empty year, a malformed one yields whatever its first characters are.
fn year_of(release_date: &str) -> String {
    release_date.chars().take(4).collect()
}

fn names(items: Vec<Named>) -> Vec<String> {
    items.into_iter().map(|n| n.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details_value() -> serde_json::Value {
        json!({
            "title": "Inception",
            "release_date": "2010-07-15",
            "overview": "A thief who steals corporate secrets.",
            "vote_average": 8.4,
            "popularity": 83.6,
            "poster_path": "/inception.jpg",
            "genres": [{"name": "Action"}, {"name": "Science Fiction"}],
            "spoken_languages": [{"name": "English"}, {"name": "Japanese"}],
            "production_companies": [{"name": "Legendary Pictures"}],
            "production_countries": [{"name": "United States of America"}]
        })
    }

    #[test]
    fn maps_detail_payload_to_record() {
        let raw: RawDetails = serde_json::from_value(details_value()).unwrap();
        let record = record_from(raw, "https://image.tmdb.org/t/p/original");
        assert_eq!(record.name, "Inception");
        assert_eq!(record.year, "2010");
        assert_eq!(record.rating, 8.4);
        assert_eq!(
            record.poster_url,
            "https://image.tmdb.org/t/p/original/inception.jpg"
        );
        assert_eq!(record.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(record.languages, vec!["English", "Japanese"]);
    }

    #[test]
    fn missing_poster_path_yields_empty_url() {
        let mut value = details_value();
        value.as_object_mut().unwrap().remove("poster_path");
        let raw: RawDetails = serde_json::from_value(value).unwrap();
        let record = record_from(raw, "https://image.tmdb.org/t/p/original");
        assert_eq!(record.poster_url, "");
    }

    #[test]
    fn year_is_a_textual_slice() {
        assert_eq!(year_of("2010-07-15"), "2010");
        assert_eq!(year_of(""), "");
        assert_eq!(year_of("20"), "20");
        assert_eq!(year_of("soon"), "soon");
    }

    #[test]
    fn empty_results_map_to_not_found() {
        let body: SearchResponse = serde_json::from_value(json!({"results": []})).unwrap();
        assert_eq!(candidates_from(body), SearchOutcome::NotFound);
    }

    #[test]
    fn search_results_become_candidates_in_order() {
        let body: SearchResponse = serde_json::from_value(json!({
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-15"},
                {"id": 64956, "title": "Inception: The Cobol Job", "release_date": "2010-12-07"},
                {"id": 12345, "title": "Unreleased", "release_date": ""}
            ]
        }))
        .unwrap();
        match candidates_from(body) {
            SearchOutcome::Found(candidates) => {
                assert_eq!(candidates.len(), 3);
                assert_eq!(candidates[0].id, 27205);
                assert_eq!(candidates[0].year, "2010");
                assert_eq!(candidates[2].year, "");
            }
            SearchOutcome::NotFound => panic!("expected candidates"),
        }
    }

    #[test]
    fn record_serializes_with_camel_case_field_names() {
        let raw: RawDetails = serde_json::from_value(details_value()).unwrap();
        let record = record_from(raw, "");
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("posterUrl"));
        assert!(object.contains_key("productionCompanies"));
        assert!(object.contains_key("productionCountries"));
    }
}
