use anyhow::Context as _;
use serde::Deserialize;

use crate::domain::repository::MovieLookupPort;
use crate::domain::types::MovieAttributes;
use crate::error::CatalogServiceError;

/// HTTP client implementing `MovieLookupPort` against the OMDb API.
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

/// OMDb title response. Every field arrives as a string; absent values are
/// reported as "N/A".
#[derive(Deserialize)]
struct OmdbTitle {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Director", default)]
    director: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
}

/// OMDb years may be a range for series ("2001–2003"); keep the start year.
fn parse_year(raw: &str) -> i32 {
    raw.chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

/// "N/A" and malformed ratings collapse to 0.0.
fn parse_rating(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

impl MovieLookupPort for OmdbClient {
    async fn lookup(
        &self,
        title: &str,
    ) -> Result<Option<MovieAttributes>, CatalogServiceError> {
        let resp = self
            .http
            .get(format!("{}/", self.base_url))
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await
            .context("request OMDb")?;
        if !resp.status().is_success() {
            return Ok(None);
        }
        let body: OmdbTitle = resp.json().await.context("decode OMDb response")?;
        if body.response != "True" {
            return Ok(None);
        }
        Ok(Some(MovieAttributes {
            name: body.title,
            director: body.director,
            year: parse_year(&body.year),
            poster: body.poster,
            rating: parse_rating(&body.imdb_rating),
        }))
    }
}
