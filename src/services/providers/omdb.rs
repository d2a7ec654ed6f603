/// OMDb metadata provider
///
/// Single-request lookup by title/year with the "full plot" flag. OMDb reports
/// a miss as an HTTP 200 whose body carries `Response: "False"` and an `Error`
/// message, so both layers are checked here.
use crate::{
    error::{AppError, AppResult},
    models::MovieMetadata,
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;

const PLOT_DETAIL: &str = "full";
/// OMDb's sentinel for "no poster available"
const NO_POSTER: &str = "N/A";

/// Raw OMDb lookup response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    plot: Option<String>,
    #[serde(default)]
    poster: Option<String>,
    response: String,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn convert(raw: OmdbResponse) -> AppResult<MovieMetadata> {
        if raw.response.eq_ignore_ascii_case("false") {
            return Err(AppError::NotFound(
                raw.error.unwrap_or_else(|| "Movie not found".to_string()),
            ));
        }

        let title = raw
            .title
            .ok_or_else(|| AppError::ExternalApi("OMDb response missing Title".to_string()))?;
        let year = raw
            .year
            .ok_or_else(|| AppError::ExternalApi("OMDb response missing Year".to_string()))?;
        let plot = raw.plot.unwrap_or_default();
        let poster = raw.poster.filter(|p| p != NO_POSTER);

        Ok(MovieMetadata {
            title,
            year,
            plot,
            poster,
        })
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn fetch(&self, title: &str, year: &str) -> AppResult<MovieMetadata> {
        let mut query = vec![
            ("apikey", self.api_key.as_str()),
            ("t", title),
            ("plot", PLOT_DETAIL),
        ];
        if !year.trim().is_empty() {
            query.push(("y", year));
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb returned status {}: {}",
                status, body
            )));
        }

        let raw: OmdbResponse = response.json().await?;
        let metadata = Self::convert(raw)?;

        tracing::info!(
            title = %metadata.title,
            year = %metadata.year,
            provider = "omdb",
            "Metadata lookup completed"
        );

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_found_response() {
        let raw: OmdbResponse = serde_json::from_str(
            r#"{
                "Title": "Inception",
                "Year": "2010",
                "Plot": "A thief who steals corporate secrets.",
                "Poster": "https://img.omdbapi.com/inception.jpg",
                "Response": "True"
            }"#,
        )
        .unwrap();

        let metadata = OmdbProvider::convert(raw).unwrap();
        assert_eq!(metadata.title, "Inception");
        assert_eq!(metadata.year, "2010");
        assert_eq!(metadata.plot, "A thief who steals corporate secrets.");
        assert_eq!(
            metadata.poster.as_deref(),
            Some("https://img.omdbapi.com/inception.jpg")
        );
    }

    #[test]
    fn test_convert_poster_sentinel_maps_to_none() {
        let raw: OmdbResponse = serde_json::from_str(
            r#"{
                "Title": "Obscure Film",
                "Year": "1971",
                "Plot": "Lost to time.",
                "Poster": "N/A",
                "Response": "True"
            }"#,
        )
        .unwrap();

        let metadata = OmdbProvider::convert(raw).unwrap();
        assert!(metadata.poster.is_none());
    }

    #[test]
    fn test_convert_miss_carries_provider_message() {
        let raw: OmdbResponse = serde_json::from_str(
            r#"{"Response": "False", "Error": "Movie not found!"}"#,
        )
        .unwrap();

        match OmdbProvider::convert(raw) {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Movie not found!"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_convert_miss_without_message() {
        let raw: OmdbResponse =
            serde_json::from_str(r#"{"Response": "False"}"#).unwrap();

        match OmdbProvider::convert(raw) {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Movie not found"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }
}
