//! Nominatim (OpenStreetMap) 검색 API 클라이언트

use super::{Geocoder, LookupError};
use mbti_atlas_common::Coordinates;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

pub struct NominatimGeocoder {
    client: reqwest::Client,
    url: String,
}

impl NominatimGeocoder {
    pub fn new(url: impl Into<String>, user_agent: &str) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Request(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        parse_search_response(&body, query)
    }
}

/// 검색 응답(JSON 배열)에서 첫 결과의 좌표를 꺼낸다
pub fn parse_search_response(body: &str, query: &str) -> Result<Coordinates, LookupError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;

    let hit = hits
        .first()
        .ok_or_else(|| LookupError::NotFound(query.to_string()))?;

    let latitude = hit
        .lat
        .parse::<f64>()
        .map_err(|_| LookupError::Decode(format!("lat: {}", hit.lat)))?;
    let longitude = hit
        .lon
        .parse::<f64>()
        .map_err(|_| LookupError::Decode(format!("lon: {}", hit.lon)))?;

    Ok(Coordinates::new(latitude, longitude))
}
