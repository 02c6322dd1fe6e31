//! 국가명 → 좌표 변환 (best-effort)
//!
//! - 조회마다 타임아웃을 건다
//! - 실패는 국가별 `Result`로 돌려주고 나머지 국가는 계속 처리한다
//! - 결과는 캐시에 남겨 같은 국가를 다시 조회하지 않는다

pub mod cache;
mod nominatim;

pub use cache::GeocodeCache;
pub use nominatim::{parse_search_response, NominatimGeocoder};

use indicatif::{ProgressBar, ProgressStyle};
use mbti_atlas_common::Coordinates;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("위치를 찾을 수 없습니다: {0}")]
    NotFound(String),

    #[error("{query} 조회가 {seconds}초 안에 끝나지 않았습니다")]
    Timeout { query: String, seconds: u64 },

    #[error("요청 실패: {0}")]
    Request(String),

    #[error("응답 해석 실패: {0}")]
    Decode(String),
}

/// 외부 지오코딩 서비스
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinates, LookupError>;
}

/// 국가 하나의 조회 결과
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeOutcome {
    pub country: String,
    pub result: Result<Coordinates, LookupError>,
}

/// 캐시와 타임아웃을 붙인 지오코더
pub struct GeoLookupAdapter<G> {
    geocoder: G,
    cache: GeocodeCache,
    timeout: Duration,
    dirty: bool,
}

impl<G: Geocoder> GeoLookupAdapter<G> {
    pub fn new(geocoder: G, cache: GeocodeCache, timeout: Duration) -> Self {
        Self {
            geocoder,
            cache,
            timeout,
            dirty: false,
        }
    }

    pub fn cache(&self) -> &GeocodeCache {
        &self.cache
    }

    /// 새로 조회한 결과가 캐시에 추가되었는지
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 국가 하나 조회
    ///
    /// "찾을 수 없음"은 캐시하고, 타임아웃/통신 오류는 캐시하지 않는다.
    pub async fn lookup(&mut self, country: &str) -> Result<Coordinates, LookupError> {
        if let Some(entry) = self.cache.get(country) {
            tracing::debug!(country, "지오코딩 캐시 적중");
            return entry
                .coordinates
                .ok_or_else(|| LookupError::NotFound(country.to_string()));
        }

        let result = match tokio::time::timeout(self.timeout, self.geocoder.geocode(country)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                query: country.to_string(),
                seconds: self.timeout.as_secs(),
            }),
        };

        match &result {
            Ok(coords) => {
                self.cache.insert(country.to_string(), Some(*coords));
                self.dirty = true;
            }
            Err(LookupError::NotFound(_)) => {
                self.cache.insert(country.to_string(), None);
                self.dirty = true;
            }
            Err(_) => {}
        }

        result
    }

    /// 여러 국가를 순서대로 조회. 한 국가의 실패가 나머지를 멈추지 않는다
    pub async fn lookup_all(&mut self, countries: &[String], show_progress: bool) -> Vec<GeocodeOutcome> {
        let pb = if show_progress {
            let pb = ProgressBar::new(countries.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut outcomes = Vec::with_capacity(countries.len());
        for country in countries {
            pb.set_message(country.clone());
            let result = self.lookup(country).await;
            if let Err(e) = &result {
                tracing::warn!(country = %country, error = %e, "지오코딩 실패, 마커를 건너뜁니다");
            }
            outcomes.push(GeocodeOutcome {
                country: country.clone(),
                result,
            });
            pb.inc(1);
        }
        pb.finish_and_clear();

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// 응답을 미리 정해 둔 지오코더
    struct StubGeocoder {
        answers: HashMap<&'static str, Result<Coordinates, LookupError>>,
        calls: RefCell<Vec<String>>,
        delay: Option<Duration>,
    }

    impl StubGeocoder {
        fn new() -> Self {
            let mut answers = HashMap::new();
            answers.insert("Japan", Ok(Coordinates::new(36.0, 138.0)));
            answers.insert("Chile", Ok(Coordinates::new(-31.0, -71.0)));
            answers.insert("Atlantis", Err(LookupError::NotFound("Atlantis".into())));
            answers.insert("Flaky", Err(LookupError::Request("connection reset".into())));
            Self {
                answers,
                calls: RefCell::new(Vec::new()),
                delay: None,
            }
        }
    }

    impl Geocoder for StubGeocoder {
        async fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
            self.calls.borrow_mut().push(query.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.answers
                .get(query)
                .cloned()
                .unwrap_or_else(|| Err(LookupError::NotFound(query.to_string())))
        }
    }

    fn adapter(stub: StubGeocoder) -> GeoLookupAdapter<StubGeocoder> {
        GeoLookupAdapter::new(stub, GeocodeCache::default(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_sweep() {
        let mut adapter = adapter(StubGeocoder::new());
        let countries: Vec<String> = ["Japan", "Flaky", "Atlantis", "Chile"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let outcomes = adapter.lookup_all(&countries, false).await;
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].result.is_ok());
        assert!(matches!(outcomes[1].result, Err(LookupError::Request(_))));
        assert!(matches!(outcomes[2].result, Err(LookupError::NotFound(_))));
        assert_eq!(outcomes[3].result, Ok(Coordinates::new(-31.0, -71.0)));
    }

    #[tokio::test]
    async fn test_results_are_cached() {
        let mut adapter = adapter(StubGeocoder::new());
        adapter.lookup("Japan").await.unwrap();
        adapter.lookup("Japan").await.unwrap();
        let _ = adapter.lookup("Atlantis").await;
        let _ = adapter.lookup("Atlantis").await;
        let _ = adapter.lookup("Flaky").await;
        let _ = adapter.lookup("Flaky").await;

        let calls = adapter.geocoder.calls.borrow().clone();
        assert_eq!(calls, vec!["Japan", "Atlantis", "Flaky", "Flaky"]);
        assert_eq!(adapter.cache().len(), 2);
        assert_eq!(adapter.cache().resolved_count(), 1);
        assert!(adapter.is_dirty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout() {
        let mut stub = StubGeocoder::new();
        stub.delay = Some(Duration::from_secs(60));
        let mut adapter = GeoLookupAdapter::new(stub, GeocodeCache::default(), Duration::from_secs(2));

        let err = adapter.lookup("Japan").await.unwrap_err();
        assert_eq!(
            err,
            LookupError::Timeout {
                query: "Japan".into(),
                seconds: 2
            }
        );
        assert!(adapter.cache().is_empty());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let mut cache = GeocodeCache::default();
        cache.insert("Japan".into(), Some(Coordinates::new(1.0, 2.0)));
        let mut adapter = GeoLookupAdapter::new(StubGeocoder::new(), cache, Duration::from_secs(5));

        assert_eq!(adapter.lookup("Japan").await, Ok(Coordinates::new(1.0, 2.0)));
        assert!(adapter.geocoder.calls.borrow().is_empty());
        assert!(!adapter.is_dirty());
    }
}
