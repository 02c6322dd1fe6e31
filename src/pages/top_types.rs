//! 유형별 비율 Top N 국가와 지도 마커

use super::PageReport;
use crate::geocode::{GeoLookupAdapter, Geocoder};
use mbti_atlas_common::format::percent;
use mbti_atlas_common::{
    top_countries, Cell, Coordinates, CountryShare, MapMarker, MapView, MarkerColor, MbtiTable,
    MbtiType, ReportSheet,
};
use serde::Serialize;

/// 세계 지도 기본 중심
pub const WORLD_CENTER: Coordinates = Coordinates::new(20.0, 0.0);

/// 좌표를 얻지 못해 지도에서 빠진 국가
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedMarker {
    pub country: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopCountriesReport {
    pub mbti: MbtiType,
    pub countries: Vec<CountryShare>,
    pub map: MapView,
    pub skipped: Vec<SkippedMarker>,
}

impl TopCountriesReport {
    /// 표 데이터만 만든다 (마커는 `locate` 이후)
    pub fn build(table: &MbtiTable, mbti: MbtiType, top_n: usize) -> Self {
        Self {
            mbti,
            countries: top_countries(table, mbti, top_n),
            map: MapView {
                center: WORLD_CENTER,
                zoom: 2,
                markers: Vec::new(),
            },
            skipped: Vec::new(),
        }
    }

    /// 국가별 좌표를 조회해 마커를 채운다. 실패한 국가는 건너뛴다
    pub async fn locate<G: Geocoder>(&mut self, adapter: &mut GeoLookupAdapter<G>, show_progress: bool) {
        let names: Vec<String> = self.countries.iter().map(|c| c.country.clone()).collect();
        let outcomes = adapter.lookup_all(&names, show_progress).await;

        self.map.markers.clear();
        self.skipped.clear();
        for (share, outcome) in self.countries.iter().zip(outcomes) {
            match outcome.result {
                Ok(coordinates) => self.map.markers.push(country_marker(share, coordinates)),
                Err(e) => self.skipped.push(SkippedMarker {
                    country: share.country.clone(),
                    reason: e.to_string(),
                }),
            }
        }
    }
}

pub fn country_marker(share: &CountryShare, coordinates: Coordinates) -> MapMarker {
    MapMarker {
        name: share.country.clone(),
        coordinates,
        tooltip: share.country.clone(),
        popup: format!("{}\n{} 비율: {}", share.country, share.mbti, percent(share.value)),
        color: MarkerColor::Blue,
    }
}

impl PageReport for TopCountriesReport {
    fn title(&self) -> String {
        format!("🌐 {} 유형 비율이 높은 Top{} 국가", self.mbti, self.countries.len())
    }

    fn sheets(&self) -> Vec<ReportSheet> {
        let mut sheet = ReportSheet::new(format!("{} Top{}", self.mbti, self.countries.len()), &["순위", "Country", self.mbti.code()]);
        for (i, share) in self.countries.iter().enumerate() {
            sheet.push_row(vec![
                Cell::Number((i + 1) as f64),
                Cell::text(share.country.as_str()),
                Cell::Percent(share.value),
            ]);
        }
        vec![sheet]
    }

    fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.map.markers.is_empty() {
            lines.push(format!("📍 지도 마커 {}개", self.map.markers.len()));
        }
        for skipped in &self.skipped {
            lines.push(format!("⚠ {} 위치를 찾지 못해 지도에서 제외: {}", skipped.country, skipped.reason));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{GeocodeCache, LookupError};
    use mbti_atlas_common::CountryMbtiRow;
    use std::time::Duration;

    struct FixedGeocoder;

    impl Geocoder for FixedGeocoder {
        async fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
            match query {
                "Japan" => Ok(Coordinates::new(36.0, 138.0)),
                "Chile" => Ok(Coordinates::new(-31.0, -71.0)),
                _ => Err(LookupError::NotFound(query.to_string())),
            }
        }
    }

    fn table() -> MbtiTable {
        MbtiTable::from_rows(vec![
            CountryMbtiRow::from_pairs("Japan", &[(MbtiType::Intj, 0.05)]),
            CountryMbtiRow::from_pairs("Chile", &[(MbtiType::Intj, 0.09)]),
            CountryMbtiRow::from_pairs("Atlantis", &[(MbtiType::Intj, 0.07)]),
            CountryMbtiRow::from_pairs("Egypt", &[(MbtiType::Intj, 0.01)]),
        ])
    }

    #[test]
    fn test_build_top_n() {
        let report = TopCountriesReport::build(&table(), MbtiType::Intj, 3);
        let names: Vec<&str> = report.countries.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Chile", "Atlantis", "Japan"]);
        assert!(report.map.markers.is_empty());

        let sheet = &report.sheets()[0];
        assert_eq!(sheet.headers, vec!["순위", "Country", "INTJ"]);
        assert_eq!(sheet.rows[0][2], Cell::Percent(0.09));
    }

    #[tokio::test]
    async fn test_locate_skips_unknown_country() {
        let mut report = TopCountriesReport::build(&table(), MbtiType::Intj, 3);
        let mut adapter = GeoLookupAdapter::new(FixedGeocoder, GeocodeCache::default(), Duration::from_secs(1));

        report.locate(&mut adapter, false).await;

        assert_eq!(report.map.markers.len(), 2);
        assert_eq!(report.map.markers[0].name, "Chile");
        assert_eq!(report.map.markers[0].popup, "Chile\nINTJ 비율: 9.00%");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].country, "Atlantis");
        assert!(report.summary().iter().any(|l| l.contains("Atlantis")));
    }
}
