use super::PageReport;
use mbti_atlas_common::landmarks::seoul_landmark_map;
use mbti_atlas_common::{Cell, MapView, ReportSheet};
use serde::Serialize;

/// 서울 주요 관광지 지도
#[derive(Debug, Clone, Serialize)]
pub struct LandmarkReport {
    pub map: MapView,
}

impl LandmarkReport {
    pub fn build() -> Self {
        Self {
            map: seoul_landmark_map(),
        }
    }
}

impl PageReport for LandmarkReport {
    fn title(&self) -> String {
        "🗺️ 외국인들이 좋아하는 서울 주요 관광지 Top 10".to_string()
    }

    fn sheets(&self) -> Vec<ReportSheet> {
        let mut sheet = ReportSheet::new("관광지", &["이름", "위도", "경도", "설명"]);
        for marker in &self.map.markers {
            let description = marker.popup.lines().nth(1).unwrap_or_default();
            sheet.push_row(vec![
                Cell::text(marker.name.as_str()),
                Cell::text(format!("{:.4}", marker.coordinates.latitude)),
                Cell::text(format!("{:.4}", marker.coordinates.longitude)),
                Cell::text(description),
            ]);
        }
        vec![sheet]
    }
}
