//! 지도 마커 데이터
//!
//! 렌더링은 외부 지도 레이어가 담당하고, 여기서는 좌표와 라벨만 만든다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    #[default]
    Blue,
}

/// 지도에 찍을 마커 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub name: String,
    pub coordinates: Coordinates,
    /// 마우스를 올렸을 때 보이는 짧은 라벨
    pub tooltip: String,
    /// 클릭 시 표시되는 본문 (줄바꿈 구분)
    pub popup: String,
    pub color: MarkerColor,
}

/// 지도 한 장 (중심, 줌, 마커)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}
