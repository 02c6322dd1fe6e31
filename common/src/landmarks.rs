//! 외국인이 많이 찾는 서울 관광지 Top 10

use crate::marker::{Coordinates, MapMarker, MapView, MarkerColor};
use serde::Serialize;

/// 서울 중심 좌표
pub const SEOUL_CENTER: Coordinates = Coordinates::new(37.5665, 126.9780);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Landmark {
    pub name: &'static str,
    pub coordinates: Coordinates,
    pub description: &'static str,
}

const fn landmark(name: &'static str, lat: f64, lon: f64, description: &'static str) -> Landmark {
    Landmark {
        name,
        coordinates: Coordinates::new(lat, lon),
        description,
    }
}

pub const SEOUL_LANDMARKS: [Landmark; 10] = [
    landmark("경복궁", 37.5796, 126.9770, "조선의 법궁으로 역사와 전통의 중심지"),
    landmark("명동", 37.5636, 126.9827, "쇼핑과 음식, 패션의 거리"),
    landmark("남산타워(N서울타워)", 37.5512, 126.9882, "서울의 랜드마크, 야경 명소"),
    landmark("홍대", 37.5563, 126.9220, "젊음과 예술, 자유분방한 거리"),
    landmark("인사동", 37.5740, 126.9849, "전통 문화와 예술의 거리"),
    landmark("북촌 한옥마을", 37.5826, 126.9830, "전통 한옥과 골목길의 매력"),
    landmark("롯데월드타워", 37.5131, 127.1028, "123층 초고층 랜드마크"),
    landmark("동대문 디자인 플라자(DDP)", 37.5663, 127.0094, "현대적인 건축물과 전시 공간"),
    landmark("청계천", 37.5700, 126.9784, "도심 속 자연 휴식 공간"),
    landmark("이태원", 37.5348, 126.9946, "다문화 거리, 글로벌 레스토랑과 바"),
];

impl Landmark {
    pub fn to_marker(&self) -> MapMarker {
        MapMarker {
            name: self.name.to_string(),
            coordinates: self.coordinates,
            tooltip: self.name.to_string(),
            popup: format!("{}\n{}", self.name, self.description),
            color: MarkerColor::Blue,
        }
    }
}

/// 관광지 지도 (줌 12)
pub fn seoul_landmark_map() -> MapView {
    MapView {
        center: SEOUL_CENTER,
        zoom: 12,
        markers: SEOUL_LANDMARKS.iter().map(Landmark::to_marker).collect(),
    }
}
