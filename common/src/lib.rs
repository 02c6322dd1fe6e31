//! MBTI Atlas Common Library
//!
//! 국가별 MBTI 비율 테이블과 그 위의 파생 계산:
//! 성향 축 집계, 순위, 대륙별 평균, 인구 추정, 추천 직업

pub mod types;
pub mod table;
pub mod axis;
pub mod ranking;
pub mod continent;
pub mod career;
pub mod population;
pub mod profile;
pub mod marker;
pub mod landmarks;
pub mod format;
pub mod export;
pub mod error;

pub use types::{Axis, MbtiType, Pole};
pub use table::{CountryMbtiRow, MbtiTable, RowSumWarning};
pub use axis::{aggregate, aggregate_row, AxisAggregate};
pub use ranking::{country_rank, find_rank, rank_countries, rank_descending, rank_types, top_countries, type_rank, CountryShare, TypeShare};
pub use continent::{continent_averages, group_means, pole_leaning, Continent, ContinentAverage, ContinentMap, PoleLeaning};
pub use career::{recommend, CareerSuggestion};
pub use profile::{BarColor, CountryProfile};
pub use marker::{Coordinates, MapMarker, MapView, MarkerColor};
pub use export::{Cell, ReportSheet};
pub use error::{Error, Result};
