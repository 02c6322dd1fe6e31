//! 국가별 MBTI 분포 막대그래프 데이터
//!
//! 최댓값 막대는 빨간색, 나머지는 값에 비례한 파란색 투명도.

use crate::format;
use crate::ranking::rank_types;
use crate::table::MbtiTable;
use crate::types::MbtiType;
use crate::error::{Error, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BarColor {
    /// 최댓값
    Highlight,
    /// rgba(0, 100, 255, alpha)
    Scaled { alpha: f64 },
}

impl BarColor {
    pub fn for_value(value: f64, max: f64) -> Self {
        if value == max {
            return BarColor::Highlight;
        }
        let ratio = if max > 0.0 { value / max } else { 0.0 };
        BarColor::Scaled {
            alpha: 0.4 + 0.6 * ratio,
        }
    }

    /// 차트 라이브러리에 넘길 CSS 색 문자열
    pub fn css(&self) -> String {
        match self {
            BarColor::Highlight => "red".to_string(),
            BarColor::Scaled { alpha } => format!("rgba(0, 100, 255, {})", alpha),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileBar {
    pub mbti: MbtiType,
    pub value: f64,
    /// "12.34%"
    pub label: String,
    pub color: BarColor,
}

/// 한 국가의 유형 분포 (내림차순)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryProfile {
    pub country: String,
    pub bars: Vec<ProfileBar>,
}

impl CountryProfile {
    /// 국가명은 완전 일치로 찾는다 (선택 목록의 값을 그대로 받는다)
    pub fn build(table: &MbtiTable, country: &str) -> Result<Self> {
        let row = table
            .row_exact(country)
            .ok_or_else(|| Error::NotFound(country.to_string()))?;

        let shares = rank_types(row, table.types());
        let max = shares.first().map(|s| s.value).unwrap_or(0.0);

        let bars = shares
            .into_iter()
            .map(|s| ProfileBar {
                mbti: s.mbti,
                value: s.value,
                label: format::percent(s.value),
                color: BarColor::for_value(s.value, max),
            })
            .collect();

        Ok(Self {
            country: row.country.clone(),
            bars,
        })
    }
}
