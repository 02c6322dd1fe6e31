//! 기준 국가 안에서 내 MBTI의 순위와 추천 직업

use super::PageReport;
use crate::error::Result;
use mbti_atlas_common::format::{percent, thousands};
use mbti_atlas_common::{population, recommend, type_rank, CareerSuggestion, Cell, MbtiTable, MbtiType, ReportSheet};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MyMbtiReport {
    pub anchor_country: String,
    pub mbti: MbtiType,
    /// 1부터 시작
    pub rank: usize,
    pub proportion: f64,
    pub total_population: u64,
    pub population_estimate: f64,
    pub careers: Vec<CareerSuggestion>,
}

impl MyMbtiReport {
    /// 기준 국가가 없으면 `NotFound` 에러 (호출 측에서 경고 후 페이지 중단)
    pub fn build(table: &MbtiTable, mbti: MbtiType, anchor_country: &str, total_population: u64) -> Result<Self> {
        let row = table
            .row(anchor_country)
            .ok_or_else(|| mbti_atlas_common::Error::NotFound(anchor_country.to_string()))?;

        let rank = type_rank(row, table.types(), mbti)?;
        let proportion = row.get(mbti);

        Ok(Self {
            anchor_country: row.country.clone(),
            mbti,
            rank,
            proportion,
            total_population,
            population_estimate: population::estimate(proportion, total_population),
            careers: recommend(mbti).to_vec(),
        })
    }
}

impl PageReport for MyMbtiReport {
    fn title(&self) -> String {
        format!("📊 {} 내 {} 분포 결과", self.anchor_country, self.mbti)
    }

    fn sheets(&self) -> Vec<ReportSheet> {
        let mut sheet = ReportSheet::new("추천 직업", &["직업", "이유"]);
        for career in &self.careers {
            sheet.push_row(vec![Cell::text(career.job), Cell::text(career.rationale)]);
        }
        vec![sheet]
    }

    fn summary(&self) -> Vec<String> {
        vec![
            format!(
                "{} 유형은 {}에서 {}번째로 흔한 MBTI입니다.",
                self.mbti, self.anchor_country, self.rank
            ),
            format!(
                "인구 약 {}명 기준으로 보면 약 {}명 ({}) 정도가 {} 유형이에요.",
                thousands(self.total_population as f64),
                thousands(self.population_estimate),
                percent(self.proportion),
                self.mbti
            ),
        ]
    }
}
