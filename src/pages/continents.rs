//! 성향 축 기준 대륙별 비교

use super::PageReport;
use mbti_atlas_common::format::percent;
use mbti_atlas_common::{
    aggregate, aggregate_row, continent_averages, pole_leaning, Axis, Cell, ContinentAverage,
    ContinentMap, MbtiTable, Pole, PoleLeaning, ReportSheet,
};
use serde::Serialize;

/// 기준 국가의 축 값
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorAxis {
    pub country: String,
    pub pole_a: f64,
    pub pole_b: f64,
    pub diff: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContinentReport {
    pub axis: Axis,
    pub pole_a: Pole,
    pub pole_b: Pole,
    pub averages: Vec<ContinentAverage>,
    pub leaning: PoleLeaning,
    /// 기준 국가가 데이터에 없으면 None
    pub anchor: Option<AnchorAxis>,
}

impl ContinentReport {
    pub fn build(table: &MbtiTable, axis: Axis, continents: &ContinentMap, anchor_country: &str) -> Self {
        let (pole_a, pole_b) = axis.poles();
        let aggregates = aggregate(table, axis);
        let averages = continent_averages(&aggregates, continents);
        let leaning = pole_leaning(&averages);

        let anchor = table.row(anchor_country).map(|row| {
            let agg = aggregate_row(row, axis);
            AnchorAxis {
                country: agg.country,
                pole_a: agg.pole_a,
                pole_b: agg.pole_b,
                diff: agg.diff,
            }
        });
        if anchor.is_none() {
            tracing::warn!(country = anchor_country, "기준 국가가 데이터에 없습니다");
        }

        Self {
            axis,
            pole_a,
            pole_b,
            averages,
            leaning,
            anchor,
        }
    }
}

fn join_or_none<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        "없음".to_string()
    } else {
        items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
    }
}

impl PageReport for ContinentReport {
    fn title(&self) -> String {
        format!("🌍 대륙별 {} 평균 비율", self.axis)
    }

    fn sheets(&self) -> Vec<ReportSheet> {
        let a = self.pole_a.to_string();
        let b = self.pole_b.to_string();
        let mut sheet = ReportSheet::new(self.axis.label(), &["Continent", a.as_str(), b.as_str(), "Diff"]);
        for avg in &self.averages {
            sheet.push_row(vec![
                Cell::text(avg.continent.name()),
                Cell::Percent(avg.pole_a),
                Cell::Percent(avg.pole_b),
                Cell::Percent(avg.diff),
            ]);
        }
        vec![sheet]
    }

    fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match &self.anchor {
            Some(anchor) => lines.push(format!(
                "{}의 {} 분포: {} {}, {} {}",
                anchor.country,
                self.axis,
                self.pole_a,
                percent(anchor.pole_a),
                self.pole_b,
                percent(anchor.pole_b)
            )),
            None => lines.push("⚠ 기준 국가가 데이터에 없어 국가별 분포를 생략합니다".to_string()),
        }
        lines.push(format!(
            "평균적으로 {} 성향 비율이 더 높은 대륙은 👉 {}",
            self.pole_a,
            join_or_none(&self.leaning.pole_a_higher)
        ));
        lines.push(format!(
            "{} 성향 비율이 더 높은 대륙은 👉 {}",
            self.pole_b,
            join_or_none(&self.leaning.pole_b_higher)
        ));
        lines
    }
}
