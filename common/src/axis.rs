//! 성향 축 집계
//!
//! 한 극에 속한 8개 유형의 비율을 더해 국가별 A극/B극 값과 차이를 구한다.

use crate::table::{CountryMbtiRow, MbtiTable};
use crate::types::{Axis, Pole};
use serde::Serialize;

/// 국가 하나의 축 집계 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisAggregate {
    pub country: String,
    pub axis: Axis,
    pub pole_a: f64,
    pub pole_b: f64,
    /// pole_a - pole_b
    pub diff: f64,
}

/// 한 극의 비율 합
pub fn pole_sum(row: &CountryMbtiRow, pole: Pole) -> f64 {
    pole.members().iter().map(|ty| row.get(*ty)).sum()
}

pub fn aggregate_row(row: &CountryMbtiRow, axis: Axis) -> AxisAggregate {
    let (a, b) = axis.poles();
    let pole_a = pole_sum(row, a);
    let pole_b = pole_sum(row, b);
    AxisAggregate {
        country: row.country.clone(),
        axis,
        pole_a,
        pole_b,
        diff: pole_a - pole_b,
    }
}

/// 전체 행에 대해 축 집계 (입력 행 순서 유지)
pub fn aggregate(table: &MbtiTable, axis: Axis) -> Vec<AxisAggregate> {
    table.rows().iter().map(|row| aggregate_row(row, axis)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MbtiType;

    fn sample_korea() -> CountryMbtiRow {
        let mut proportions = [0.0; 16];
        for (i, value) in proportions.iter_mut().enumerate() {
            *value = 0.01 * (i as f64 + 1.0) / 1.36;
        }
        proportions[MbtiType::Intj.index()] = 0.03;
        proportions[MbtiType::Enfp.index()] = 0.08;
        CountryMbtiRow::new("South Korea", proportions)
    }

    #[test]
    fn test_poles_sum_to_row_total() {
        let row = sample_korea();
        for axis in Axis::ALL {
            let agg = aggregate_row(&row, axis);
            assert!((agg.pole_a + agg.pole_b - row.total()).abs() < 1e-12, "{}", axis);
        }
    }

    #[test]
    fn test_ei_matches_manual_sum() {
        let row = sample_korea();
        let manual = row.get(MbtiType::Enfj)
            + row.get(MbtiType::Enfp)
            + row.get(MbtiType::Entj)
            + row.get(MbtiType::Entp)
            + row.get(MbtiType::Esfj)
            + row.get(MbtiType::Esfp)
            + row.get(MbtiType::Estj)
            + row.get(MbtiType::Estp);

        let agg = aggregate_row(&row, Axis::EI);
        assert!((agg.pole_a - manual).abs() < 1e-12);
        assert!((agg.diff - (agg.pole_a - agg.pole_b)).abs() < 1e-12);
    }

    #[test]
    fn test_diff_antisymmetric() {
        let row = sample_korea();
        for axis in Axis::ALL {
            let (a, b) = axis.poles();
            let forward = pole_sum(&row, a) - pole_sum(&row, b);
            let swapped = pole_sum(&row, b) - pole_sum(&row, a);
            assert!((forward + swapped).abs() < 1e-12);
            assert!((aggregate_row(&row, axis).diff - forward).abs() < 1e-12);
        }
    }

    #[test]
    fn test_aggregate_keeps_row_order() {
        let table = MbtiTable::from_rows(vec![
            CountryMbtiRow::new("B", [0.0625; 16]),
            CountryMbtiRow::new("A", [0.0625; 16]),
        ]);
        let aggs = aggregate(&table, Axis::TF);
        assert_eq!(aggs[0].country, "B");
        assert_eq!(aggs[1].country, "A");
        assert!((aggs[0].pole_a - 0.5).abs() < 1e-12);
        assert!(aggs[0].diff.abs() < 1e-12);
    }
}
