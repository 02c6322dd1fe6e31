//! 내림차순 정렬과 순위 계산
//!
//! 정렬은 안정 정렬이다. 값이 같은 항목은 입력 순서를 유지한다.

use crate::error::{Error, Result};
use crate::table::{CountryMbtiRow, MbtiTable};
use crate::types::MbtiType;
use serde::Serialize;

/// 값 기준 내림차순 정렬
pub fn rank_descending<T, F>(items: &[T], value: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| value(b).total_cmp(&value(a)));
    sorted
}

/// 내림차순 정렬 후 `key`와 일치하는 항목의 1부터 시작하는 순위
///
/// 일치하는 항목이 없으면 `Error::NotFound`
pub fn find_rank<T, F, K>(items: &[T], value: F, key_of: K, key: &str) -> Result<usize>
where
    F: Fn(&T) -> f64,
    K: Fn(&T) -> &str,
{
    rank_descending(items, value)
        .into_iter()
        .position(|item| key_of(item) == key)
        .map(|pos| pos + 1)
        .ok_or_else(|| Error::NotFound(key.to_string()))
}

/// 특정 유형에 대한 국가별 비율
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryShare {
    pub country: String,
    pub mbti: MbtiType,
    pub value: f64,
}

/// 국가 내 유형별 비율
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    pub mbti: MbtiType,
    pub value: f64,
}

/// 유형 비율이 높은 국가 순으로 정렬
pub fn rank_countries(table: &MbtiTable, ty: MbtiType) -> Vec<CountryShare> {
    rank_descending(table.rows(), |row| row.get(ty))
        .into_iter()
        .map(|row| CountryShare {
            country: row.country.clone(),
            mbti: ty,
            value: row.get(ty),
        })
        .collect()
}

/// 상위 n개국
pub fn top_countries(table: &MbtiTable, ty: MbtiType, n: usize) -> Vec<CountryShare> {
    let mut ranked = rank_countries(table, ty);
    ranked.truncate(n);
    ranked
}

/// 유형 비율 기준 국가 순위
pub fn country_rank(table: &MbtiTable, ty: MbtiType, country: &str) -> Result<usize> {
    find_rank(table.rows(), |row| row.get(ty), |row| row.country.as_str(), country)
}

fn type_shares(row: &CountryMbtiRow, order: &[MbtiType]) -> Vec<TypeShare> {
    order
        .iter()
        .map(|ty| TypeShare {
            mbti: *ty,
            value: row.get(*ty),
        })
        .collect()
}

/// 한 국가 안에서 유형을 비율 내림차순으로 정렬 (`order`는 동률 시 순서)
pub fn rank_types(row: &CountryMbtiRow, order: &[MbtiType]) -> Vec<TypeShare> {
    let shares = type_shares(row, order);
    rank_descending(&shares, |s| s.value)
        .into_iter()
        .cloned()
        .collect()
}

/// 한 국가 안에서 유형의 순위
pub fn type_rank(row: &CountryMbtiRow, order: &[MbtiType], ty: MbtiType) -> Result<usize> {
    find_rank(
        &type_shares(row, order),
        |s| s.value,
        |s| s.mbti.code(),
        ty.code(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MbtiTable {
        MbtiTable::from_rows(vec![
            CountryMbtiRow::from_pairs("Japan", &[(MbtiType::Intj, 0.05)]),
            CountryMbtiRow::from_pairs("Chile", &[(MbtiType::Intj, 0.09)]),
            CountryMbtiRow::from_pairs("Egypt", &[(MbtiType::Intj, 0.02)]),
            CountryMbtiRow::from_pairs("Spain", &[(MbtiType::Intj, 0.07)]),
        ])
    }

    #[test]
    fn test_rank_descending_order() {
        let values = [3.0, 1.0, 2.0];
        let sorted: Vec<f64> = rank_descending(&values, |v| *v).into_iter().copied().collect();
        assert_eq!(sorted, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_rank_descending_is_stable() {
        let items = [("a", 1.0), ("b", 2.0), ("c", 1.0), ("d", 2.0)];
        let sorted: Vec<&str> = rank_descending(&items, |i| i.1).iter().map(|i| i.0).collect();
        assert_eq!(sorted, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_ranks_are_consistent_with_sorted_positions() {
        let table = table();
        let ranked = rank_countries(&table, MbtiType::Intj);
        let mut ranks: Vec<usize> = Vec::new();
        for (pos, share) in ranked.iter().enumerate() {
            let rank = country_rank(&table, MbtiType::Intj, &share.country).unwrap();
            assert_eq!(rank, pos + 1);
            ranks.push(rank);
        }
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_find_rank_not_found() {
        let err = country_rank(&table(), MbtiType::Intj, "South Korea").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref k) if k == "South Korea"));
    }

    #[test]
    fn test_top_countries() {
        let top = top_countries(&table(), MbtiType::Intj, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].country, "Chile");
        assert_eq!(top[1].country, "Spain");

        // n이 행 수보다 크면 전체
        assert_eq!(top_countries(&table(), MbtiType::Intj, 10).len(), 4);
    }

    #[test]
    fn test_type_rank_within_country() {
        let row = CountryMbtiRow::from_pairs(
            "South Korea",
            &[(MbtiType::Infp, 0.2), (MbtiType::Istj, 0.3), (MbtiType::Enfp, 0.1)],
        );
        let order = MbtiType::ALL;
        assert_eq!(type_rank(&row, &order, MbtiType::Istj).unwrap(), 1);
        assert_eq!(type_rank(&row, &order, MbtiType::Infp).unwrap(), 2);
        assert_eq!(type_rank(&row, &order, MbtiType::Enfp).unwrap(), 3);
        // 0.0 동률은 순서 유지: ENFJ가 남은 것 중 첫 번째
        assert_eq!(type_rank(&row, &order, MbtiType::Enfj).unwrap(), 4);
    }

    #[test]
    fn test_type_rank_missing_from_order() {
        let row = CountryMbtiRow::new("X", [0.0625; 16]);
        let err = type_rank(&row, &[MbtiType::Intj], MbtiType::Estp).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
