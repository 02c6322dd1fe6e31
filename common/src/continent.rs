//! 대륙 분류와 대륙별 평균
//!
//! 국가명 → 대륙 매핑은 교체 가능한 `ContinentMap` 값이다.
//! 매핑은 문자열 완전 일치이며 대소문자/악센트 정규화는 하지 않는다.
//! 매핑에 없는 국가는 `Continent::Other`.

use crate::axis::AxisAggregate;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
    Other,
}

impl Continent {
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
            Continent::Other => "Other",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 기본 매핑
const BUILTIN_CONTINENTS: &[(&str, Continent)] = &[
    ("South Korea", Continent::Asia),
    ("Japan", Continent::Asia),
    ("China", Continent::Asia),
    ("India", Continent::Asia),
    ("United States", Continent::NorthAmerica),
    ("Canada", Continent::NorthAmerica),
    ("Mexico", Continent::NorthAmerica),
    ("Brazil", Continent::SouthAmerica),
    ("Argentina", Continent::SouthAmerica),
    ("Chile", Continent::SouthAmerica),
    ("Germany", Continent::Europe),
    ("France", Continent::Europe),
    ("United Kingdom", Continent::Europe),
    ("Italy", Continent::Europe),
    ("Spain", Continent::Europe),
    ("Russia", Continent::Europe),
    ("Australia", Continent::Oceania),
    ("New Zealand", Continent::Oceania),
    ("South Africa", Continent::Africa),
    ("Egypt", Continent::Africa),
    ("Nigeria", Continent::Africa),
];

/// 국가명 → 대륙 매핑
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinentMap {
    entries: HashMap<String, Continent>,
}

impl Default for ContinentMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContinentMap {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_CONTINENTS
                .iter()
                .map(|(country, continent)| (country.to_string(), *continent))
                .collect(),
        }
    }

    /// `{"Japan": "Asia", ...}` 형식의 JSON에서 읽기
    pub fn from_json(json: &str) -> Result<Self> {
        let map: Self = serde_json::from_str(json)?;
        if map.entries.is_empty() {
            return Err(Error::Config("대륙 매핑이 비어 있습니다".into()));
        }
        Ok(map)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn classify(&self, country: &str) -> Continent {
        self.entries.get(country).copied().unwrap_or(Continent::Other)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 대륙 하나의 컬럼별 평균
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean<const N: usize> {
    pub continent: Continent,
    pub means: [f64; N],
    pub count: usize,
}

/// 대륙별로 묶어 각 컬럼의 산술 평균을 구한다
///
/// 구성원이 없는 대륙은 출력에 나오지 않는다. 출력은 대륙 이름 순.
pub fn group_means<T, C, V, const N: usize>(
    items: &[T],
    continent_of: C,
    columns: V,
) -> Vec<GroupMean<N>>
where
    C: Fn(&T) -> Continent,
    V: Fn(&T) -> [f64; N],
{
    let mut groups: BTreeMap<&'static str, (Continent, [f64; N], usize)> = BTreeMap::new();

    for item in items {
        let continent = continent_of(item);
        let values = columns(item);
        let entry = groups
            .entry(continent.name())
            .or_insert((continent, [0.0; N], 0));
        for (sum, value) in entry.1.iter_mut().zip(values) {
            *sum += value;
        }
        entry.2 += 1;
    }

    groups
        .into_values()
        .map(|(continent, sums, count)| GroupMean {
            continent,
            means: sums.map(|s| s / count as f64),
            count,
        })
        .collect()
}

/// 대륙별 축 평균
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentAverage {
    pub continent: Continent,
    pub pole_a: f64,
    pub pole_b: f64,
    pub diff: f64,
    pub countries: usize,
}

pub fn continent_averages(aggregates: &[AxisAggregate], map: &ContinentMap) -> Vec<ContinentAverage> {
    group_means(
        aggregates,
        |agg| map.classify(&agg.country),
        |agg| [agg.pole_a, agg.pole_b],
    )
    .into_iter()
    .map(|g| ContinentAverage {
        continent: g.continent,
        pole_a: g.means[0],
        pole_b: g.means[1],
        diff: g.means[0] - g.means[1],
        countries: g.count,
    })
    .collect()
}

/// 어느 극이 더 높은 대륙인지 (diff == 0 인 대륙은 어느 쪽에도 들어가지 않는다)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoleLeaning {
    pub pole_a_higher: Vec<Continent>,
    pub pole_b_higher: Vec<Continent>,
}

pub fn pole_leaning(averages: &[ContinentAverage]) -> PoleLeaning {
    PoleLeaning {
        pole_a_higher: averages.iter().filter(|a| a.diff > 0.0).map(|a| a.continent).collect(),
        pole_b_higher: averages.iter().filter(|a| a.diff < 0.0).map(|a| a.continent).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    fn agg(country: &str, pole_a: f64, pole_b: f64) -> AxisAggregate {
        AxisAggregate {
            country: country.to_string(),
            axis: Axis::TF,
            pole_a,
            pole_b,
            diff: pole_a - pole_b,
        }
    }

    #[test]
    fn test_builtin_has_21_entries() {
        assert_eq!(ContinentMap::builtin().len(), 21);
    }

    #[test]
    fn test_classify_exact_match_only() {
        let map = ContinentMap::builtin();
        assert_eq!(map.classify("South Korea"), Continent::Asia);
        assert_eq!(map.classify("United States"), Continent::NorthAmerica);
        assert_eq!(map.classify("south korea"), Continent::Other);
        assert_eq!(map.classify("Peru"), Continent::Other);
    }

    #[test]
    fn test_from_json() {
        let map = ContinentMap::from_json(r#"{"Peru": "South America", "Kenya": "Africa"}"#).unwrap();
        assert_eq!(map.classify("Peru"), Continent::SouthAmerica);
        assert_eq!(map.classify("Japan"), Continent::Other);
        assert!(ContinentMap::from_json("{}").is_err());
        assert!(ContinentMap::from_json(r#"{"Peru": "Atlantis"}"#).is_err());
    }

    #[test]
    fn test_identical_values_give_same_mean() {
        let items = vec![agg("Japan", 0.4, 0.6), agg("China", 0.4, 0.6), agg("India", 0.4, 0.6)];
        let averages = continent_averages(&items, &ContinentMap::builtin());
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].continent, Continent::Asia);
        assert!((averages[0].pole_a - 0.4).abs() < 1e-12);
        assert!((averages[0].pole_b - 0.6).abs() < 1e-12);
        assert_eq!(averages[0].countries, 3);
    }

    #[test]
    fn test_one_row_per_continent_without_other() {
        let items = vec![
            agg("Japan", 0.5, 0.5),
            agg("Canada", 0.6, 0.4),
            agg("Brazil", 0.3, 0.7),
            agg("France", 0.55, 0.45),
            agg("Egypt", 0.45, 0.55),
            agg("Australia", 0.52, 0.48),
        ];
        let averages = continent_averages(&items, &ContinentMap::builtin());
        let names: Vec<&str> = averages.iter().map(|a| a.continent.name()).collect();
        assert_eq!(
            names,
            vec!["Africa", "Asia", "Europe", "North America", "Oceania", "South America"]
        );
    }

    #[test]
    fn test_unmapped_country_creates_other_group() {
        let items = vec![agg("Japan", 0.5, 0.5), agg("Atlantis", 0.2, 0.8)];
        let averages = continent_averages(&items, &ContinentMap::builtin());
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[1].continent, Continent::Other);
        assert!((averages[1].diff + 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_group_means_mixed_values() {
        let items = [("A", 1.0), ("A", 3.0), ("B", 10.0)];
        let groups = group_means(
            &items,
            |i| if i.0 == "A" { Continent::Europe } else { Continent::Asia },
            |i| [i.1],
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].continent, Continent::Asia);
        assert_eq!(groups[0].means, [10.0]);
        assert_eq!(groups[1].means, [2.0]);
        assert_eq!(groups[1].count, 2);
    }

    #[test]
    fn test_group_means_empty() {
        let groups = group_means(&Vec::<AxisAggregate>::new(), |_| Continent::Asia, |a| [a.pole_a]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_pole_leaning() {
        let items = vec![agg("Japan", 0.4, 0.6), agg("France", 0.6, 0.4), agg("Egypt", 0.5, 0.5)];
        let leaning = pole_leaning(&continent_averages(&items, &ContinentMap::builtin()));
        assert_eq!(leaning.pole_a_higher, vec![Continent::Europe]);
        assert_eq!(leaning.pole_b_higher, vec![Continent::Asia]);
    }
}
