//! 국가별 MBTI 비율 테이블
//!
//! `Country` 컬럼 + MBTI 16유형 컬럼으로 구성된 CSV를 읽어
//! 변경 불가능한 메모리 테이블로 보관한다.

use crate::error::{Error, Result};
use crate::types::MbtiType;
use serde::Serialize;
use std::io::Read;

pub const COUNTRY_COLUMN: &str = "Country";

/// 한 국가의 16유형 비율
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMbtiRow {
    pub country: String,
    /// `MbtiType::ALL` 순서로 저장
    proportions: [f64; 16],
}

impl CountryMbtiRow {
    pub fn new(country: impl Into<String>, proportions: [f64; 16]) -> Self {
        Self {
            country: country.into(),
            proportions,
        }
    }

    /// (유형, 비율) 쌍에서 생성. 빠진 유형은 0.0
    pub fn from_pairs(country: impl Into<String>, pairs: &[(MbtiType, f64)]) -> Self {
        let mut proportions = [0.0; 16];
        for (ty, value) in pairs {
            proportions[ty.index()] = *value;
        }
        Self::new(country, proportions)
    }

    pub fn get(&self, ty: MbtiType) -> f64 {
        self.proportions[ty.index()]
    }

    /// 16유형 비율의 합
    pub fn total(&self) -> f64 {
        self.proportions.iter().sum()
    }
}

/// 합계가 1.0에서 벗어난 행
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSumWarning {
    pub country: String,
    pub total: f64,
}

/// 로드된 전체 테이블
#[derive(Debug, Clone, Default, Serialize)]
pub struct MbtiTable {
    /// CSV 헤더 순서의 유형 목록 (선택 목록 표시 순서)
    columns: Vec<MbtiType>,
    rows: Vec<CountryMbtiRow>,
}

impl MbtiTable {
    /// 헤더 순서를 알파벳 순서로 두고 행에서 생성
    pub fn from_rows(rows: Vec<CountryMbtiRow>) -> Self {
        Self {
            columns: MbtiType::ALL.to_vec(),
            rows,
        }
    }

    /// CSV 문자열에서 읽기
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// CSV 리더에서 읽기
    ///
    /// 헤더에는 `Country`와 16유형이 모두 있어야 한다. 컬럼 순서는 자유.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();

        let mut country_idx = None;
        let mut type_columns: Vec<(usize, MbtiType)> = Vec::with_capacity(16);
        for (idx, name) in headers.iter().enumerate() {
            if name == COUNTRY_COLUMN {
                country_idx = Some(idx);
                continue;
            }
            let ty: MbtiType = name
                .parse()
                .map_err(|_| Error::DataLoad(format!("알 수 없는 컬럼: {}", name)))?;
            if type_columns.iter().any(|(_, t)| *t == ty) {
                return Err(Error::DataLoad(format!("중복된 컬럼: {}", name)));
            }
            type_columns.push((idx, ty));
        }

        let country_idx = country_idx.ok_or_else(|| Error::MissingColumn(COUNTRY_COLUMN.into()))?;
        if let Some(missing) = MbtiType::ALL
            .iter()
            .find(|ty| !type_columns.iter().any(|(_, t)| t == *ty))
        {
            return Err(Error::MissingColumn(missing.code().into()));
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let country = record.get(country_idx).unwrap_or_default().to_string();

            let mut proportions = [0.0; 16];
            for (idx, ty) in &type_columns {
                let raw = record.get(*idx).unwrap_or_default();
                let invalid = || Error::InvalidValue {
                    country: country.clone(),
                    column: ty.code().into(),
                    value: raw.to_string(),
                };
                let value: f64 = raw.parse().map_err(|_| invalid())?;
                // "NaN", "inf"도 f64로 파싱되므로 따로 거른다
                if !value.is_finite() {
                    return Err(invalid());
                }
                proportions[ty.index()] = value;
            }

            rows.push(CountryMbtiRow::new(country, proportions));
        }

        Ok(Self {
            columns: type_columns.into_iter().map(|(_, ty)| ty).collect(),
            rows,
        })
    }

    pub fn types(&self) -> &[MbtiType] {
        &self.columns
    }

    pub fn rows(&self) -> &[CountryMbtiRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 국가명으로 행 검색 (대소문자 무시)
    pub fn row(&self, country: &str) -> Option<&CountryMbtiRow> {
        let needle = country.to_lowercase();
        self.rows.iter().find(|r| r.country.to_lowercase() == needle)
    }

    /// 국가명 완전 일치 검색
    pub fn row_exact(&self, country: &str) -> Option<&CountryMbtiRow> {
        self.rows.iter().find(|r| r.country == country)
    }

    /// 중복 없이 오름차순 정렬된 국가 목록
    pub fn countries_sorted(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self.rows.iter().map(|r| r.country.as_str()).collect();
        countries.sort_unstable();
        countries.dedup();
        countries
    }

    /// 비율 합계가 1.0에서 `tolerance`보다 크게 벗어난 행
    pub fn row_sum_warnings(&self, tolerance: f64) -> Vec<RowSumWarning> {
        self.rows
            .iter()
            .filter(|r| !((r.total() - 1.0).abs() <= tolerance))
            .map(|r| RowSumWarning {
                country: r.country.clone(),
                total: r.total(),
            })
            .collect()
    }
}
