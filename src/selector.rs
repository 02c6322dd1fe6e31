//! 대화형 선택 (인자가 생략되었을 때)

use crate::error::{AtlasError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use mbti_atlas_common::{Axis, MbtiType};

fn select_index<T: ToString>(prompt: &str, items: &[T]) -> Result<usize> {
    if items.is_empty() {
        return Err(AtlasError::Selection(format!("{}: 선택할 항목이 없습니다", prompt)));
    }

    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| AtlasError::Selection(e.to_string()))
}

/// MBTI 유형 선택 (CSV 헤더 순서)
pub fn select_mbti(types: &[MbtiType]) -> Result<MbtiType> {
    let idx = select_index("MBTI 유형을 선택하세요", types)?;
    Ok(types[idx])
}

/// 국가 선택 (오름차순 목록)
pub fn select_country(countries: &[&str]) -> Result<String> {
    let idx = select_index("국가를 선택하세요", countries)?;
    Ok(countries[idx].to_string())
}

/// 비교할 성향 축 선택
pub fn select_axis() -> Result<Axis> {
    let idx = select_index("비교할 성향 축을 선택하세요", &Axis::ALL)?;
    Ok(Axis::ALL[idx])
}
