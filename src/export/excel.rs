//! Excel 출력 (CLI)

use crate::error::{AtlasError, Result};
use mbti_atlas_common::export::excel_core::generate_excel_buffer;
use mbti_atlas_common::ReportSheet;
use std::path::Path;

pub fn generate_excel(sheets: &[ReportSheet], output_path: &Path) -> Result<()> {
    if sheets.is_empty() {
        return Err(AtlasError::Export("내보낼 표가 없습니다".into()));
    }

    let buffer = generate_excel_buffer(sheets).map_err(AtlasError::Export)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
