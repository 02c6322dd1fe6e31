pub mod excel;

use crate::error::{AtlasError, Result};
use crate::pages::PageReport;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Excel,
    Text,
}

impl ExportFormat {
    /// 확장자로 형식 결정
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Excel),
            "txt" | "md" => Ok(ExportFormat::Text),
            _ => Err(AtlasError::Export(format!(
                "지원하지 않는 출력 형식: {}. .json, .xlsx, .txt 중 하나를 사용하세요",
                path.display()
            ))),
        }
    }
}

pub fn export_report<R: PageReport>(report: &R, output: &Path) -> Result<()> {
    let format = ExportFormat::from_path(output)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match format {
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            std::fs::write(output, json)?;
        }
        ExportFormat::Excel => {
            excel::generate_excel(&report.sheets(), output)?;
        }
        ExportFormat::Text => {
            std::fs::write(output, report.render_text())?;
        }
    }

    Ok(())
}
