use anyhow::Result;

use crate::models::ProjectReport;

/// 把分析结果序列化为格式化的 JSON
pub fn render_json(report: &ProjectReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
