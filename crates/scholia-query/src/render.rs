//! Deterministic fallback rendering of query outcomes.
//!
//! The LLM formatter downstream is an external collaborator; this renderer
//! is the guaranteed path, producing numbered plain-text lines from the raw
//! rows. Outcomes with empty result sets are "no information", never an
//! error.

use serde_json::Value;

use scholia_common::QueryOutcome;

pub const NO_INFORMATION: &str = "未查询到相关信息，请尝试其他问题。";

pub fn render_outcomes(outcomes: &[QueryOutcome]) -> String {
    let with_rows: Vec<&QueryOutcome> =
        outcomes.iter().filter(|o| !o.results.is_empty()).collect();
    if with_rows.is_empty() {
        return NO_INFORMATION.to_string();
    }

    let mut lines = Vec::new();
    for outcome in with_rows {
        lines.push(format!("关于{}的{}：", outcome.entity.name, outcome.intent));
        for (i, row) in outcome.results.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|(column, value)| format!("{column}：{}", render_value(value)))
                .collect();
            lines.push(format!("{}. {}", i + 1, cells.join("，")));
        }
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join("、"),
        other => other.to_string(),
    }
}
