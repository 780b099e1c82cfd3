pub mod text;

use crate::model::result::CompositeReport;

pub fn render_json(report: &CompositeReport, pretty: bool) -> String {
    // CompositeReport contains no non-serializable values, so this cannot
    // fail in practice; fall back to an empty object rather than panic.
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    rendered.unwrap_or_else(|_| "{}".to_string())
}
