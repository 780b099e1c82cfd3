use crate::model::result::{CompositeReport, IndexResult, Reliability};

pub fn render_report_text(report: &CompositeReport) -> String {
    let mut out = String::new();

    out.push_str("Psychometric Index Report\n");
    out.push_str("=========================\n\n");
    out.push_str(&format!("Computed at: {}\n\n", report.computed_at));

    push_index(&mut out, "Difference", &report.difference);
    push_index(&mut out, "Kernel stability", &report.kernel_stability);
    push_index(&mut out, "Self-integration", &report.self_integration);
    push_index(
        &mut out,
        "Circularity (structural)",
        &report.circularity_structural,
    );
    push_index(
        &mut out,
        "Circularity (potential)",
        &report.circularity_potential,
    );
    push_index(&mut out, "Completeness", &report.completeness);
    push_index(&mut out, "Confidence", &report.confidence);

    if let Some(details) = &report.confidence.details {
        out.push_str(&format!(
            "Confidence weighting (display): personality {} / evidence {} / consistency {}\n",
            details.personality_ratio, details.evidence_ratio, details.consistency_ratio
        ));
    }

    out
}

fn push_index(out: &mut String, name: &str, result: &IndexResult) {
    out.push_str(&format!(
        "{name}: {} ({}) [{}]\n",
        result.value,
        result.kind,
        reliability_label(result.reliability)
    ));
    if let Some(needed) = &result.needed {
        out.push_str(&format!("  waiting for: {needed}\n"));
    }
    if !result.signals.is_empty() {
        out.push_str(&format!("  signals: {}\n", result.signals.join(", ")));
    }
    out.push('\n');
}

fn reliability_label(r: Reliability) -> &'static str {
    match r {
        Reliability::Low => "low",
        Reliability::Mid => "mid",
        Reliability::High => "high",
    }
}
