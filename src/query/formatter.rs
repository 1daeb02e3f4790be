use crate::query::executor::QueryOutcome;

pub fn format_outcome(outcome: &QueryOutcome) -> String {
    match &outcome.warning {
        Some(warning) => format!("{} = {}\nwarning: {}", outcome.input, outcome.display, warning),
        None => format!("{} = {}", outcome.input, outcome.display),
    }
}

pub fn format_outcome_json(outcome: &QueryOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|_| outcome.display.clone())
}
