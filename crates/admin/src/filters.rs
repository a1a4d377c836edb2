//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Turns a wire name into a label: `in_progress` becomes `In Progress`.
///
/// Usage in templates: `{{ ticket.status|label }}`
#[askama::filter_fn]
pub fn label(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value
        .to_string()
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" "))
}

/// Formats a percentage: whole numbers bare, anything else to two places.
///
/// Usage in templates: `{{ component.uptime|percent }}`
#[askama::filter_fn]
pub fn percent(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let text = value.to_string();
    Ok(match text.parse::<f64>() {
        Ok(number) if number.fract().abs() < f64::EPSILON => format!("{number:.0}%"),
        Ok(number) => format!("{number:.2}%"),
        Err(_) => text,
    })
}
