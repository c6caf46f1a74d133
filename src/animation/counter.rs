/// Displayed integer for a raw sampled counter value.
///
/// Counters display whole numbers while in flight; the scheduler snaps the
/// final sample to the exact target, so no residual decimal survives.
pub fn display_value(raw: f64) -> u64 {
    raw.max(0.0).floor() as u64
}

/// Group a value with thousands separators: `1500` becomes `"1,500"`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display text for a counter; the suffix (e.g. `"+"`) only appears once the
/// animation has completed.
pub fn format_display(value: u64, suffix: Option<&str>, completed: bool) -> String {
    match suffix {
        Some(s) if completed => format!("{}{s}", format_grouped(value)),
        _ => format_grouped(value),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/counter.rs"]
mod tests;
