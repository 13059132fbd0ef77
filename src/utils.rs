/// Relative tolerance under which two computed roots count as the same root.
pub const ROOT_TOLERANCE: f64 = 1e-9;

/// Sort `values` ascending and merge entries closer than `tolerance`
/// (relative to the magnitude of the kept value, absolute below 1).
///
/// Negative zero is folded into positive zero.
pub fn merge_close(mut values: Vec<f64>, tolerance: f64) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values.dedup_by(|later, kept| (*later - *kept).abs() <= tolerance * kept.abs().max(1.0));
    values.into_iter().map(|v| v + 0.0).collect()
}

/// "Nice" grid step for an axis covering `span` value units.
///
/// Uses a fixed table: below 10 → 1, below 40 → 5, below 120 → 10,
/// below 200 → 20, below 350 → 50, otherwise 100.
pub fn grid_step(span: f64) -> f64 {
    if span < 10.0 {
        1.0
    } else if span < 40.0 {
        5.0
    } else if span < 120.0 {
        10.0
    } else if span < 200.0 {
        20.0
    } else if span < 350.0 {
        50.0
    } else {
        100.0
    }
}

/// Format an axis label, hiding floating-point noise from repeated stepping.
pub fn format_label(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    // fold -0.0 into 0.0
    format!("{}", rounded + 0.0)
}
