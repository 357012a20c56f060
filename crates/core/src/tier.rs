//! Price tier classification and dollar formatting.
//!
//! Tiers are an ordered table of (inclusive lower bound, label) pairs
//! covering the whole non-negative line: a dollar amount belongs to the
//! last band whose lower bound it reaches, so a value exactly on a
//! threshold lands in the higher band.

/// Ordered tier table. Bounds are in dollars and strictly increasing.
pub const TIERS: &[(f64, &str)] = &[
    (0.0, "Budget Friendly"),
    (120_000.0, "Mid Market"),
    (250_000.0, "Above Average"),
    (450_000.0, "Premium"),
    (700_000.0, "Luxury"),
];

/// Classify a dollar amount into its tier label.
///
/// Negative amounts (only reachable through extreme extrapolation) clamp
/// to the lowest tier.
pub fn tier_for(dollars: f64) -> &'static str {
    let mut label = TIERS[0].1;
    for &(lower, name) in TIERS {
        if dollars >= lower {
            label = name;
        } else {
            break;
        }
    }
    label
}

/// Format a dollar amount with thousands separators and no decimals,
/// e.g. `format_usd(483250.7) == "$483,251"`.
pub fn format_usd(dollars: f64) -> String {
    let rounded = dollars.round();
    let negative = rounded < 0.0;
    let mut units = rounded.abs() as u64;

    let mut groups = Vec::new();
    loop {
        let group = units % 1000;
        units /= 1000;
        if units == 0 {
            groups.push(format!("{group}"));
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();

    let sign = if negative { "-" } else { "" };
    format!("{sign}${}", groups.join(","))
}
