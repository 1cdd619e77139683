//! Display formatting for metric cards, chart annotations and axis ticks.
//!
//! The engine never rounds; every rounding decision lives here.

use crate::comparison::Indicator;

/// Group the integer digits of an already formatted decimal with `,`.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 + 4);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// `1234567.891` -> `"1,234,567.89"`.
pub fn fmt_thousands(value: f64, decimals: usize) -> String {
    group_thousands(&format!("{:.*}", decimals, value))
}

/// Tonnage metric, e.g. `"30.00 ton"`.
pub fn fmt_tons(tons: f64) -> String {
    format!("{:.2} ton", tons)
}

/// Emissions metric, e.g. `"96.00 tCO₂e"`.
pub fn fmt_co2e(tco2e: f64) -> String {
    format!("{:.2} tCO\u{2082}e", tco2e)
}

/// Currency metric, e.g. `"USD 300,000.00"`.
pub fn fmt_usd(amount: f64) -> String {
    format!("USD {}", fmt_thousands(amount, 2))
}

/// Python-style `round(value, 2)` repr: shortest form, always one decimal.
pub fn fmt_round2(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Annotation drawn above a bar.
pub fn fmt_bar_value(indicator: Indicator, value: f64) -> String {
    match indicator {
        Indicator::AvoidedGei | Indicator::ValorizedMaterial => fmt_round2(value),
        Indicator::EstimatedIncome => format!("${}", fmt_thousands(value, 0)),
    }
}

/// Y-axis tick label. `step` is the tick spacing, which decides the precision.
pub fn fmt_axis_tick(value: f64, step: f64) -> String {
    let mut decimals = 0;
    let mut scaled = step.abs();
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    if value.abs() >= 10_000.0 {
        fmt_thousands(value, decimals)
    } else {
        format!("{:.*}", decimals, value)
    }
}
