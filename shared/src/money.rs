//! Money and margin primitives
//!
//! Two display contracts coexist and stay distinct: whole-dollar grouping
//! for summary KPIs, 2-decimal form for per-item rows.

/// Clamp bound for margin percentages, keeps bad input off the screens
const MARGIN_CLAMP: f64 = 999.0;

/// Gross margin as a percentage of price.
///
/// Returns 0 when price is 0 (no division by zero) and treats non-finite
/// inputs as 0 before clamping the result to [-999, 999].
///
/// # Examples
///
/// ```
/// use shared::money::margin_percent;
///
/// assert_eq!(margin_percent(4.0, 1.0), 75.0);
/// assert_eq!(margin_percent(0.0, 5.0), 0.0);
/// assert_eq!(margin_percent(0.01, 100.0), -999.0);
/// ```
pub fn margin_percent(price: f64, cost: f64) -> f64 {
    let price = if price.is_finite() { price } else { 0.0 };
    let cost = if cost.is_finite() { cost } else { 0.0 };
    if price == 0.0 {
        return 0.0;
    }
    ((price - cost) / price * 100.0).clamp(-MARGIN_CLAMP, MARGIN_CLAMP)
}

/// Format an amount as whole dollars with thousands grouping.
///
/// Summary-card contract: rounds to the nearest dollar.
///
/// # Examples
///
/// ```
/// use shared::money::format_whole;
///
/// assert_eq!(format_whole(15320.0), "$15,320");
/// assert_eq!(format_whole(980.4), "$980");
/// assert_eq!(format_whole(f64::NAN), "$0");
/// ```
pub fn format_whole(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format an amount with two decimals.
///
/// Per-row contract: exact cents, no grouping.
///
/// # Examples
///
/// ```
/// use shared::money::format_cents;
///
/// assert_eq!(format_cents(1.89), "$1.89");
/// assert_eq!(format_cents(f64::INFINITY), "$0.00");
/// ```
pub fn format_cents(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}
