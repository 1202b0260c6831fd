//! Display formatting for listing fields. Everything here degrades to a
//! placeholder string instead of failing on missing data.

use chrono::{DateTime, Utc};

/// "$80,000" with no cents; a missing or zero price reads "Price on request".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 => format!("${}", thousands(p.round() as i64)),
        _ => "Price on request".to_string(),
    }
}

/// "1,200 sq ft" or "Area not specified".
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a != 0.0 => format!("{} sq ft", thousands(a.round() as i64)),
        _ => "Area not specified".to_string(),
    }
}

/// Short US-style date ("Jan 1, 2024"); missing dates render empty.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// Badge text for a listing's transaction intent. Only an exact lowercase
/// "rent" reads "For Rent"; everything else (including missing) reads
/// "For Sale", matching the marketplace page.
pub fn purpose_badge(purpose: Option<&str>) -> &'static str {
    if purpose == Some("rent") {
        "For Rent"
    } else {
        "For Sale"
    }
}

fn thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
