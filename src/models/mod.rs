use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A property listing as stored in the hosted data store.
///
/// Rows come back as loose JSON: numeric columns may arrive as numbers or
/// numeric strings, timestamps may be RFC 3339 or bare dates, and almost
/// every column can be null. Deserialization degrades to defaults instead
/// of failing so one malformed row never sinks the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default, deserialize_with = "de_loose_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Property type tag, open string set ("House", "Flat", ...).
    #[serde(default)]
    pub genre: Option<String>,
    /// "Rent" or "Sell", case-insensitive in stored data.
    #[serde(default)]
    pub purpose: Option<String>,
    /// Absent means "price on request".
    #[serde(default, deserialize_with = "de_loose_number")]
    pub price: Option<f64>,
    /// Square feet; absent means "not specified".
    #[serde(default, deserialize_with = "de_loose_number")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "de_loose_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// URL-safe identifier derived from `name`; uniqueness per author is
    /// enforced upstream, not here.
    #[serde(default)]
    pub slug: String,
    /// Owning author, keys the detail route together with `slug`.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "fileURL")]
    pub file_url: Option<String>,
}

impl PropertyRecord {
    /// Numeric price with absent/unparseable coerced to 0.
    pub fn price_value(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Square footage with absent coerced to 0.
    pub fn area_value(&self) -> f64 {
        self.area.unwrap_or(0.0)
    }

    /// Creation time as epoch milliseconds; missing timestamps sort as epoch 0.
    pub fn created_ts(&self) -> i64 {
        self.created_at.map(|d| d.timestamp_millis()).unwrap_or(0)
    }

    /// Path of the detail view for this listing, keyed by (author, slug).
    /// Falls back to a slug-only route when the author is unknown.
    pub fn detail_route(&self) -> String {
        match &self.email {
            Some(email) => format!("/gallery/{}/{}", email, self.slug),
            None => format!("/gallery/{}", self.slug),
        }
    }
}

/// Accept a string or number id, stringifying either.
fn de_loose_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accept a number or numeric string; anything else becomes None.
fn de_loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Accept RFC 3339 timestamps or bare YYYY-MM-DD dates; anything else becomes None.
fn de_loose_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::String(s) = value else {
        return Ok(None);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Ok(date
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc)));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_accepts_number_or_numeric_string() {
        let a: PropertyRecord = serde_json::from_value(json!({"price": 80000})).unwrap();
        let b: PropertyRecord = serde_json::from_value(json!({"price": "80000"})).unwrap();
        assert_eq!(a.price_value(), 80000.0);
        assert_eq!(b.price_value(), 80000.0);
    }

    #[test]
    fn malformed_price_degrades_to_zero() {
        let record: PropertyRecord =
            serde_json::from_value(json!({"price": "call agent"})).unwrap();
        assert_eq!(record.price, None);
        assert_eq!(record.price_value(), 0.0);
    }

    #[test]
    fn numeric_id_is_stringified() {
        let record: PropertyRecord = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(record.id, "42");
    }

    #[test]
    fn created_at_accepts_bare_date_and_rfc3339() {
        let bare: PropertyRecord =
            serde_json::from_value(json!({"created_at": "2024-01-01"})).unwrap();
        let full: PropertyRecord =
            serde_json::from_value(json!({"created_at": "2024-01-01T00:00:00+00:00"})).unwrap();
        assert_eq!(bare.created_ts(), full.created_ts());

        let junk: PropertyRecord =
            serde_json::from_value(json!({"created_at": "yesterday"})).unwrap();
        assert_eq!(junk.created_ts(), 0);
    }

    #[test]
    fn detail_route_uses_author_when_known() {
        let record: PropertyRecord =
            serde_json::from_value(json!({"slug": "villa-a", "email": "agent@example.com"}))
                .unwrap();
        assert_eq!(record.detail_route(), "/gallery/agent@example.com/villa-a");

        let orphan: PropertyRecord = serde_json::from_value(json!({"slug": "villa-a"})).unwrap();
        assert_eq!(orphan.detail_route(), "/gallery/villa-a");
    }
}
