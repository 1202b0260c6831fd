use crate::models::PropertyRecord;
use crate::source::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Listing source backed by a local JSON file (an array of records).
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for FixtureSource {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let records: Vec<PropertyRecord> =
            serde_json::from_str(&raw).context("Failed to parse listing fixture")?;

        info!(
            "Loaded {} listings from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "fixture"
    }
}

/// Built-in sample listings for offline runs.
pub fn sample_listings() -> Vec<PropertyRecord> {
    info!("📋 Using built-in sample listings");

    serde_json::from_value(json!([
        {
            "id": 1,
            "name": "Villa A",
            "description": "Spacious family villa with a walled garden and servant quarters.",
            "location": "Lahore",
            "genre": "House",
            "purpose": "Sell",
            "price": 80000,
            "area": 2400,
            "created_at": "2024-01-01",
            "slug": "villa-a",
            "email": "agent.one@example.com"
        },
        {
            "id": 2,
            "name": "Flat B",
            "description": "Compact two-bed flat close to the business district.",
            "location": "Karachi",
            "genre": "Flat",
            "purpose": "Rent",
            "price": 20000,
            "area": 950,
            "created_at": "2024-06-01",
            "slug": "flat-b",
            "email": "agent.two@example.com"
        },
        {
            "id": 3,
            "name": "Canal View Plot",
            "description": "Corner plot facing the canal, ready for construction.",
            "location": "Lahore",
            "genre": "Plot",
            "purpose": "Sell",
            "price": 250000,
            "area": 4500,
            "created_at": "2024-03-15",
            "slug": "canal-view-plot",
            "email": "agent.one@example.com"
        },
        {
            "id": 4,
            "name": "Hill Cottage",
            "description": "Summer cottage with a terrace overlooking the valley.",
            "location": "Murree",
            "genre": "House",
            "purpose": "Rent",
            "price": 45000,
            "area": 1200,
            "created_at": "2024-05-20",
            "slug": "hill-cottage",
            "email": "agent.three@example.com"
        },
        {
            "id": 5,
            "name": "Heritage Haveli",
            "description": "Restored haveli in the old city, price negotiable on visit.",
            "location": "Lahore",
            "genre": "House",
            "purpose": "Sell",
            "created_at": "2023-11-02",
            "slug": "heritage-haveli",
            "email": "agent.two@example.com"
        }
    ]))
    .expect("sample listings are well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_listings_decode() {
        let records = sample_listings();
        assert_eq!(records.len(), 5);
        // The haveli has no price: "on request" listings are part of the sample.
        assert!(records.iter().any(|r| r.price.is_none()));
    }
}
