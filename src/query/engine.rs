use crate::models::PropertyRecord;
use crate::query::params::{QueryParameters, SortBy};

/// Listings shown per result page.
pub const PAGE_SIZE: usize = 12;

/// Select the records matching every active filter in `params`.
///
/// Pure and infallible: malformed numeric fields were already coerced at
/// deserialization, so a record either matches or it doesn't. The output
/// borrows from `records` and preserves input order.
pub fn filter<'a>(
    records: &'a [PropertyRecord],
    params: &QueryParameters,
) -> Vec<&'a PropertyRecord> {
    records
        .iter()
        .filter(|record| matches(record, params))
        .collect()
}

fn matches(record: &PropertyRecord, params: &QueryParameters) -> bool {
    let matches_search = params.search_term.is_empty() || {
        let term = params.search_term.to_lowercase();
        record.name.to_lowercase().contains(&term)
            || record.description.to_lowercase().contains(&term)
            || record
                .location
                .as_deref()
                .is_some_and(|loc| loc.to_lowercase().contains(&term))
    };

    let matches_purpose = params.purpose.matches(record.purpose.as_deref());

    let matches_area =
        params.area.is_empty() || record.location.as_deref() == Some(params.area.as_str());

    let matches_type = params.property_type.is_empty()
        || record.genre.as_deref() == Some(params.property_type.as_str());

    let matches_price = params
        .price_range
        .map_or(true, |band| band.contains(record.price_value()));

    matches_search && matches_purpose && matches_area && matches_type && matches_price
}

/// Order a filtered result set in place. The sort is stable, so records
/// comparing equal keep their relative input order.
pub fn sort_listings(listings: &mut [&PropertyRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => listings.sort_by(|a, b| b.created_ts().cmp(&a.created_ts())),
        SortBy::Oldest => listings.sort_by(|a, b| a.created_ts().cmp(&b.created_ts())),
        SortBy::PriceHigh => {
            listings.sort_by(|a, b| b.price_value().total_cmp(&a.price_value()))
        }
        SortBy::PriceLow => {
            listings.sort_by(|a, b| a.price_value().total_cmp(&b.price_value()))
        }
        SortBy::Alphabetical => {
            listings.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}

/// Filter then sort: the per-render entry point.
pub fn search<'a>(
    records: &'a [PropertyRecord],
    params: &QueryParameters,
) -> Vec<&'a PropertyRecord> {
    let mut results = filter(records, params);
    sort_listings(&mut results, params.sort_by);
    results
}

/// Distinct non-empty locations, sorted, for the area dropdown.
pub fn unique_areas(records: &[PropertyRecord]) -> Vec<String> {
    let mut areas: Vec<String> = records
        .iter()
        .filter_map(|record| record.location.clone())
        .filter(|loc| !loc.is_empty())
        .collect();
    areas.sort();
    areas.dedup();
    areas
}

/// Distinct property types, sorted, for the type dropdown. Records without
/// a genre contribute "Uncategorized".
pub fn unique_property_types(records: &[PropertyRecord]) -> Vec<String> {
    let mut types: Vec<String> = records
        .iter()
        .map(|record| {
            record
                .genre
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string())
        })
        .collect();
    types.sort();
    types.dedup();
    types
}

/// Sub-slice of `results` for a zero-based page. Out-of-range pages are empty.
pub fn page<'a, 'b>(
    results: &'a [&'b PropertyRecord],
    index: usize,
    per_page: usize,
) -> &'a [&'b PropertyRecord] {
    let start = index.saturating_mul(per_page);
    if start >= results.len() || per_page == 0 {
        return &[];
    }
    let end = (start + per_page).min(results.len());
    &results[start..end]
}

/// Number of pages needed for `len` results.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}
