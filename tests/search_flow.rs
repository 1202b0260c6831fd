//! End-to-end search flow: parse a shared URL, filter and sort the sample
//! collection, peel filters off one chip at a time, and re-derive the URL.

use estate_search::query::{self, FilterField, PurposeFilter, QueryParameters, SortBy};
use estate_search::source::sample_listings;
use pretty_assertions::assert_eq;

fn names<'a>(results: &'a [&'a estate_search::models::PropertyRecord]) -> Vec<&'a str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn shared_url_reproduces_the_search() {
    let records = sample_listings();

    let params = QueryParameters::parse("purpose=buy&price=50000-100000");
    assert_eq!(params.purpose, PurposeFilter::Buy);

    let results = query::search(&records, &params);
    assert_eq!(names(&results), vec!["Villa A"]);

    // Re-serializing reproduces the incoming URL.
    assert_eq!(
        params.share_url(),
        "/property-search?purpose=buy&price=50000-100000"
    );
}

#[test]
fn removing_chips_widens_the_search_one_field_at_a_time() {
    let records = sample_listings();
    let params = QueryParameters::parse("q=villa&purpose=buy&area=Lahore");

    let chips = params.active_filters();
    assert_eq!(chips.len(), 3);

    // Clearing the search term keeps the other two filters in the URL.
    let without_term = params.cleared(FilterField::SearchTerm);
    assert_eq!(
        without_term.share_url(),
        "/property-search?purpose=buy&area=Lahore"
    );
    let widened = query::search(&records, &without_term);
    assert!(widened.len() >= query::search(&records, &params).len());

    // Clearing everything lands back on the bare page URL.
    let cleared = params.cleared_all();
    assert_eq!(cleared.share_url(), "/property-search");
    assert_eq!(
        query::search(&records, &cleared).len(),
        records.len()
    );
}

#[test]
fn newest_sort_orders_the_whole_collection() {
    let records = sample_listings();
    let mut params = QueryParameters::default();
    params.sort_by = SortBy::Newest;

    let results = query::search(&records, &params);
    assert_eq!(results.len(), records.len());
    let stamps: Vec<i64> = results.iter().map(|r| r.created_ts()).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn price_on_request_listings_sort_to_the_bottom_of_price_high() {
    let records = sample_listings();
    let mut params = QueryParameters::default();
    params.sort_by = SortBy::PriceHigh;

    let results = query::search(&records, &params);
    let last = results.last().expect("sample collection is non-empty");
    assert_eq!(last.price, None);
}

#[test]
fn facets_reflect_the_collection() {
    let records = sample_listings();
    let areas = query::engine::unique_areas(&records);
    assert!(areas.contains(&"Lahore".to_string()));
    assert!(areas.windows(2).all(|w| w[0] < w[1]));

    let types = query::engine::unique_property_types(&records);
    assert!(types.contains(&"House".to_string()));
}
