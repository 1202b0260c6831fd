pub mod engine;
pub mod format;
pub mod params;

pub use engine::{filter, page, page_count, search, sort_listings, PAGE_SIZE};
pub use params::{
    FilterChip, FilterField, PriceBand, PurposeFilter, QueryParameters, SortBy, ViewMode,
};
