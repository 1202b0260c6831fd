use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Transaction-intent filter. The UI term "buy" maps to the stored purpose
/// "sell" — that naming asymmetry is part of the URL contract and is kept
/// exactly as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurposeFilter {
    #[default]
    All,
    Buy,
    Rent,
}

impl PurposeFilter {
    pub fn token(&self) -> &'static str {
        match self {
            PurposeFilter::All => "all",
            PurposeFilter::Buy => "buy",
            PurposeFilter::Rent => "rent",
        }
    }

    /// Unknown tokens mean "no filter", never an error.
    pub fn from_token(token: &str) -> Self {
        match token {
            "buy" => PurposeFilter::Buy,
            "rent" => PurposeFilter::Rent,
            _ => PurposeFilter::All,
        }
    }

    /// Does a stored purpose value satisfy this filter?
    pub fn matches(&self, stored: Option<&str>) -> bool {
        match self {
            PurposeFilter::All => true,
            PurposeFilter::Buy => stored.is_some_and(|p| p.eq_ignore_ascii_case("sell")),
            PurposeFilter::Rent => stored.is_some_and(|p| p.eq_ignore_ascii_case("rent")),
        }
    }
}

/// Coarse price interval. Bands below the top are half-open on the low side
/// and closed on the high side, so 50000 lands in the first band and 50001
/// in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBand {
    UpTo50k,
    From50kTo100k,
    From100kTo200k,
    Above200k,
}

impl PriceBand {
    pub fn token(&self) -> &'static str {
        match self {
            PriceBand::UpTo50k => "0-50000",
            PriceBand::From50kTo100k => "50000-100000",
            PriceBand::From100kTo200k => "100000-200000",
            PriceBand::Above200k => "200000+",
        }
    }

    /// Unrecognized tokens mean "no price filter".
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0-50000" => Some(PriceBand::UpTo50k),
            "50000-100000" => Some(PriceBand::From50kTo100k),
            "100000-200000" => Some(PriceBand::From100kTo200k),
            "200000+" => Some(PriceBand::Above200k),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::UpTo50k => "$0 - $50,000",
            PriceBand::From50kTo100k => "$50,000 - $100,000",
            PriceBand::From100kTo200k => "$100,000 - $200,000",
            PriceBand::Above200k => "$200,000+",
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBand::UpTo50k => price <= 50_000.0,
            PriceBand::From50kTo100k => price > 50_000.0 && price <= 100_000.0,
            PriceBand::From100kTo200k => price > 100_000.0 && price <= 200_000.0,
            PriceBand::Above200k => price > 200_000.0,
        }
    }
}

/// Result ordering. Session-local: not part of the URL contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
    Alphabetical,
}

impl SortBy {
    pub fn token(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
            SortBy::PriceHigh => "price-high",
            SortBy::PriceLow => "price-low",
            SortBy::Alphabetical => "alphabetical",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "newest" => Some(SortBy::Newest),
            "oldest" => Some(SortBy::Oldest),
            "price-high" => Some(SortBy::PriceHigh),
            "price-low" => Some(SortBy::PriceLow),
            "alphabetical" => Some(SortBy::Alphabetical),
            _ => None,
        }
    }
}

/// Presentation mode for the result list. Session-local, never filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Which filter field an active-filter chip clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Purpose,
    SearchTerm,
    Area,
    PropertyType,
    PriceRange,
}

/// A removable badge for one non-default filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub field: FilterField,
    pub label: String,
}

/// The full search state of the listing page.
///
/// Reconstructed from the URL query string on load, mutated one field at a
/// time by the controls, and re-serialized on explicit search or chip
/// removal. `sort_by` and `view_mode` are deliberately excluded from the
/// URL round trip (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub search_term: String,
    pub purpose: PurposeFilter,
    /// Exact match against a record's `location`; empty = no filter.
    pub area: String,
    /// Exact match against a record's `genre`; empty = no filter.
    pub property_type: String,
    pub price_range: Option<PriceBand>,
    pub sort_by: SortBy,
    pub view_mode: ViewMode,
}

impl QueryParameters {
    /// Rebuild parameters from a URL query string (with or without a
    /// leading '?'). Missing keys get defaults; unknown values for closed
    /// token sets fall back to "no filter".
    pub fn parse(query: &str) -> Self {
        let mut params = QueryParameters::default();
        let raw = query.trim_start_matches('?');
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "q" => params.search_term = value.into_owned(),
                "purpose" => params.purpose = PurposeFilter::from_token(&value),
                "area" => params.area = value.into_owned(),
                "type" => params.property_type = value.into_owned(),
                "price" => params.price_range = PriceBand::from_token(&value),
                _ => {}
            }
        }
        params
    }

    /// Canonical query string, omitting default/empty fields. Empty when
    /// nothing is filtered.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search_term.is_empty() {
            serializer.append_pair("q", &self.search_term);
        }
        if self.purpose != PurposeFilter::All {
            serializer.append_pair("purpose", self.purpose.token());
        }
        if !self.area.is_empty() {
            serializer.append_pair("area", &self.area);
        }
        if !self.property_type.is_empty() {
            serializer.append_pair("type", &self.property_type);
        }
        if let Some(band) = self.price_range {
            serializer.append_pair("price", band.token());
        }
        serializer.finish()
    }

    /// Shareable page URL for the current filters.
    pub fn share_url(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            "/property-search".to_string()
        } else {
            format!("/property-search?{}", qs)
        }
    }

    /// One chip per non-default filter field, in display order.
    pub fn active_filters(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        match self.purpose {
            PurposeFilter::All => {}
            PurposeFilter::Buy => chips.push(FilterChip {
                field: FilterField::Purpose,
                label: "For Sale".to_string(),
            }),
            PurposeFilter::Rent => chips.push(FilterChip {
                field: FilterField::Purpose,
                label: "For Rent".to_string(),
            }),
        }
        if !self.search_term.is_empty() {
            chips.push(FilterChip {
                field: FilterField::SearchTerm,
                label: format!("Search: {}", self.search_term),
            });
        }
        if !self.area.is_empty() {
            chips.push(FilterChip {
                field: FilterField::Area,
                label: format!("Area: {}", self.area),
            });
        }
        if !self.property_type.is_empty() {
            chips.push(FilterChip {
                field: FilterField::PropertyType,
                label: format!("Type: {}", self.property_type),
            });
        }
        if let Some(band) = self.price_range {
            chips.push(FilterChip {
                field: FilterField::PriceRange,
                label: format!("Price: {}", band.label()),
            });
        }
        chips
    }

    /// Copy with exactly one filter field reset to its default; sort and
    /// view mode are untouched.
    pub fn cleared(&self, field: FilterField) -> Self {
        let mut params = self.clone();
        match field {
            FilterField::Purpose => params.purpose = PurposeFilter::All,
            FilterField::SearchTerm => params.search_term.clear(),
            FilterField::Area => params.area.clear(),
            FilterField::PropertyType => params.property_type.clear(),
            FilterField::PriceRange => params.price_range = None,
        }
        params
    }

    /// Copy with all five filter fields reset; sort and view mode survive.
    pub fn cleared_all(&self) -> Self {
        QueryParameters {
            sort_by: self.sort_by,
            view_mode: self.view_mode,
            ..QueryParameters::default()
        }
    }
}
