pub mod fixture;
pub mod rest;
pub mod traits;

pub use fixture::{sample_listings, FixtureSource};
pub use rest::RestSource;
pub use traits::ListingSource;
