//! Multi-criteria shipping-partner recommendation engine.
//!
//! Given a shipment's distance, weight and destination, the engine filters a
//! catalog of partner rate cards for eligibility, estimates a price per
//! survivor, ranks ascending by price and returns an explained top-N
//! shortlist. Everything is deterministic and in-memory; nothing here books
//! shipments or talks to live carrier APIs.

pub mod domain;
pub mod infra;
pub mod util;

pub use domain::{
    recommend, recommend_from_cards, CatalogError, CatalogProvider, InMemoryCatalog,
    PartnerRateCard, Recommendation, RecommendError, RemoteLocations, ServiceType,
    ShipmentRequest, TransportMode, DEFAULT_TOP_N,
};
pub use infra::store::{load_snapshot, CatalogSnapshot, StoreError};
