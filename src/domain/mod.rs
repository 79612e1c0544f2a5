//! Domain logic for partner recommendation lives here.

pub mod catalog;
pub mod entities;
pub mod recommend;

pub use catalog::{CatalogError, CatalogProvider, InMemoryCatalog};
pub use entities::{
    PartnerRateCard, Recommendation, RemoteLocations, ServiceType, ShipmentRequest, TransportMode,
};
pub use recommend::{
    estimate_price, reason_for, recommend, recommend_from_cards, RecommendError, DEFAULT_TOP_N,
};
