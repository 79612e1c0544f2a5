//! Eligibility filtering, cost estimation and ranking of partner rate cards.
//!
//! - Remote destinations admit air-mode partners only; everywhere else every
//!   mode qualifies. That is the sole filter.
//! - Prices always round UP to the next whole unit so a displayed estimate
//!   never understates the true cost.
//! - Results are ranked ascending by estimated price and truncated to the
//!   requested shortlist length.

use thiserror::Error;

use super::catalog::{CatalogError, CatalogProvider};
use super::entities::{
    PartnerRateCard, Recommendation, RemoteLocations, ServiceType, ShipmentRequest, TransportMode,
};

/// Shortlist length used when the caller has no opinion.
pub const DEFAULT_TOP_N: usize = 3;

const REASON_REMOTE_AIR: &str = "Recommended for remote delivery (Air Cargo).";
const REASON_PREMIUM: &str = "Fastest premium delivery via Air.";
const REASON_BUDGET_GROUND: &str = "Most budget-friendly option via Ground.";
const REASON_STANDARD_AIR: &str = "Reliable standard delivery via Air.";
const REASON_STANDARD_GROUND: &str = "Reliable standard ground delivery.";

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("invalid shipment request: {field} must be a non-negative finite number, got {value}")]
    InvalidRequest { field: &'static str, value: f64 },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Rank the best-fit partners for a shipment against a catalog provider.
///
/// Reads one full snapshot from `catalog` and delegates to
/// [`recommend_from_cards`]. Pure apart from that single read: no caching,
/// no mutation, safe to call concurrently over a shared provider.
pub fn recommend<C: CatalogProvider + ?Sized>(
    request: &ShipmentRequest,
    catalog: &C,
    remote_locations: &RemoteLocations,
    top_n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let cards = catalog.list_all()?;
    recommend_from_cards(request, &cards, remote_locations, top_n)
}

/// Slice-level core of [`recommend`] for callers already holding a snapshot.
///
/// Fails fast on malformed input (negative or non-finite request numbers,
/// invalid rate coefficients) rather than pricing nonsense. Empty outcomes
/// are not errors: an empty catalog, zero eligible partners, or `top_n == 0`
/// all yield `Ok(vec![])`.
pub fn recommend_from_cards(
    request: &ShipmentRequest,
    cards: &[PartnerRateCard],
    remote_locations: &RemoteLocations,
    top_n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    request.validate()?;
    for card in cards {
        card.validate()?;
    }

    let is_remote = remote_locations.contains(&request.destination_city);

    let mut priced: Vec<(&PartnerRateCard, u64)> = cards
        .iter()
        .filter(|card| is_eligible(card, is_remote))
        .map(|card| (card, estimate_price(card, request)))
        .collect();

    // Stable sort keyed on price only: equal-price cards keep catalog order.
    priced.sort_by(|a, b| a.1.cmp(&b.1));
    priced.truncate(top_n);

    Ok(priced
        .into_iter()
        .map(|(card, price)| Recommendation::new(&card.name, price, reason_for(card, is_remote)))
        .collect())
}

/// Remote destinations are reachable by air partners only.
fn is_eligible(card: &PartnerRateCard, is_remote: bool) -> bool {
    !is_remote || card.transport_mode == TransportMode::Air
}

/// `base + per_km * distance + per_kg * weight`, rounded up to the next
/// whole currency unit.
pub fn estimate_price(card: &PartnerRateCard, request: &ShipmentRequest) -> u64 {
    let raw = card.base_rate
        + card.per_km_rate * request.distance_km
        + card.per_kg_rate * request.package_weight_kg;
    raw.ceil() as u64
}

/// First matching rule wins, evaluated per partner independent of its rank.
///
/// Rule order is contract: a premium land partner still gets the "via Air"
/// premium text. Downstream copy depends on the literal strings.
pub fn reason_for(card: &PartnerRateCard, is_remote: bool) -> String {
    let text = if is_remote && card.transport_mode == TransportMode::Air {
        REASON_REMOTE_AIR
    } else if card.service_type == ServiceType::Premium {
        REASON_PREMIUM
    } else if card.service_type == ServiceType::Budget && card.transport_mode == TransportMode::Land
    {
        REASON_BUDGET_GROUND
    } else if card.transport_mode == TransportMode::Air {
        REASON_STANDARD_AIR
    } else {
        REASON_STANDARD_GROUND
    };
    text.to_string()
}
