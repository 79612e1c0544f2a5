//! Catalog-provider seam between the engine and whatever holds the rate cards.
//!
//! The engine never owns the catalog. It reads a full, consistent snapshot
//! per call through [`CatalogProvider`] and leaves administration (creating,
//! updating, removing partners) to whoever backs the provider.

use std::collections::HashSet;

use thiserror::Error;

use super::entities::PartnerRateCard;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid rate card \"{name}\": {reason}")]
    InvalidRateCard { name: String, reason: String },
    #[error("duplicate partner name \"{0}\"")]
    DuplicateName(String),
}

/// Read-only source of partner rate cards.
///
/// `list_all` must return a consistent snapshot: no partial or mid-update
/// data. Implementations backed by a mutable store should copy out under
/// whatever synchronization that store needs; the engine itself takes no
/// locks.
pub trait CatalogProvider {
    fn list_all(&self) -> Result<Vec<PartnerRateCard>, CatalogError>;
}

/// Vec-backed provider for tests and embedders that already hold the cards.
///
/// Construction validates every card and rejects duplicate names, so a
/// successfully built catalog always satisfies the rate-card invariants.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    cards: Vec<PartnerRateCard>,
}

impl InMemoryCatalog {
    pub fn new(cards: Vec<PartnerRateCard>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for card in &cards {
            card.validate()?;
            if !seen.insert(card.name.clone()) {
                return Err(CatalogError::DuplicateName(card.name.clone()));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[PartnerRateCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn list_all(&self) -> Result<Vec<PartnerRateCard>, CatalogError> {
        Ok(self.cards.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ServiceType, TransportMode};

    fn card(name: &str, base: f64) -> PartnerRateCard {
        PartnerRateCard {
            name: name.to_string(),
            base_rate: base,
            per_km_rate: 1.5,
            per_kg_rate: 20.0,
            service_type: ServiceType::Standard,
            transport_mode: TransportMode::Mixed,
        }
    }

    #[test]
    fn accepts_distinct_tier_rows_of_one_carrier() {
        let catalog = InMemoryCatalog::new(vec![
            card("CarrierX", 80.0),
            card("CarrierX Express", 160.0),
        ])
        .expect("suffixed names are independent entries");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = InMemoryCatalog::new(vec![card("CarrierX", 80.0), card("CarrierX", 90.0)])
            .expect_err("duplicate name");
        assert!(matches!(err, CatalogError::DuplicateName(ref n) if n == "CarrierX"));
    }

    #[test]
    fn rejects_invalid_cards_at_construction() {
        let mut bad = card("Broken", 10.0);
        bad.per_km_rate = -1.0;
        assert!(InMemoryCatalog::new(vec![bad]).is_err());
    }

    #[test]
    fn list_all_returns_every_card() {
        let catalog =
            InMemoryCatalog::new(vec![card("A", 1.0), card("B", 2.0), card("C", 3.0)]).unwrap();
        let listed = catalog.list_all().unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].name, "A");
    }
}
