use serde::{Deserialize, Serialize};

use crate::util::slug::logo_asset_hint;

use super::catalog::CatalogError;

/// Coarse price/quality tier of a partner offering.
///
/// Wire names are lowercase; anything outside the closed set is a
/// deserialization error, never defaulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Budget,
    Standard,
    Premium,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Budget => "Budget",
            ServiceType::Standard => "Standard",
            ServiceType::Premium => "Premium",
        }
    }
}

/// Physical shipping channel. Drives both eligibility filtering and
/// reason-text selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Air,
    Land,
    Mixed,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Air => "Air",
            TransportMode::Land => "Land",
            TransportMode::Mixed => "Mixed",
        }
    }
}

/// A named partner's pricing formula plus its service/transport
/// classification. `name` is the primary key within a catalog.
///
/// A single physical carrier may appear multiple times under suffixed names
/// ("CarrierX" vs "CarrierX Express") to represent distinct service tiers.
/// Those rows share no identity; each is a fully independent catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartnerRateCard {
    pub name: String,
    pub base_rate: f64,
    pub per_km_rate: f64,
    pub per_kg_rate: f64,
    pub service_type: ServiceType,
    pub transport_mode: TransportMode,
}

impl PartnerRateCard {
    /// Rejects cards the pricing arithmetic is undefined for: empty names
    /// and negative or non-finite rate coefficients.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidRateCard {
                name: self.name.clone(),
                reason: "partner name is empty".to_string(),
            });
        }
        for (field, value) in [
            ("base_rate", self.base_rate),
            ("per_km_rate", self.per_km_rate),
            ("per_kg_rate", self.per_kg_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidRateCard {
                    name: self.name.clone(),
                    reason: format!("{field} must be a non-negative finite number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// The engine's input, supplied by an external order entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    pub distance_km: f64,
    pub package_weight_kg: f64,
    /// Matched case-sensitively, exactly as provided, against the
    /// remote-locations set.
    pub destination_city: String,
}

impl ShipmentRequest {
    pub fn validate(&self) -> Result<(), super::recommend::RecommendError> {
        use super::recommend::RecommendError;

        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(RecommendError::InvalidRequest {
                field: "distance_km",
                value: self.distance_km,
            });
        }
        if !self.package_weight_kg.is_finite() || self.package_weight_kg < 0.0 {
            return Err(RecommendError::InvalidRequest {
                field: "package_weight_kg",
                value: self.package_weight_kg,
            });
        }
        Ok(())
    }
}

/// One ranked engine output. Constructed fresh per request; no persisted
/// identity beyond the response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub partner_name: String,
    /// Lowercased partner name with the first space removed. Downstream
    /// asset paths depend on this exact (lossy) transform.
    pub logo_asset_hint: String,
    /// Estimated cost, rounded up to the next whole currency unit.
    pub estimated_price: u64,
    pub reason: String,
}

impl Recommendation {
    pub fn new(partner_name: &str, estimated_price: u64, reason: String) -> Self {
        Self {
            partner_name: partner_name.to_string(),
            logo_asset_hint: logo_asset_hint(partner_name),
            estimated_price,
            reason,
        }
    }
}

/// Destination cities configured as requiring air-only delivery.
/// Matching is exact and case-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteLocations {
    cities: std::collections::HashSet<String>,
}

impl RemoteLocations {
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cities: cities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.contains(city)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
