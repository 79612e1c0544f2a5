//! Read-only, file-backed catalog source with embedded defaults.
//!
//! - Resolves `partners.json` / `remote_locations.json` under the per-user
//!   config directory; a missing file falls back to the stock data compiled
//!   into the binary.
//! - A present-but-broken file is an error, never a silent fallback.
//! - Each load produces one consistent [`CatalogSnapshot`]; recommendation
//!   calls against it never observe partial data.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use directories::ProjectDirs;
use thiserror::Error;

use crate::domain::{
    recommend_from_cards, CatalogError, CatalogProvider, InMemoryCatalog, PartnerRateCard,
    Recommendation, RecommendError, RemoteLocations, ShipmentRequest,
};
use crate::util::assets::{default_partners_json, default_remote_locations_json};

const PARTNERS_FILENAME: &str = "partners.json";
const REMOTE_LOCATIONS_FILENAME: &str = "remote_locations.json";

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "PartnerRecommender";
const APP_NAME: &str = "PartnerRecommender";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to decode catalog file: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One consistent load of the catalog plus its sibling remote-location set.
#[derive(Clone, Debug)]
pub struct CatalogSnapshot {
    /// Unix timestamp (seconds) when this snapshot was loaded.
    pub loaded_at: u64,
    catalog: InMemoryCatalog,
    remote_locations: RemoteLocations,
}

impl CatalogSnapshot {
    pub fn new(
        partners: Vec<PartnerRateCard>,
        remote_locations: RemoteLocations,
    ) -> Result<Self, CatalogError> {
        let loaded_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Ok(Self {
            loaded_at,
            catalog: InMemoryCatalog::new(partners)?,
            remote_locations,
        })
    }

    pub fn partners(&self) -> &[PartnerRateCard] {
        self.catalog.cards()
    }

    pub fn remote_locations(&self) -> &RemoteLocations {
        &self.remote_locations
    }

    /// Shortlist partners for a shipment against this snapshot.
    pub fn recommend(
        &self,
        request: &ShipmentRequest,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        recommend_from_cards(request, self.catalog.cards(), &self.remote_locations, top_n)
    }

    /// Get snapshot age as Duration.
    pub fn age(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Duration::from_secs(now.saturating_sub(self.loaded_at))
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        let secs = self.age().as_secs();
        if secs < 60 {
            format!("{secs}s")
        } else if secs < 3600 {
            format!("{}m", secs / 60)
        } else if secs < 86400 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}d", secs / 86400)
        }
    }
}

impl CatalogProvider for CatalogSnapshot {
    fn list_all(&self) -> Result<Vec<PartnerRateCard>, CatalogError> {
        self.catalog.list_all()
    }
}

fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load the catalog from the per-user config directory, falling back to the
/// embedded stock data for any file that is absent.
pub fn load_snapshot() -> Result<CatalogSnapshot, StoreError> {
    match config_dir() {
        Some(dir) => load_snapshot_from_dir(&dir),
        None => {
            println!("[catalog] No config directory available, using embedded defaults");
            embedded_snapshot()
        }
    }
}

/// Like [`load_snapshot`], against an explicit directory.
pub fn load_snapshot_from_dir(dir: &Path) -> Result<CatalogSnapshot, StoreError> {
    let partners = match read_document(&dir.join(PARTNERS_FILENAME))? {
        Some(content) => {
            println!("[catalog] Loaded partner overrides from {}", dir.display());
            serde_json::from_str(&content)?
        }
        None => serde_json::from_str(default_partners_json())?,
    };

    let remote_locations = match read_document(&dir.join(REMOTE_LOCATIONS_FILENAME))? {
        Some(content) => serde_json::from_str(&content)?,
        None => serde_json::from_str(default_remote_locations_json())?,
    };

    let snapshot = CatalogSnapshot::new(partners, remote_locations)?;
    println!(
        "[catalog] Snapshot ready ({} partners, {} remote locations)",
        snapshot.partners().len(),
        snapshot.remote_locations().len()
    );
    Ok(snapshot)
}

/// Build a snapshot purely from the embedded stock data.
pub fn embedded_snapshot() -> Result<CatalogSnapshot, StoreError> {
    let partners = serde_json::from_str(default_partners_json())?;
    let remote_locations = serde_json::from_str(default_remote_locations_json())?;
    Ok(CatalogSnapshot::new(partners, remote_locations)?)
}

fn read_document(path: &Path) -> Result<Option<String>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}
