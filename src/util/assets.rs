use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static PARTNERS_JSON: OnceLock<String> = OnceLock::new();
static REMOTE_LOCATIONS_JSON: OnceLock<String> = OnceLock::new();

/// Returns the stock rate-card catalog as a static JSON string.
pub fn default_partners_json() -> &'static str {
    PARTNERS_JSON
        .get_or_init(|| load_text("/assets/partners.json"))
        .as_str()
}

/// Returns the stock remote-location set as a static JSON string.
pub fn default_remote_locations_json() -> &'static str {
    REMOTE_LOCATIONS_JSON
        .get_or_init(|| load_text("/assets/remote_locations.json"))
        .as_str()
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_documents_are_present_and_nonempty() {
        assert!(!default_partners_json().is_empty());
        assert!(!default_remote_locations_json().is_empty());
    }

    #[test]
    fn canonical_path_strips_leading_slash_and_folder() {
        assert_eq!(canonical_asset_path("/assets/partners.json"), "partners.json");
        assert_eq!(canonical_asset_path("assets/partners.json"), "partners.json");
        assert_eq!(canonical_asset_path("partners.json"), "partners.json");
    }
}
