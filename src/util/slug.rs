/// Derive the logo asset hint for a partner name: lowercase, with only the
/// FIRST space removed.
///
/// Yes, only the first. Existing asset paths were generated with exactly this
/// transform, so "Polar Route Express" must keep mapping to
/// "polarroute express" and not to "polarrouteexpress". Do not "fix" this
/// without migrating the asset store.
pub fn logo_asset_hint(partner_name: &str) -> String {
    partner_name.to_lowercase().replacen(' ', "", 1)
}
