//! Network constants for the Subscan SDK.

/// Base URL template. `{network}` is replaced with the network subdomain.
pub const BASE_URL_TEMPLATE: &str = "https://{network}.subscan.io/api/";

/// Environment variable holding the network subdomain (e.g. `polkadot`).
pub const NETWORK_ENV: &str = "SUBSCAN_NETWORK";

/// Environment variable holding the optional API key.
pub const API_KEY_ENV: &str = "SUBSCAN_API_KEY";

/// Header carrying the API key (`X-API-Key`), lowercase as HTTP/2 sends it.
pub const API_KEY_HEADER: &str = "x-api-key";

pub const POLKADOT: &str = "polkadot";
pub const KUSAMA: &str = "kusama";
pub const WESTEND: &str = "westend";
pub const DARWINIA: &str = "darwinia";

/// Build the API base URL for a network.
///
/// The network is interpolated as-is, callers must supply a valid subdomain.
pub fn base_url(network: &str) -> String {
    BASE_URL_TEMPLATE.replace("{network}", network)
}
