//! Subscan API client implementation.
//!
//! The [`SubscanClient`] funnels every endpoint through one request pipeline:
//! build the URL, attach headers, hand the request to a [`Transport`], and
//! normalize the outcome into an [`ApiResponse`].
//!
//! # Example
//!
//! ```rust,ignore
//! use subscan::api::{BlockParams, SubscanClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SubscanClient::new("polkadot", None)?;
//!
//!     let now = client.timestamp();
//!     println!("Server time: {:?}", now.data());
//!
//!     let block = client.block(BlockParams::by_number(100))?;
//!     match block.into_result() {
//!         Ok(body) => println!("Block: {}", body),
//!         Err(e) => println!("Request failed: {}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use http::header::{HeaderName, CONTENT_TYPE};
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::response::{ApiResponse, ErrorEnvelope};
use crate::api::transport::{
    ApiRequest, HeaderMap, HeaderValue, Method, RawResponse, Transport, TransportError,
};
use crate::api::types::*;
use crate::network::{self, API_KEY_ENV, API_KEY_HEADER, NETWORK_ENV};
use crate::shared::now_epoch_secs;

/// Length of a `0x`-prefixed 32-byte hash.
const HASH_LENGTH: usize = 66;

/// Builder for configuring [`SubscanClient`].
#[derive(Clone)]
pub struct SubscanClientBuilder {
    network: String,
    api_key: Option<String>,
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
    transport: Option<Arc<dyn Transport>>,
}

impl SubscanClientBuilder {
    /// Create a new builder for the given network subdomain.
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            api_key: None,
            base_url: None,
            default_headers: Vec::new(),
            transport: None,
        }
    }

    /// Set the API key sent as `X-API-Key`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the API key when one is available.
    pub fn maybe_api_key(mut self, api_key: Option<impl Into<String>>) -> Self {
        self.api_key = api_key.map(Into::into);
        self
    }

    /// Override the base URL derived from the network (mirrors, tests).
    ///
    /// A trailing `/` is added if missing, since endpoint suffixes are
    /// appended verbatim.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = Some(base_url);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Send requests through a custom transport instead of the default
    /// blocking reqwest client.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Same as [`transport`](Self::transport) for a transport that is
    /// already shared.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<SubscanClient> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            default_headers.insert(header_name, header_value);
        }

        let api_key = match &self.api_key {
            Some(key) => {
                let mut value = HeaderValue::from_str(key).map_err(|e| {
                    ApiError::InvalidParameter(format!("Invalid API key: {}", e))
                })?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => Self::default_transport()?,
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| network::base_url(&self.network));

        Ok(SubscanClient {
            network: self.network,
            base_url,
            api_key,
            default_headers,
            transport,
        })
    }

    #[cfg(feature = "native")]
    fn default_transport() -> ApiResult<Arc<dyn Transport>> {
        Ok(Arc::new(crate::api::transport::ReqwestTransport::new()?))
    }

    #[cfg(not(feature = "native"))]
    fn default_transport() -> ApiResult<Arc<dyn Transport>> {
        Err(ApiError::Config(
            "No transport configured and the `native` feature is disabled".to_string(),
        ))
    }
}

impl fmt::Debug for SubscanClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscanClientBuilder")
            .field("network", &self.network)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

/// Subscan REST API client.
///
/// Holds immutable configuration only, so it is cheap to clone and safe to
/// share between threads. Every call blocks until the transport returns.
#[derive(Clone)]
pub struct SubscanClient {
    network: String,
    base_url: String,
    api_key: Option<HeaderValue>,
    default_headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for SubscanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscanClient")
            .field("network", &self.network)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl SubscanClient {
    /// Create a client for `network` with the default blocking transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(network: impl Into<String>, api_key: Option<&str>) -> ApiResult<Self> {
        SubscanClientBuilder::new(network)
            .maybe_api_key(api_key)
            .build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(network: impl Into<String>) -> SubscanClientBuilder {
        SubscanClientBuilder::new(network)
    }

    /// Create a client from `SUBSCAN_NETWORK` and `SUBSCAN_API_KEY`.
    ///
    /// An empty API key is treated as absent.
    pub fn from_env() -> ApiResult<Self> {
        Self::builder_from_env()?.build()
    }

    /// Builder preloaded from the environment, for further customization.
    pub fn builder_from_env() -> ApiResult<SubscanClientBuilder> {
        let network = std::env::var(NETWORK_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::Config(format!("{} is not set", NETWORK_ENV)))?;
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|value| !value.is_empty());

        Ok(SubscanClientBuilder::new(network).maybe_api_key(api_key))
    }

    /// Get the network name.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Get the base URL (always ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    // =========================================================================
    // Request pipeline
    // =========================================================================

    /// POST `payload` as JSON to `<base_url><suffix>`.
    ///
    /// Never fails: transport errors, non-2xx statuses and malformed bodies
    /// all come back as [`ApiResponse::Error`].
    pub fn post<B: Serialize + ?Sized>(&self, suffix: &str, payload: &B) -> ApiResponse {
        let url = self.url(suffix);
        let body = match serde_json::to_vec(payload) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to serialize request payload");
                return ApiResponse::error(format!("Request Error: {}", e));
            }
        };

        let mut headers = self.common_headers();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.execute(ApiRequest {
            method: Method::POST,
            url,
            headers,
            body: Some(body),
        })
    }

    /// GET `<base_url><suffix>` with `params` encoded as a query string.
    ///
    /// No endpoint method uses this; it is here for endpoints the client does
    /// not wrap.
    pub fn get<Q: Serialize + ?Sized>(&self, suffix: &str, params: &Q) -> ApiResponse {
        let mut url = self.url(suffix);
        let query = match serde_urlencoded::to_string(params) {
            Ok(query) => query,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to encode query parameters");
                return ApiResponse::error(format!("Request Error: {}", e));
            }
        };
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        self.execute(ApiRequest {
            method: Method::GET,
            url,
            headers: self.common_headers(),
            body: None,
        })
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    /// Builder headers plus the API key, shared by every method.
    fn common_headers(&self) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        if let Some(key) = &self.api_key {
            headers.insert(HeaderName::from_static(API_KEY_HEADER), key.clone());
        }
        headers
    }

    fn execute(&self, request: ApiRequest) -> ApiResponse {
        tracing::debug!(method = %request.method, url = %request.url, "Sending Subscan request");
        let result = self.transport.send(&request);
        Self::process_response(&request.url, result)
    }

    /// Normalize a transport outcome into an [`ApiResponse`].
    fn process_response(url: &str, result: Result<RawResponse, TransportError>) -> ApiResponse {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Unable to connect to Subscan");
                return ApiResponse::Error(ErrorEnvelope::response("unavailable"));
            }
        };

        if !response.is_success() {
            let envelope = ErrorEnvelope::response(response.status.as_u16());
            tracing::warn!(url = %url, status = response.status.as_u16(), "{}", envelope);
            return ApiResponse::Error(envelope);
        }

        match serde_json::from_str(&response.body) {
            Ok(value) => ApiResponse::Success(value),
            Err(e) => {
                tracing::warn!(url = %url, status = response.status.as_u16(), error = %e, "Malformed response body");
                ApiResponse::Error(ErrorEnvelope::response(format!("malformed body ({})", e)))
            }
        }
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    /// Validate a `0x`-prefixed 32-byte hex hash.
    fn validate_hash(value: &str, field: &'static str) -> ApiResult<()> {
        let Some(digits) = value.strip_prefix("0x") else {
            return Err(ApiError::InvalidHash {
                field,
                reason: "must start with 0x".to_string(),
            });
        };
        if value.len() != HASH_LENGTH {
            return Err(ApiError::InvalidHash {
                field,
                reason: format!("must be {} characters, got {}", HASH_LENGTH, value.len()),
            });
        }
        hex::decode(digits).map_err(|e| ApiError::InvalidHash {
            field,
            reason: format!("not valid hex: {}", e),
        })?;
        Ok(())
    }

    // =========================================================================
    // General endpoints
    // =========================================================================

    /// Current server timestamp.
    pub fn timestamp(&self) -> ApiResponse {
        self.post("now", &EmptyRequest::default())
    }

    /// Chain metadata (block height, counts, token info).
    pub fn metadata(&self) -> ApiResponse {
        self.post("scan/metadata", &EmptyRequest::default())
    }

    /// Latest blocks.
    pub fn blocks(&self, pagination: Pagination) -> ApiResponse {
        self.post("scan/blocks", &pagination)
    }

    /// A single block by hash or number.
    ///
    /// The hash wins when both are set and must be `0x` + 64 hex digits.
    /// With neither set an empty payload is sent.
    pub fn block(&self, params: BlockParams) -> ApiResult<ApiResponse> {
        let params = params.resolved();
        if let Some(hash) = &params.block_hash {
            Self::validate_hash(hash, "block_hash")?;
        }
        Ok(self.post("scan/block", &params))
    }

    /// Extrinsics matching the given filters.
    pub fn extrinsics(&self, params: ExtrinsicsParams) -> ApiResponse {
        self.post("scan/extrinsics", &params)
    }

    /// A single extrinsic by index or hash.
    pub fn extrinsic(&self, id: ExtrinsicId) -> ApiResponse {
        self.post("scan/extrinsic", &id)
    }

    /// Events matching the given filters.
    pub fn events(&self, params: EventsParams) -> ApiResponse {
        self.post("scan/events", &params)
    }

    /// A single event by index (`<block>-<position>`).
    pub fn event(&self, event_index: &str) -> ApiResponse {
        let request = EventRequest {
            event_index: event_index.to_string(),
        };
        self.post("scan/event", &request)
    }

    /// Search by block number, hash, extrinsic index or address.
    pub fn search(&self, key: &str) -> ApiResponse {
        let request = SearchRequest {
            key: key.to_string(),
        };
        self.post("scan/search", &request)
    }

    /// Daily (or hourly) aggregated statistics.
    pub fn daily(&self, params: DailyParams) -> ApiResponse {
        self.post("scan/daily", &params)
    }

    /// Transfers, optionally for one address and block range.
    pub fn transfers(&self, params: TransfersParams) -> ApiResponse {
        self.post("scan/transfers", &params)
    }

    /// Look up what a hash refers to (block, extrinsic, ...).
    pub fn check_hash(&self, hash: &str) -> ApiResult<ApiResponse> {
        Self::validate_hash(hash, "hash")?;
        let request = HashRequest {
            hash: hash.to_string(),
        };
        Ok(self.post("scan/check_hash", &request))
    }

    /// Account list.
    pub fn accounts(&self, params: AccountsParams) -> ApiResponse {
        self.post("scan/accounts", &params)
    }

    /// Native token information.
    pub fn token(&self) -> ApiResponse {
        self.post("scan/token", &EmptyRequest::default())
    }

    // =========================================================================
    // Account endpoints
    // =========================================================================

    /// Account details.
    pub fn account(&self, params: AccountParams) -> ApiResponse {
        self.post("open/account", &params)
    }

    /// Extrinsics signed by an account.
    pub fn account_extrinsics(&self, params: AddressPageParams) -> ApiResponse {
        self.post("open/account/extrinsics", &params)
    }

    // =========================================================================
    // Price endpoints
    // =========================================================================

    /// Currencies available for price conversion.
    pub fn currencies(&self) -> ApiResponse {
        self.post("open/currencies", &EmptyRequest::default())
    }

    /// Token price at `at` (epoch seconds or block number), now when `None`.
    pub fn price(&self, at: Option<i64>) -> ApiResponse {
        let request = PriceRequest {
            time: at.unwrap_or_else(now_epoch_secs),
        };
        self.post("open/price", &request)
    }

    /// Convert `value` from `base` to `quote`, at the current time unless
    /// `at` is set.
    pub fn price_converter(&self, params: PriceConverterParams) -> ApiResponse {
        let params = PriceConverterParams {
            at: Some(params.at.unwrap_or_else(now_epoch_secs)),
            ..params
        };
        self.post("open/price", &params)
    }

    // =========================================================================
    // Staking endpoints
    // =========================================================================

    /// Staking reward history of an account.
    pub fn staking_history(&self, params: AddressPageParams) -> ApiResponse {
        self.post("scan/staking_history", &params)
    }

    /// Bonded and unbonding balances of an account.
    pub fn staking_bond_list(&self, params: BondListParams) -> ApiResponse {
        self.post("wallet/bond_list", &params)
    }

    /// Active validator set.
    pub fn staking_validators(&self, params: ValidatorsParams) -> ApiResponse {
        self.post("scan/staking/validators", &params)
    }

    /// Waiting validators.
    pub fn staking_waiting(&self, params: ValidatorsParams) -> ApiResponse {
        self.post("scan/staking/waiting", &params)
    }

    /// Validators a nominator voted for.
    pub fn staking_voted(&self, params: VotedParams) -> ApiResponse {
        self.post("scan/staking/voted", &params)
    }

    /// Nominators of a validator.
    pub fn staking_nominators(&self, params: NominatorsParams) -> ApiResponse {
        self.post("scan/staking/nominators", &params)
    }

    /// Per-era statistics of a validator.
    pub fn staking_era_stat(&self, params: AddressPageParams) -> ApiResponse {
        self.post("scan/staking/era_stat", &params)
    }

    /// A single validator by stash address.
    pub fn staking_validator(&self, stash: &str) -> ApiResponse {
        let request = StashRequest {
            stash: stash.to_string(),
        };
        self.post("scan/staking/validator", &request)
    }

    /// Bond statistics of a validator.
    pub fn staking_bond_stat(&self, params: StashPageParams) -> ApiResponse {
        self.post("scan/staking/validator/bond_stat", &params)
    }

    /// Rewards and slashes of an account.
    pub fn staking_reward_slash(&self, params: AddressPageParams) -> ApiResponse {
        self.post("scan/account/reward_slash", &params)
    }

    /// Unbonding chunks of an account.
    pub fn staking_unbonding(&self, address: &str) -> ApiResponse {
        self.post("scan/staking/unbonding", &AddressRequest::new(address))
    }

    /// A single nominator.
    pub fn staking_nominator(&self, address: &str) -> ApiResponse {
        self.post("scan/staking/nominator", &AddressRequest::new(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::StatusCode;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    const HASH: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    /// Records every request and replies with a fixed outcome.
    struct StubTransport {
        reply: Result<RawResponse, TransportError>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl StubTransport {
        fn ok(body: &str) -> Arc<Self> {
            Self::replying(Ok(RawResponse::new(StatusCode::OK, body)))
        }

        fn replying(reply: Result<RawResponse, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn last(&self) -> ApiRequest {
            self.requests().pop().expect("no request sent")
        }

        fn last_body(&self) -> Value {
            self.last().json_body().expect("no JSON body")
        }
    }

    impl Transport for StubTransport {
        fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    fn client_with(stub: &Arc<StubTransport>, api_key: Option<&str>) -> SubscanClient {
        SubscanClient::builder("polkadot")
            .maybe_api_key(api_key)
            .shared_transport(stub.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);
        assert_eq!(client.network(), "polkadot");
        assert_eq!(client.base_url(), "https://polkadot.subscan.io/api/");
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_client_builder_base_url_override() {
        let stub = StubTransport::ok("{}");
        let client = SubscanClient::builder("polkadot")
            .base_url("http://127.0.0.1:8080/api")
            .shared_transport(stub.clone())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://127.0.0.1:8080/api/");
        client.timestamp();
        assert_eq!(stub.last().url, "http://127.0.0.1:8080/api/now");
    }

    #[test]
    fn test_client_builder_rejects_bad_header() {
        let stub = StubTransport::ok("{}");
        let result = SubscanClient::builder("polkadot")
            .header("Bad Header", "x")
            .shared_transport(stub.clone())
            .build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));

        let result = SubscanClient::builder("polkadot")
            .header("X-Trace", "a\r\nb")
            .shared_transport(stub.clone())
            .build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));

        let result = SubscanClient::builder("polkadot")
            .header("X-Trace", "a\u{0}b")
            .shared_transport(stub.clone())
            .build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_client_builder_rejects_bad_api_key() {
        let stub = StubTransport::ok("{}");
        let result = SubscanClient::builder("polkadot")
            .api_key("key\u{7f}")
            .shared_transport(stub.clone())
            .build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_builder_header_reaches_transport() {
        let stub = StubTransport::ok("{}");
        let client = SubscanClient::builder("polkadot")
            .header("X-Trace", "a\tb")
            .shared_transport(stub.clone())
            .build()
            .unwrap();

        assert!(client.metadata().is_success());
        assert_eq!(stub.last().header("x-trace"), Some("a\tb"));
    }

    #[test]
    fn test_from_env() {
        // All env mutation stays in this one test so nothing races on it.
        let saved_network = std::env::var(NETWORK_ENV).ok();
        let saved_key = std::env::var(API_KEY_ENV).ok();

        std::env::remove_var(NETWORK_ENV);
        std::env::set_var(API_KEY_ENV, "k");
        assert!(matches!(
            SubscanClient::builder_from_env(),
            Err(ApiError::Config(_))
        ));

        std::env::set_var(NETWORK_ENV, "kusama");
        std::env::set_var(API_KEY_ENV, "");
        let client = SubscanClient::builder_from_env()
            .unwrap()
            .transport(|_: &ApiRequest| -> Result<RawResponse, TransportError> {
                Ok(RawResponse::new(StatusCode::OK, "{}"))
            })
            .build()
            .unwrap();
        assert_eq!(client.network(), "kusama");
        assert_eq!(client.base_url(), "https://kusama.subscan.io/api/");
        assert!(!client.has_api_key());

        std::env::set_var(API_KEY_ENV, "env-key");
        let builder = SubscanClient::builder_from_env().unwrap();
        let stub = StubTransport::ok("{}");
        let client = builder.shared_transport(stub.clone()).build().unwrap();
        assert!(client.has_api_key());
        client.timestamp();
        assert_eq!(stub.last().header(API_KEY_HEADER), Some("env-key"));

        match saved_network {
            Some(value) => std::env::set_var(NETWORK_ENV, value),
            None => std::env::remove_var(NETWORK_ENV),
        }
        match saved_key {
            Some(value) => std::env::set_var(API_KEY_ENV, value),
            None => std::env::remove_var(API_KEY_ENV),
        }
    }

    #[test]
    fn test_account_payload() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        client.account(AccountParams::new("acc"));
        assert_eq!(stub.last_body(), json!({"address": "acc", "row": 0}));

        client.account(AccountParams::new("acc").with_row(5).with_page(2));
        assert_eq!(stub.last_body(), json!({"address": "acc", "row": 5, "page": 2}));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, Some("secret-key"));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_post_headers_without_api_key() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);
        client.metadata();

        let request = stub.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://polkadot.subscan.io/api/scan/metadata");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header(API_KEY_HEADER), None);
        assert_eq!(request.json_body(), Some(json!({})));
    }

    #[test]
    fn test_post_headers_with_api_key_and_defaults() {
        let stub = StubTransport::ok("{}");
        let client = SubscanClient::builder("kusama")
            .api_key("my-key")
            .header("X-Trace", "abc")
            .shared_transport(stub.clone())
            .build()
            .unwrap();
        client.token();

        let request = stub.last();
        assert_eq!(request.url, "https://kusama.subscan.io/api/scan/token");
        assert_eq!(request.header("x-api-key"), Some("my-key"));
        assert_eq!(request.header("X-Trace"), Some("abc"));
    }

    #[test]
    fn test_success_body_passes_through() {
        let body = r#"{"code":0,"message":"Success","data":{"blockNum":"123"}}"#;
        let stub = StubTransport::ok(body);
        let response = client_with(&stub, None).timestamp();

        assert_eq!(response, ApiResponse::Success(serde_json::from_str(body).unwrap()));
    }

    #[test]
    fn test_remote_error_fields_pass_through() {
        let body = r#"{"code":10004,"message":"Record Not Found","data":null}"#;
        let stub = StubTransport::ok(body);
        let response = client_with(&stub, None).search("nothing");

        assert!(response.is_success());
        assert_eq!(response.value().unwrap()["code"], json!(10004));
    }

    #[test]
    fn test_non_success_status_becomes_error_envelope() {
        let stub = StubTransport::replying(Ok(RawResponse::new(StatusCode::TOO_MANY_REQUESTS, "slow down")));
        let response = client_with(&stub, None).blocks(Pagination::default());

        assert_eq!(response.into_value(), json!({"error": "Response Error: 429"}));
    }

    #[test]
    fn test_transport_failure_becomes_error_envelope() {
        let stub = StubTransport::replying(Err(TransportError::Connect(
            "connection refused".to_string(),
        )));
        let response = client_with(&stub, None).timestamp();

        assert_eq!(response.error_message(), Some("Response Error: unavailable"));
    }

    #[test]
    fn test_malformed_body_becomes_error_envelope() {
        let stub = StubTransport::ok("<html>oops</html>");
        let response = client_with(&stub, None).timestamp();

        let message = response.error_message().unwrap();
        assert!(message.starts_with("Response Error: malformed body"));
    }

    #[test]
    fn test_get_encodes_query() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, Some("k"));
        let response = client.get("scan/blocks", &Pagination::new(5, 2));

        assert!(response.is_success());
        let request = stub.last();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://polkadot.subscan.io/api/scan/blocks?row=5&page=2");
        assert_eq!(request.header(API_KEY_HEADER), Some("k"));
        assert_eq!(request.header("Content-Type"), None);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_get_without_params_has_no_query() {
        let stub = StubTransport::ok("{}");
        client_with(&stub, None).get("now", &EmptyRequest::default());
        assert_eq!(stub.last().url, "https://polkadot.subscan.io/api/now");
    }

    #[test]
    fn test_validate_hash() {
        assert!(SubscanClient::validate_hash(HASH, "hash").is_ok());
        assert!(matches!(
            SubscanClient::validate_hash("0xAB", "hash"),
            Err(ApiError::InvalidHash { field: "hash", .. })
        ));
        let no_prefix = "a".repeat(66);
        assert!(SubscanClient::validate_hash(&no_prefix, "hash").is_err());
        let not_hex = format!("0x{}", "z".repeat(64));
        assert!(SubscanClient::validate_hash(&not_hex, "hash").is_err());
    }

    #[test]
    fn test_block_short_hash_fails_before_sending() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        let result = client.block(BlockParams::by_hash("0xAB"));
        assert!(matches!(result, Err(ApiError::InvalidHash { field: "block_hash", .. })));
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_block_hash_without_prefix_fails_before_sending() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        let result = client.block(BlockParams::by_hash("1234".repeat(16) + "ab"));
        assert!(result.is_err());
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_block_by_hash() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        client.block(BlockParams::by_hash(HASH)).unwrap();
        assert_eq!(stub.last().url, "https://polkadot.subscan.io/api/scan/block");
        assert_eq!(stub.last_body(), json!({"block_hash": HASH}));
    }

    #[test]
    fn test_block_by_number() {
        let stub = StubTransport::ok("{}");
        client_with(&stub, None)
            .block(BlockParams::by_number(100))
            .unwrap();
        assert_eq!(stub.last_body(), json!({"block_num": 100}));
    }

    #[test]
    fn test_block_hash_wins_over_number() {
        let stub = StubTransport::ok("{}");
        client_with(&stub, None)
            .block(BlockParams::by_number(100).with_hash(HASH))
            .unwrap();
        assert_eq!(stub.last_body(), json!({"block_hash": HASH}));
    }

    #[test]
    fn test_block_without_arguments_sends_empty_payload() {
        let stub = StubTransport::ok("{}");
        client_with(&stub, None)
            .block(BlockParams::default())
            .unwrap();
        assert_eq!(stub.last_body(), json!({}));
    }

    #[test]
    fn test_check_hash() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        assert!(client.check_hash("0x1234").is_err());
        assert!(stub.requests().is_empty());

        client.check_hash(HASH).unwrap();
        assert_eq!(stub.last().url, "https://polkadot.subscan.io/api/scan/check_hash");
        assert_eq!(stub.last_body(), json!({"hash": HASH}));
    }

    #[test]
    fn test_accounts_without_filters_sends_only_pagination() {
        let stub = StubTransport::ok("{}");
        client_with(&stub, None).accounts(AccountsParams::default());
        assert_eq!(stub.last_body(), json!({"row": 20, "page": 1}));
    }

    #[test]
    fn test_accounts_with_filters() {
        let stub = StubTransport::ok("{}");
        client_with(&stub, None).accounts(
            AccountsParams::new()
                .with_order(Order::Asc, "balance")
                .with_filter("validator")
                .with_page(50, 3),
        );
        assert_eq!(
            stub.last_body(),
            json!({
                "order": "asc",
                "order_field": "balance",
                "filter": "validator",
                "row": 50,
                "page": 3
            })
        );
    }

    #[test]
    fn test_price_converter_fills_current_time() {
        let stub = StubTransport::ok("{}");
        let before = now_epoch_secs();
        client_with(&stub, None).price_converter(PriceConverterParams::new(5.0, "USD", "DOT"));
        let after = now_epoch_secs();

        let body = stub.last_body();
        assert_eq!(body["value"], json!(5.0));
        assert_eq!(body["from"], json!("USD"));
        assert_eq!(body["quote"], json!("DOT"));
        let time = body["time"].as_i64().expect("time must be an integer");
        assert!(time >= before && time <= after);
    }

    #[test]
    fn test_price_converter_keeps_explicit_time() {
        let stub = StubTransport::ok("{}");
        client_with(&stub, None)
            .price_converter(PriceConverterParams::new(1.5, "DOT", "USD").at(1_600_000_000));
        assert_eq!(stub.last_body()["time"], json!(1_600_000_000));
    }

    #[test]
    fn test_price_defaults_to_now() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        client.price(Some(2_000_000));
        assert_eq!(stub.last_body(), json!({"time": 2_000_000}));

        client.price(None);
        assert!(stub.last_body()["time"].as_i64().unwrap() >= 1_600_000_000);
        assert_eq!(stub.last().url, "https://polkadot.subscan.io/api/open/price");
    }

    #[test]
    fn test_extrinsic_by_index_and_hash() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        client.extrinsic(ExtrinsicId::index("195906-2"));
        assert_eq!(stub.last_body(), json!({"extrinsic_index": "195906-2"}));

        client.extrinsic(ExtrinsicId::hash(HASH));
        assert_eq!(stub.last_body(), json!({"hash": HASH}));
    }

    #[test]
    fn test_endpoint_paths() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);
        let address = "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5";

        let check = |suffix: &str, response: ApiResponse| {
            assert!(response.is_success(), "{} failed", suffix);
            assert_eq!(
                stub.last().url,
                format!("https://polkadot.subscan.io/api/{}", suffix)
            );
        };

        check("now", client.timestamp());
        check("scan/metadata", client.metadata());
        check("scan/blocks", client.blocks(Pagination::default()));
        check("scan/extrinsics", client.extrinsics(ExtrinsicsParams::new()));
        check("scan/events", client.events(EventsParams::new()));
        check("scan/event", client.event("1-1"));
        check("scan/search", client.search("1"));
        check("scan/transfers", client.transfers(TransfersParams::new()));
        check("scan/token", client.token());
        check("open/account", client.account(AccountParams::new(address)));
        check(
            "open/account/extrinsics",
            client.account_extrinsics(AddressPageParams::new(address)),
        );
        check("open/currencies", client.currencies());
        check(
            "scan/staking_history",
            client.staking_history(AddressPageParams::new(address)),
        );
        check(
            "wallet/bond_list",
            client.staking_bond_list(BondListParams::new(address)),
        );
        check(
            "scan/staking/validators",
            client.staking_validators(ValidatorsParams::new()),
        );
        check(
            "scan/staking/waiting",
            client.staking_waiting(ValidatorsParams::new()),
        );
        check(
            "scan/staking/voted",
            client.staking_voted(VotedParams::new(address)),
        );
        check(
            "scan/staking/nominators",
            client.staking_nominators(NominatorsParams::new(address)),
        );
        check(
            "scan/staking/era_stat",
            client.staking_era_stat(AddressPageParams::new(address)),
        );
        check("scan/staking/validator", client.staking_validator(address));
        check(
            "scan/staking/validator/bond_stat",
            client.staking_bond_stat(StashPageParams::new(address)),
        );
        check(
            "scan/account/reward_slash",
            client.staking_reward_slash(AddressPageParams::new(address)),
        );
        check("scan/staking/unbonding", client.staking_unbonding(address));
        check("scan/staking/nominator", client.staking_nominator(address));
    }

    #[test]
    fn test_staking_payloads() {
        let stub = StubTransport::ok("{}");
        let client = client_with(&stub, None);

        client.staking_validator("stash1");
        assert_eq!(stub.last_body(), json!({"stash": "stash1"}));

        client.staking_bond_stat(StashPageParams::new("stash1").with_page(10, 2));
        assert_eq!(stub.last_body(), json!({"stash": "stash1", "row": 10, "page": 2}));

        client.staking_nominators(NominatorsParams::new("val").with_order(Order::Desc, "bonded"));
        assert_eq!(
            stub.last_body(),
            json!({"address": "val", "order": "desc", "order_field": "bonded", "row": 20, "page": 1})
        );

        client.staking_voted(VotedParams::new("nom"));
        assert_eq!(stub.last_body(), json!({"address": "nom"}));

        client.staking_unbonding("acc");
        assert_eq!(stub.last_body(), json!({"address": "acc"}));
    }

    #[test]
    fn test_concurrent_use_from_threads() {
        let stub = StubTransport::ok(r#"{"code":0}"#);
        let client = client_with(&stub, None);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let client = client.clone();
                std::thread::spawn(move || client.event(&format!("{}-0", i)))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_success());
        }
        assert_eq!(stub.requests().len(), 4);
    }
}
