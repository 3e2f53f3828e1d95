/// MoMo developer sandbox endpoint.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.momodeveloper.mtn.com";

/// Target environment used when a call does not name one.
pub const DEFAULT_TARGET_ENVIRONMENT: &str = "sandbox";

/// API Manager subscription key, sent on every request.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Bearer or Basic credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Provider deployment tag (sandbox, mtnuganda, ...).
pub const TARGET_ENVIRONMENT_HEADER: &str = "X-Target-Environment";

/// Caller-generated UUID of the resource being created.
pub const REFERENCE_ID_HEADER: &str = "X-Reference-Id";

/// Where the provider posts the final state of a created resource.
pub const CALLBACK_URL_HEADER: &str = "X-Callback-Url";

/// OAuth2 grant used by the token endpoint.
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";
