//! [`PaymentClient`]: one method per MoMo operation.

use reqwest::Method;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::constants::{CLIENT_CREDENTIALS_GRANT, DEFAULT_TARGET_ENVIRONMENT};
use crate::context::{CallContext, NewResource};
use crate::error::MomoError;
use crate::headers::RequestHeaders;
use crate::party::PartyIdType;
use crate::request::{
    ApiUserRequest, CancelInvoiceRequest, InvoiceRequest, PaymentRequest, PreApprovalRequest,
    TransferRequest,
};
use crate::response::{ApiResponse, Raw, ResponsePolicy, Validated};
use crate::transport::{ApiRequest, HttpTransport, RequestBody, Transport};

/// Client for the MoMo provisioning, token and collection APIs.
///
/// Holds only immutable configuration and a transport, so a single instance
/// can be shared across tasks. Headers are assembled fresh for every call.
pub struct PaymentClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl PaymentClient<HttpTransport> {
    /// Client over the default reqwest transport.
    pub fn new(base_url: &str, subscription_key: &str) -> Result<Self, MomoError> {
        let config = ClientConfig::new(base_url, subscription_key)?;
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    /// Client configured from `MOMO_BASE_URL` / `MOMO_SUBSCRIPTION_KEY`.
    pub fn from_env() -> Result<Self, MomoError> {
        Ok(Self::with_transport(
            ClientConfig::from_env()?,
            HttpTransport::new()?,
        ))
    }
}

impl<T: Transport> PaymentClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn headers(&self) -> RequestHeaders {
        RequestHeaders::new(self.config.subscription_key())
    }

    /// Single dispatch point: send, then apply the operation's policy.
    async fn call<P: ResponsePolicy>(
        &self,
        operation: &'static str,
        method: Method,
        path: String,
        headers: RequestHeaders,
        body: RequestBody,
    ) -> Result<P::Output, MomoError> {
        let request = ApiRequest {
            method,
            url: self.config.url(&path),
            headers,
            body,
        };
        tracing::debug!(
            operation,
            method = %request.method,
            url = %request.url,
            "sending MoMo request"
        );

        let response = self.transport.send(request).await?;
        tracing::debug!(operation, status = response.status(), "MoMo response received");

        P::apply(response)
    }

    // ── Provisioning ────────────────────────────────────────────────────

    /// `POST /v1_0/apiuser`. Expect 201 on success.
    pub async fn create_api_user(
        &self,
        reference_id: &str,
        provider_callback_host: &str,
    ) -> Result<ApiResponse, MomoError> {
        let body = json_body(&ApiUserRequest {
            provider_callback_host: provider_callback_host.to_string(),
        })?;
        let headers = self.headers().reference_id(reference_id);
        self.call::<Raw>(
            "create_api_user",
            Method::POST,
            "/v1_0/apiuser".to_string(),
            headers,
            body,
        )
        .await
    }

    /// `POST /v1_0/apiuser/{api_user}/apikey`. The body carries `apiKey`
    /// (see [`ApiKeyResponse`](crate::ApiKeyResponse)).
    pub async fn create_api_key(&self, api_user: &str) -> Result<ApiResponse, MomoError> {
        self.call::<Raw>(
            "create_api_key",
            Method::POST,
            format!("/v1_0/apiuser/{}/apikey", segment(api_user)),
            self.headers(),
            RequestBody::Empty,
        )
        .await
    }

    /// `GET /v1_0/apiuser/{api_user}`.
    pub async fn get_api_user_details(&self, api_user: &str) -> Result<ApiResponse, MomoError> {
        self.call::<Raw>(
            "get_api_user_details",
            Method::GET,
            format!("/v1_0/apiuser/{}", segment(api_user)),
            self.headers(),
            RequestBody::Empty,
        )
        .await
    }

    /// `POST /collection/token/` with HTTP Basic credentials.
    ///
    /// The body carries `access_token` and `expires_in`
    /// (see [`TokenResponse`](crate::TokenResponse)).
    pub async fn get_oauth_token(
        &self,
        api_user: &str,
        api_key: &str,
        target_environment: Option<&str>,
    ) -> Result<ApiResponse, MomoError> {
        let headers = self
            .headers()
            .basic(api_user, api_key)
            .target_environment(target_environment.unwrap_or(DEFAULT_TARGET_ENVIRONMENT));
        let body = RequestBody::Form(vec![(
            "grant_type".to_string(),
            CLIENT_CREDENTIALS_GRANT.to_string(),
        )]);
        self.call::<Raw>(
            "get_oauth_token",
            Method::POST,
            "/collection/token/".to_string(),
            headers,
            body,
        )
        .await
    }

    // ── Request to pay / withdraw ───────────────────────────────────────

    /// `POST /collection/v1_0/requesttopay`. Usually 202 with an empty body.
    pub async fn request_to_pay(
        &self,
        ctx: &CallContext,
        resource: &NewResource,
        transfer: &TransferRequest,
    ) -> Result<ApiResponse, MomoError> {
        self.create(
            "request_to_pay",
            "/collection/v1_0/requesttopay",
            ctx,
            resource,
            transfer,
        )
        .await
    }

    /// `GET /collection/v1_0/requesttopay/{reference_id}`. Body has `status`.
    pub async fn get_request_to_pay_status(
        &self,
        ctx: &CallContext,
        reference_id: &str,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "get_request_to_pay_status",
            format!("/collection/v1_0/requesttopay/{}", segment(reference_id)),
            ctx,
        )
        .await
    }

    /// `POST /collection/v1_0/requesttowithdraw`.
    pub async fn request_to_withdraw(
        &self,
        ctx: &CallContext,
        resource: &NewResource,
        transfer: &TransferRequest,
    ) -> Result<ApiResponse, MomoError> {
        self.create(
            "request_to_withdraw",
            "/collection/v1_0/requesttowithdraw",
            ctx,
            resource,
            transfer,
        )
        .await
    }

    /// `GET /collection/v1_0/requesttowithdraw/{reference_id}`. Body has `status`.
    pub async fn get_request_to_withdraw_status(
        &self,
        ctx: &CallContext,
        reference_id: &str,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "get_request_to_withdraw_status",
            format!("/collection/v1_0/requesttowithdraw/{}", segment(reference_id)),
            ctx,
        )
        .await
    }

    // ── Account ─────────────────────────────────────────────────────────

    /// `GET /collection/v1_0/account/balance`. The body is returned as sent;
    /// a missing `balance` field is not an error.
    pub async fn get_account_balance(
        &self,
        ctx: &CallContext,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "get_account_balance",
            "/collection/v1_0/account/balance".to_string(),
            ctx,
        )
        .await
    }

    /// `GET /collection/v1_0/accountholder/{id_type}/{id}/active`.
    pub async fn validate_account_holder_status(
        &self,
        ctx: &CallContext,
        id_type: PartyIdType,
        id: &str,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "validate_account_holder_status",
            format!(
                "/collection/v1_0/accountholder/{}/{}/active",
                id_type.as_path_segment(),
                segment(id)
            ),
            ctx,
        )
        .await
    }

    /// `GET /collection/v1_0/accountholder/{id_type}/{id}/basicuserinfo`.
    pub async fn get_basic_user_info(
        &self,
        ctx: &CallContext,
        id_type: PartyIdType,
        id: &str,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "get_basic_user_info",
            format!(
                "/collection/v1_0/accountholder/{}/{}/basicuserinfo",
                id_type.as_path_segment(),
                segment(id)
            ),
            ctx,
        )
        .await
    }

    // ── Invoices ────────────────────────────────────────────────────────

    /// `POST /collection/v2_0/invoice`.
    pub async fn create_invoice(
        &self,
        ctx: &CallContext,
        resource: &NewResource,
        invoice: &InvoiceRequest,
    ) -> Result<ApiResponse, MomoError> {
        self.create(
            "create_invoice",
            "/collection/v2_0/invoice",
            ctx,
            resource,
            invoice,
        )
        .await
    }

    /// `GET /collection/v2_0/invoice/{reference_id}`.
    pub async fn get_invoice_status(
        &self,
        ctx: &CallContext,
        reference_id: &str,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "get_invoice_status",
            format!("/collection/v2_0/invoice/{}", segment(reference_id)),
            ctx,
        )
        .await
    }

    /// `DELETE /collection/v2_0/invoice/{reference_id}` with `{externalId}`.
    pub async fn cancel_invoice(
        &self,
        ctx: &CallContext,
        reference_id: &str,
        cancel: &CancelInvoiceRequest,
    ) -> Result<ApiResponse, MomoError> {
        self.call::<Raw>(
            "cancel_invoice",
            Method::DELETE,
            format!("/collection/v2_0/invoice/{}", segment(reference_id)),
            self.headers().context(ctx),
            json_body(cancel)?,
        )
        .await
    }

    // ── Pre-approvals ───────────────────────────────────────────────────

    /// `POST /collection/v2_0/preapproval`.
    pub async fn create_pre_approval(
        &self,
        ctx: &CallContext,
        resource: &NewResource,
        pre_approval: &PreApprovalRequest,
    ) -> Result<ApiResponse, MomoError> {
        self.create(
            "create_pre_approval",
            "/collection/v2_0/preapproval",
            ctx,
            resource,
            pre_approval,
        )
        .await
    }

    /// `GET /collection/v2_0/preapproval/{reference_id}`.
    pub async fn get_pre_approval_status(
        &self,
        ctx: &CallContext,
        reference_id: &str,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "get_pre_approval_status",
            format!("/collection/v2_0/preapproval/{}", segment(reference_id)),
            ctx,
        )
        .await
    }

    /// `DELETE /collection/v1_0/preapproval/{pre_approval_id}`.
    pub async fn cancel_pre_approval(
        &self,
        ctx: &CallContext,
        pre_approval_id: &str,
    ) -> Result<ApiResponse, MomoError> {
        self.call::<Raw>(
            "cancel_pre_approval",
            Method::DELETE,
            format!("/collection/v1_0/preapproval/{}", segment(pre_approval_id)),
            self.headers().context(ctx),
            RequestBody::Empty,
        )
        .await
    }

    /// `GET /collection/v1_0/preapprovals/{id_type}/{id}`: approved
    /// pre-approvals of an account holder, in provider order.
    pub async fn get_approved_pre_approvals(
        &self,
        ctx: &CallContext,
        id_type: PartyIdType,
        id: &str,
    ) -> Result<Vec<serde_json::Value>, MomoError> {
        self.call::<Validated<Vec<serde_json::Value>>>(
            "get_approved_pre_approvals",
            Method::GET,
            format!(
                "/collection/v1_0/preapprovals/{}/{}",
                id_type.as_path_segment(),
                segment(id)
            ),
            self.headers().context(ctx),
            RequestBody::Empty,
        )
        .await
    }

    // ── Payments ────────────────────────────────────────────────────────

    /// `POST /collection/v2_0/payment`.
    pub async fn create_payment(
        &self,
        ctx: &CallContext,
        resource: &NewResource,
        payment: &PaymentRequest,
    ) -> Result<ApiResponse, MomoError> {
        self.create(
            "create_payment",
            "/collection/v2_0/payment",
            ctx,
            resource,
            payment,
        )
        .await
    }

    /// `GET /collection/v2_0/payment/{reference_id}`. Body has `status`.
    pub async fn get_payment_status(
        &self,
        ctx: &CallContext,
        reference_id: &str,
    ) -> Result<serde_json::Value, MomoError> {
        self.query(
            "get_payment_status",
            format!("/collection/v2_0/payment/{}", segment(reference_id)),
            ctx,
        )
        .await
    }

    // ── Shared shapes ───────────────────────────────────────────────────

    /// Authenticated, environment-scoped POST that creates a resource.
    async fn create<B: Serialize>(
        &self,
        operation: &'static str,
        path: &str,
        ctx: &CallContext,
        resource: &NewResource,
        payload: &B,
    ) -> Result<ApiResponse, MomoError> {
        let headers = self.headers().context(ctx).resource(resource);
        self.call::<Raw>(
            operation,
            Method::POST,
            path.to_string(),
            headers,
            json_body(payload)?,
        )
        .await
    }

    /// Authenticated, environment-scoped GET with a validated JSON result.
    async fn query(
        &self,
        operation: &'static str,
        path: String,
        ctx: &CallContext,
    ) -> Result<serde_json::Value, MomoError> {
        self.call::<Validated>(
            operation,
            Method::GET,
            path,
            self.headers().context(ctx),
            RequestBody::Empty,
        )
        .await
    }
}

fn json_body<B: Serialize>(payload: &B) -> Result<RequestBody, MomoError> {
    serde_json::to_value(payload)
        .map(RequestBody::Json)
        .map_err(|e| MomoError::Encode(e.to_string()))
}

/// Escapes RFC 3986 allows to stay literal inside a path segment.
const SEGMENT_LITERALS: [(&str, &str); 13] = [
    ("%2B", "+"),
    ("%40", "@"),
    ("%3A", ":"),
    ("%21", "!"),
    ("%24", "$"),
    ("%26", "&"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
    ("%2C", ","),
    ("%3B", ";"),
    ("%3D", "="),
];

/// Percent-encode a caller-supplied path segment.
///
/// `/`, `?`, `#`, `%` and whitespace are escaped. Sub-delimiters, `:` and `@`
/// stay literal, so an MSISDN such as `+2348056042321` goes out unchanged.
fn segment(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escaped, literal) in SEGMENT_LITERALS {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, literal);
        }
    }
    encoded
}
