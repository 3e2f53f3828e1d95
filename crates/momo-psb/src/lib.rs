//! Typed client for the MTN MoMo collection API.
//!
//! Covers the three concerns of a MoMo integration:
//!
//! - **Provisioning**: create an API user and its API key
//! - **Authentication**: exchange the user/key pair for an OAuth2 bearer token
//! - **Collection**: request-to-pay, withdrawals, invoices, pre-approvals,
//!   payments, balance and status queries
//!
//! Every operation is one HTTP exchange. Mutating operations hand back the raw
//! [`ApiResponse`] and leave status interpretation to the caller; query
//! operations validate the status code and decode the JSON body, failing with
//! [`MomoError::Remote`] otherwise.
//!
//! # Quick example
//!
//! ```no_run
//! use momo_psb::{CallContext, NewResource, Party, PartyIdType, PaymentClient, TransferRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), momo_psb::MomoError> {
//! let client = PaymentClient::new("https://sandbox.momodeveloper.mtn.com", "SUBSCRIPTION_KEY")?;
//! let ctx = CallContext::new("ACCESS_TOKEN");
//!
//! let transfer = TransferRequest {
//!     amount: 100.0,
//!     currency: "EUR".to_string(),
//!     external_id: "order-42".to_string(),
//!     payer: Party::new(PartyIdType::Msisdn, "46733123450"),
//!     payer_message: "Payment for services".to_string(),
//!     payee_note: "Thank you".to_string(),
//! };
//! let target = NewResource::new("0b6d5ad8-0f57-4c8b-9c3e-7b2f3c1f6a10", "https://example.com/momo");
//!
//! let resp = client.request_to_pay(&ctx, &target, &transfer).await?;
//! println!("accepted: {}", resp.is_success());
//!
//! let status = client.get_request_to_pay_status(&ctx, target.reference_id()).await?;
//! println!("{}", status["status"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod headers;
pub mod party;
pub mod request;
pub mod response;
pub mod transport;

pub use client::PaymentClient;
pub use config::ClientConfig;
pub use constants::*;
pub use context::{CallContext, NewResource};
pub use error::MomoError;
pub use headers::RequestHeaders;
pub use party::{Money, Party, PartyIdType};
pub use request::*;
pub use response::{
    ApiKeyResponse, ApiResponse, Raw, ResponsePolicy, TokenResponse, Validated, SUCCESS_STATUSES,
};
pub use transport::{ApiRequest, HttpTransport, RequestBody, Transport};
