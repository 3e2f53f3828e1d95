//! Shared test transports for MoMo client integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use momo_psb::{
    ApiRequest, ApiResponse, ClientConfig, MomoError, Party, PaymentClient, Transport,
    TransferRequest,
};

pub const BASE_URL: &str = "https://sandbox.momodeveloper.mtn.com";
pub const SUBSCRIPTION_KEY: &str = "test-subscription-key";
pub const CALLBACK_URL: &str = "https://merchant.example.com/momo/callback";

type Responder = Box<dyn Fn(&ApiRequest) -> ApiResponse + Send + Sync>;

/// Records every request and answers with a caller-provided responder.
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responder: Responder,
}

impl MockTransport {
    pub fn new(responder: impl Fn(&ApiRequest) -> ApiResponse + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Always answers with the same status and body.
    pub fn fixed(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| response(status, &body))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, MomoError> {
        let resp = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        Ok(resp)
    }
}

/// Fails every exchange as if the network were down.
pub struct UnreachableTransport;

impl Transport for UnreachableTransport {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, MomoError> {
        Err(MomoError::Transport("connection refused".to_string()))
    }
}

pub fn response(status: u16, body: &str) -> ApiResponse {
    ApiResponse::new(status, body, BTreeMap::new())
}

pub fn client_with<T: Transport>(transport: T) -> PaymentClient<T> {
    let config = ClientConfig::new(BASE_URL, SUBSCRIPTION_KEY).unwrap();
    PaymentClient::with_transport(config, transport)
}

pub fn sample_transfer() -> TransferRequest {
    TransferRequest {
        amount: 100.00,
        currency: "EUR".to_string(),
        external_id: "e1".to_string(),
        payer: Party::msisdn("+2348056042321"),
        payer_message: "Payment for services".to_string(),
        payee_note: "Thank you".to_string(),
    }
}
