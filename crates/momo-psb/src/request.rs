//! Typed request bodies, one per operation that sends a payload.
//!
//! Field names serialize to the provider's camelCase wire names. Reference ids
//! and callback URLs are not part of any body; they travel as headers via
//! [`NewResource`](crate::NewResource).

use serde::{Serialize, Serializer};

use crate::party::{Money, Party};

/// Body of `POST /v1_0/apiuser`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUserRequest {
    pub provider_callback_host: String,
}

/// Body shared by request-to-pay and request-to-withdraw.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub amount: f64,
    pub currency: String,
    pub external_id: String,
    pub payer: Party,
    pub payer_message: String,
    pub payee_note: String,
}

/// Body of `POST /collection/v2_0/invoice`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub external_id: String,
    pub amount: f64,
    pub currency: String,
    /// Seconds the invoice stays payable. Sent as a string.
    #[serde(serialize_with = "seconds_as_string")]
    pub validity_duration: u64,
    pub intended_payer: Party,
    pub payee: Party,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `DELETE /collection/v2_0/invoice/{referenceId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelInvoiceRequest {
    pub external_id: String,
}

/// Body of `POST /collection/v2_0/preapproval`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreApprovalRequest {
    pub payer: Party,
    pub payer_currency: String,
    pub payer_message: String,
    /// Seconds the pre-approval stays valid.
    pub validity_time: u64,
}

/// Body of `POST /collection/v2_0/payment` (bill payment or airtime top-up).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub external_transaction_id: String,
    pub money: Money,
    pub customer_reference: String,
    pub service_provider_user_name: String,
}

fn seconds_as_string<S: Serializer>(seconds: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::PartyIdType;
    use serde_json::json;

    #[test]
    fn test_invoice_duration_is_a_string_and_description_optional() {
        let invoice = InvoiceRequest {
            external_id: "inv-1".to_string(),
            amount: 250.5,
            currency: "EUR".to_string(),
            validity_duration: 3600,
            intended_payer: Party::msisdn("46733123450"),
            payee: Party::new(PartyIdType::Email, "shop@example.com"),
            description: None,
        };
        let body = serde_json::to_value(&invoice).unwrap();

        assert_eq!(body["validityDuration"], "3600");
        assert_eq!(body["intendedPayer"]["partyIdType"], "MSISDN");
        assert_eq!(body["payee"]["partyIdType"], "EMAIL");
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_payment_nests_money() {
        let payment = PaymentRequest {
            external_transaction_id: "tx-9".to_string(),
            money: Money::new(10.0, "EUR"),
            customer_reference: "cust-1".to_string(),
            service_provider_user_name: "airtime".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payment).unwrap(),
            json!({
                "externalTransactionId": "tx-9",
                "money": {"amount": 10.0, "currency": "EUR"},
                "customerReference": "cust-1",
                "serviceProviderUserName": "airtime"
            })
        );
    }

    #[test]
    fn test_pre_approval_field_names() {
        let pre = PreApprovalRequest {
            payer: Party::msisdn("46733123450"),
            payer_currency: "EUR".to_string(),
            payer_message: "Monthly plan".to_string(),
            validity_time: 86_400,
        };
        let body = serde_json::to_value(&pre).unwrap();
        assert_eq!(body["payerCurrency"], "EUR");
        assert_eq!(body["payerMessage"], "Monthly plan");
        assert_eq!(body["validityTime"], 86_400);
    }
}
