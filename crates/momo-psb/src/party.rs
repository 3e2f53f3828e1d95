use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a party (payer, payee, account holder) is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyIdType {
    Msisdn,
    Email,
    PartyCode,
}

impl PartyIdType {
    /// Wire name used in JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyIdType::Msisdn => "MSISDN",
            PartyIdType::Email => "EMAIL",
            PartyIdType::PartyCode => "PARTY_CODE",
        }
    }

    /// Lowercase form used in account-holder paths.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            PartyIdType::Msisdn => "msisdn",
            PartyIdType::Email => "email",
            PartyIdType::PartyCode => "party_code",
        }
    }
}

impl fmt::Display for PartyIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyIdType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "msisdn" => Ok(PartyIdType::Msisdn),
            "email" => Ok(PartyIdType::Email),
            "party_code" | "party-code" | "partycode" => Ok(PartyIdType::PartyCode),
            other => Err(format!(
                "unknown party id type '{other}' (expected MSISDN, EMAIL or PARTY_CODE)"
            )),
        }
    }
}

/// A payer, payee or intended payer. The id format is checked by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub party_id_type: PartyIdType,
    pub party_id: String,
}

impl Party {
    pub fn new(party_id_type: PartyIdType, party_id: impl Into<String>) -> Self {
        Self {
            party_id_type,
            party_id: party_id.into(),
        }
    }

    pub fn msisdn(number: impl Into<String>) -> Self {
        Self::new(PartyIdType::Msisdn, number)
    }
}

/// Amount plus ISO-4217 currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}
