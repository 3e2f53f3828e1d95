//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use momo_psb::{PartyIdType, DEFAULT_TARGET_ENVIRONMENT, SANDBOX_BASE_URL};

#[derive(Parser, Debug)]
#[command(name = "momo-psb", version)]
#[command(about = "MTN MoMo Payment Service Bank CLI", long_about = None)]
pub struct Cli {
    /// Base URL of the MoMo API
    #[arg(long, env = "MOMO_BASE_URL", default_value = SANDBOX_BASE_URL)]
    pub base_url: String,

    /// Subscription key from the API Manager portal
    #[arg(long, env = "MOMO_SUBSCRIPTION_KEY", hide_env_values = true)]
    pub subscription_key: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// API user and credential management
    #[command(subcommand)]
    User(UserCommands),

    /// Account balance and account holder lookups
    #[command(subcommand)]
    Account(AccountCommands),

    /// Requests to pay and bill payments
    #[command(subcommand)]
    Payment(PaymentCommands),

    /// Requests to withdraw
    #[command(subcommand)]
    Withdraw(WithdrawCommands),

    /// Invoices
    #[command(subcommand)]
    Invoice(InvoiceCommands),

    /// Pre-approvals
    #[command(subcommand)]
    Preapproval(PreapprovalCommands),
}

/// Bearer token and target environment shared by collection commands.
#[derive(Args, Debug, Clone)]
pub struct AuthArgs {
    /// Bearer authentication token
    #[arg(long, env = "MOMO_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Target environment
    #[arg(long, env = "MOMO_TARGET_ENVIRONMENT", default_value = DEFAULT_TARGET_ENVIRONMENT)]
    pub environment: String,
}

/// Callback target for commands that create a resource.
#[derive(Args, Debug, Clone)]
pub struct CallbackArgs {
    /// URL the provider notifies with the final state
    #[arg(long, env = "MOMO_CALLBACK_URL")]
    pub callback_url: String,
}

/// Amount, payer and messages of a request to pay or withdraw.
#[derive(Args, Debug, Clone)]
pub struct TransferArgs {
    /// Amount to request
    #[arg(long)]
    pub amount: f64,

    /// ISO-4217 currency code (e.g. EUR)
    #[arg(long)]
    pub currency: String,

    /// Payer id
    #[arg(long)]
    pub payer_id: String,

    /// Payer id type (MSISDN, EMAIL, PARTY_CODE)
    #[arg(long, default_value = "MSISDN")]
    pub payer_id_type: PartyIdType,

    /// Message shown in the payer's transaction history
    #[arg(long)]
    pub message: String,

    /// Note shown in the payee's transaction history
    #[arg(long)]
    pub note: String,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a new API user
    Create {
        /// Provider callback host
        #[arg(long)]
        callback_host: String,
    },

    /// Create a new API key for a user
    CreateKey { api_user: String },

    /// Show API user details
    GetDetails { api_user: String },

    /// Exchange user id and API key for an OAuth token
    GetToken {
        api_user: String,
        api_key: String,

        /// Target environment
        #[arg(long, env = "MOMO_TARGET_ENVIRONMENT", default_value = DEFAULT_TARGET_ENVIRONMENT)]
        environment: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Show the account balance
    Balance {
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Check whether an account holder is active
    ValidateHolder {
        #[command(flatten)]
        auth: AuthArgs,

        /// Account holder id type
        #[arg(long)]
        id_type: PartyIdType,

        /// Account holder id
        #[arg(long)]
        id: String,
    },

    /// Show basic user information of an account holder
    BasicInfo {
        #[command(flatten)]
        auth: AuthArgs,

        /// Account holder id type
        #[arg(long)]
        id_type: PartyIdType,

        /// Account holder id
        #[arg(long)]
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PaymentCommands {
    /// Request a payment from a payer
    Request {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(flatten)]
        callback: CallbackArgs,

        #[command(flatten)]
        transfer: TransferArgs,
    },

    /// Show the status of a request to pay
    Status {
        #[command(flatten)]
        auth: AuthArgs,

        reference_id: String,
    },

    /// Create a bill payment or airtime top-up
    Create {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(flatten)]
        callback: CallbackArgs,

        /// External transaction id
        #[arg(long)]
        external_id: String,

        /// Amount
        #[arg(long)]
        amount: f64,

        /// Currency code
        #[arg(long)]
        currency: String,

        /// Customer reference at the service provider
        #[arg(long)]
        customer_ref: String,

        /// Service provider user name
        #[arg(long)]
        provider_user: String,
    },

    /// Show the status of a payment created with `payment create`
    PaymentStatus {
        #[command(flatten)]
        auth: AuthArgs,

        reference_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum WithdrawCommands {
    /// Request a withdrawal
    Request {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(flatten)]
        callback: CallbackArgs,

        #[command(flatten)]
        transfer: TransferArgs,
    },

    /// Show the status of a withdrawal request
    Status {
        #[command(flatten)]
        auth: AuthArgs,

        reference_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum InvoiceCommands {
    /// Create an invoice
    Create {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(flatten)]
        callback: CallbackArgs,

        /// External id
        #[arg(long)]
        external_id: String,

        /// Amount
        #[arg(long)]
        amount: f64,

        /// Currency code
        #[arg(long)]
        currency: String,

        /// Validity duration in seconds
        #[arg(long)]
        validity: u64,

        /// Intended payer id
        #[arg(long)]
        payer_id: String,

        /// Intended payer id type
        #[arg(long, default_value = "MSISDN")]
        payer_id_type: PartyIdType,

        /// Payee id
        #[arg(long)]
        payee_id: String,

        /// Payee id type
        #[arg(long, default_value = "MSISDN")]
        payee_id_type: PartyIdType,

        /// Invoice description
        #[arg(long)]
        description: Option<String>,
    },

    /// Show invoice status
    Status {
        #[command(flatten)]
        auth: AuthArgs,

        reference_id: String,
    },

    /// Cancel an invoice
    Cancel {
        #[command(flatten)]
        auth: AuthArgs,

        reference_id: String,

        /// External id of the invoice
        #[arg(long)]
        external_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PreapprovalCommands {
    /// Create a pre-approval
    Create {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(flatten)]
        callback: CallbackArgs,

        /// Payer id
        #[arg(long)]
        payer_id: String,

        /// Payer id type
        #[arg(long, default_value = "MSISDN")]
        payer_id_type: PartyIdType,

        /// Payer currency
        #[arg(long)]
        currency: String,

        /// Message to the payer
        #[arg(long)]
        message: String,

        /// Validity time in seconds
        #[arg(long)]
        validity: u64,
    },

    /// Show pre-approval status
    Status {
        #[command(flatten)]
        auth: AuthArgs,

        reference_id: String,
    },

    /// Cancel a pre-approval
    Cancel {
        #[command(flatten)]
        auth: AuthArgs,

        preapproval_id: String,
    },

    /// List approved pre-approvals of an account holder
    ListApproved {
        #[command(flatten)]
        auth: AuthArgs,

        /// Account holder id type
        #[arg(long)]
        id_type: PartyIdType,

        /// Account holder id
        #[arg(long)]
        id: String,
    },
}
