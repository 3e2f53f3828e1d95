//! Command handlers for the momo-psb CLI.
//!
//! Each match arm maps one command onto one [`PaymentClient`] operation.
//! Resource-creating commands generate their reference id (and external id
//! where the body needs one) with UUID v4 and print it so the caller can poll.

use std::io::Write;

use momo_psb::{
    CallContext, CancelInvoiceRequest, InvoiceRequest, Money, NewResource, Party, PaymentClient,
    PaymentRequest, PreApprovalRequest, TransferRequest, Transport,
};
use uuid::Uuid;

use crate::commands::{
    AccountCommands, AuthArgs, CallbackArgs, Commands, InvoiceCommands, PaymentCommands,
    PreapprovalCommands, TransferArgs, UserCommands, WithdrawCommands,
};
use crate::error::CliError;
use crate::output::{print_created, print_json, print_response};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn context(auth: &AuthArgs) -> CallContext {
    CallContext::new(auth.access_token.as_str()).with_environment(auth.environment.as_str())
}

fn resource(callback: &CallbackArgs) -> NewResource {
    NewResource::new(new_id(), callback.callback_url.as_str())
}

fn transfer(args: TransferArgs) -> TransferRequest {
    TransferRequest {
        amount: args.amount,
        currency: args.currency,
        external_id: new_id(),
        payer: Party::new(args.payer_id_type, args.payer_id),
        payer_message: args.message,
        payee_note: args.note,
    }
}

/// Execute a CLI command against `client`, writing results to `out`.
pub async fn execute<T: Transport, W: Write>(
    client: &PaymentClient<T>,
    command: Commands,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Commands::User(cmd) => user(client, cmd, out).await,
        Commands::Account(cmd) => account(client, cmd, out).await,
        Commands::Payment(cmd) => payment(client, cmd, out).await,
        Commands::Withdraw(cmd) => withdraw(client, cmd, out).await,
        Commands::Invoice(cmd) => invoice(client, cmd, out).await,
        Commands::Preapproval(cmd) => preapproval(client, cmd, out).await,
    }
}

async fn user<T: Transport, W: Write>(
    client: &PaymentClient<T>,
    command: UserCommands,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        UserCommands::Create { callback_host } => {
            let reference_id = new_id();
            let resp = client.create_api_user(&reference_id, &callback_host).await?;
            print_created(out, "API User", &reference_id, &resp)
        }

        UserCommands::CreateKey { api_user } => {
            let resp = client.create_api_key(&api_user).await?;
            print_response(out, &format!("API Key for user {api_user}"), &resp)
        }

        UserCommands::GetDetails { api_user } => {
            let resp = client.get_api_user_details(&api_user).await?;
            print_response(out, &format!("User details for {api_user}"), &resp)
        }

        UserCommands::GetToken {
            api_user,
            api_key,
            environment,
        } => {
            let resp = client
                .get_oauth_token(&api_user, &api_key, Some(environment.as_str()))
                .await?;
            print_response(out, "OAuth token", &resp)
        }
    }
}

async fn account<T: Transport, W: Write>(
    client: &PaymentClient<T>,
    command: AccountCommands,
    out: &mut W,
) -> Result<(), CliError> {
    let value = match command {
        AccountCommands::Balance { auth } => client.get_account_balance(&context(&auth)).await?,
        AccountCommands::ValidateHolder { auth, id_type, id } => {
            client
                .validate_account_holder_status(&context(&auth), id_type, &id)
                .await?
        }
        AccountCommands::BasicInfo { auth, id_type, id } => {
            client
                .get_basic_user_info(&context(&auth), id_type, &id)
                .await?
        }
    };
    print_json(out, &value)
}

async fn payment<T: Transport, W: Write>(
    client: &PaymentClient<T>,
    command: PaymentCommands,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        PaymentCommands::Request {
            auth,
            callback,
            transfer: args,
        } => {
            let target = resource(&callback);
            let resp = client
                .request_to_pay(&context(&auth), &target, &transfer(args))
                .await?;
            print_created(out, "Payment request", target.reference_id(), &resp)
        }

        PaymentCommands::Status { auth, reference_id } => {
            let value = client
                .get_request_to_pay_status(&context(&auth), &reference_id)
                .await?;
            print_json(out, &value)
        }

        PaymentCommands::Create {
            auth,
            callback,
            external_id,
            amount,
            currency,
            customer_ref,
            provider_user,
        } => {
            let target = resource(&callback);
            let body = PaymentRequest {
                external_transaction_id: external_id,
                money: Money::new(amount, currency),
                customer_reference: customer_ref,
                service_provider_user_name: provider_user,
            };
            let resp = client
                .create_payment(&context(&auth), &target, &body)
                .await?;
            print_created(out, "Payment", target.reference_id(), &resp)
        }

        PaymentCommands::PaymentStatus { auth, reference_id } => {
            let value = client
                .get_payment_status(&context(&auth), &reference_id)
                .await?;
            print_json(out, &value)
        }
    }
}

async fn withdraw<T: Transport, W: Write>(
    client: &PaymentClient<T>,
    command: WithdrawCommands,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        WithdrawCommands::Request {
            auth,
            callback,
            transfer: args,
        } => {
            let target = resource(&callback);
            let resp = client
                .request_to_withdraw(&context(&auth), &target, &transfer(args))
                .await?;
            print_created(out, "Withdrawal request", target.reference_id(), &resp)
        }

        WithdrawCommands::Status { auth, reference_id } => {
            let value = client
                .get_request_to_withdraw_status(&context(&auth), &reference_id)
                .await?;
            print_json(out, &value)
        }
    }
}

async fn invoice<T: Transport, W: Write>(
    client: &PaymentClient<T>,
    command: InvoiceCommands,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        InvoiceCommands::Create {
            auth,
            callback,
            external_id,
            amount,
            currency,
            validity,
            payer_id,
            payer_id_type,
            payee_id,
            payee_id_type,
            description,
        } => {
            let target = resource(&callback);
            let body = InvoiceRequest {
                external_id,
                amount,
                currency,
                validity_duration: validity,
                intended_payer: Party::new(payer_id_type, payer_id),
                payee: Party::new(payee_id_type, payee_id),
                description,
            };
            let resp = client
                .create_invoice(&context(&auth), &target, &body)
                .await?;
            print_created(out, "Invoice", target.reference_id(), &resp)
        }

        InvoiceCommands::Status { auth, reference_id } => {
            let value = client
                .get_invoice_status(&context(&auth), &reference_id)
                .await?;
            print_json(out, &value)
        }

        InvoiceCommands::Cancel {
            auth,
            reference_id,
            external_id,
        } => {
            let resp = client
                .cancel_invoice(
                    &context(&auth),
                    &reference_id,
                    &CancelInvoiceRequest { external_id },
                )
                .await?;
            print_response(out, &format!("Cancel invoice {reference_id}"), &resp)
        }
    }
}

async fn preapproval<T: Transport, W: Write>(
    client: &PaymentClient<T>,
    command: PreapprovalCommands,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        PreapprovalCommands::Create {
            auth,
            callback,
            payer_id,
            payer_id_type,
            currency,
            message,
            validity,
        } => {
            let target = resource(&callback);
            let body = PreApprovalRequest {
                payer: Party::new(payer_id_type, payer_id),
                payer_currency: currency,
                payer_message: message,
                validity_time: validity,
            };
            let resp = client
                .create_pre_approval(&context(&auth), &target, &body)
                .await?;
            print_created(out, "Pre-approval", target.reference_id(), &resp)
        }

        PreapprovalCommands::Status { auth, reference_id } => {
            let value = client
                .get_pre_approval_status(&context(&auth), &reference_id)
                .await?;
            print_json(out, &value)
        }

        PreapprovalCommands::Cancel {
            auth,
            preapproval_id,
        } => {
            let resp = client
                .cancel_pre_approval(&context(&auth), &preapproval_id)
                .await?;
            print_response(out, &format!("Cancel pre-approval {preapproval_id}"), &resp)
        }

        PreapprovalCommands::ListApproved { auth, id_type, id } => {
            let approvals = client
                .get_approved_pre_approvals(&context(&auth), id_type, &id)
                .await?;
            print_json(out, &approvals)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Cli;
    use clap::Parser;
    use momo_psb::{ApiRequest, ApiResponse, ClientConfig, MomoError, SANDBOX_BASE_URL};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    struct FixedTransport {
        status: u16,
        body: &'static str,
        sent: Mutex<Vec<ApiRequest>>,
    }

    impl FixedTransport {
        fn new(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn last(&self) -> ApiRequest {
            self.sent.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for FixedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, MomoError> {
            self.sent.lock().unwrap().push(request);
            Ok(ApiResponse::new(self.status, self.body, BTreeMap::new()))
        }
    }

    fn client(transport: &Arc<FixedTransport>) -> PaymentClient<Arc<FixedTransport>> {
        let config = ClientConfig::new(SANDBOX_BASE_URL, "sub").unwrap();
        PaymentClient::with_transport(config, Arc::clone(transport))
    }

    fn command(args: &[&str]) -> Commands {
        let mut argv = vec!["momo-psb", "--subscription-key", "sub"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[tokio::test]
    async fn test_payment_request_prints_generated_reference() {
        let transport = FixedTransport::new(202, "");
        let client = client(&transport);
        let cmd = command(&[
            "payment",
            "request",
            "--access-token",
            "tok",
            "--callback-url",
            "https://merchant.example.com/cb",
            "--amount",
            "100",
            "--currency",
            "EUR",
            "--payer-id",
            "46733123450",
            "--message",
            "Payment for services",
            "--note",
            "Thank you",
        ]);

        let mut out = Vec::new();
        execute(&client, cmd, &mut out).await.unwrap();

        let sent = transport.last();
        let reference_id = sent.headers.get("X-Reference-Id").unwrap().to_string();
        assert!(Uuid::parse_str(&reference_id).is_ok());
        assert_eq!(
            sent.headers.get("X-Callback-Url"),
            Some("https://merchant.example.com/cb")
        );
        let external_id = sent.json().unwrap()["externalId"].as_str().unwrap();
        assert!(Uuid::parse_str(external_id).is_ok());

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("Payment request created with reference ID: {reference_id}\nStatus Code: 202\n")
        );
    }

    #[tokio::test]
    async fn test_status_prints_pretty_json() {
        let transport = FixedTransport::new(200, r#"{"status":"SUCCESSFUL"}"#);
        let client = client(&transport);
        let cmd = command(&["payment", "status", "--access-token", "tok", "r1"]);

        let mut out = Vec::new();
        execute(&client, cmd, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"status\": \"SUCCESSFUL\"\n}\n"
        );
        assert!(transport
            .last()
            .url
            .ends_with("/collection/v1_0/requesttopay/r1"));
    }

    #[tokio::test]
    async fn test_rejected_query_is_remote_error() {
        let transport = FixedTransport::new(404, "not found");
        let client = client(&transport);
        let cmd = command(&["invoice", "status", "--access-token", "tok", "missing"]);

        let mut out = Vec::new();
        let err = execute(&client, cmd, &mut out).await.unwrap_err();

        assert!(err.is_remote());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_token_uses_requested_environment() {
        let transport = FixedTransport::new(401, r#"{"error":"login_failed"}"#);
        let client = client(&transport);
        let cmd = command(&[
            "user",
            "get-token",
            "api-user",
            "api-key",
            "--environment",
            "mtnghana",
        ]);

        let mut out = Vec::new();
        execute(&client, cmd, &mut out).await.unwrap();

        let sent = transport.last();
        assert_eq!(sent.headers.get("X-Target-Environment"), Some("mtnghana"));
        assert!(String::from_utf8(out).unwrap().contains("Status Code: 401"));
    }
}
