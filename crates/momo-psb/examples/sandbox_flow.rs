//! Sandbox provisioning walk-through: API user → API key → token → request to pay.
//!
//! Run:  MOMO_SUBSCRIPTION_KEY=... MOMO_CALLBACK_URL=https://... cargo run --example sandbox_flow

use momo_psb::{
    ApiKeyResponse, CallContext, NewResource, Party, PaymentClient, TokenResponse, TransferRequest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "momo_psb=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = PaymentClient::from_env()?;
    let callback_url = std::env::var("MOMO_CALLBACK_URL")
        .unwrap_or_else(|_| "https://webhook.example.com/momo".to_string());
    let callback_host = url::Url::parse(&callback_url)?
        .host_str()
        .ok_or("MOMO_CALLBACK_URL has no host")?
        .to_string();

    let api_user = uuid::Uuid::new_v4().to_string();
    let resp = client.create_api_user(&api_user, &callback_host).await?;
    println!("Create API user:   {} {}", resp.status(), resp.body());

    let resp = client.create_api_key(&api_user).await?;
    println!("Create API key:    {}", resp.status());
    if !resp.is_success() {
        println!("Failed to create API key: {}", resp.body());
        return Ok(());
    }
    let api_key = resp.json::<ApiKeyResponse>()?.api_key;

    let resp = client.get_api_user_details(&api_user).await?;
    println!("API user details:  {} {}", resp.status(), resp.body());

    let resp = client.get_oauth_token(&api_user, &api_key, None).await?;
    println!("OAuth token:       {}", resp.status());
    if resp.status() != 200 {
        println!("Failed to obtain access token: {}", resp.body());
        return Ok(());
    }
    let token = resp.json::<TokenResponse>()?;
    println!("  expires in:      {:?}s", token.expires_in);

    let ctx = CallContext::new(token.access_token);
    let target = NewResource::new(uuid::Uuid::new_v4().to_string(), callback_url.as_str());
    let transfer = TransferRequest {
        amount: 100.0,
        currency: "EUR".to_string(),
        external_id: uuid::Uuid::new_v4().to_string(),
        payer: Party::msisdn("46733123450"),
        payer_message: "Payment for services".to_string(),
        payee_note: "Thank you for your payment".to_string(),
    };

    let resp = client.request_to_pay(&ctx, &target, &transfer).await?;
    println!("Request to pay:    {} (reference {})", resp.status(), target.reference_id());

    let status = client
        .get_request_to_pay_status(&ctx, target.reference_id())
        .await?;
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
