use std::io;

use smsapi::{AccessToken, Context, SmsapiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SMSAPI_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAPI_ACCESS_TOKEN environment variable is required",
        )
    })?;
    let phone = std::env::var("SMSAPI_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAPI_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSAPI_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsapi demo.".to_owned());
    let from = std::env::var("SMSAPI_FROM").unwrap_or_default();

    let client = SmsapiClient::poland(AccessToken::new(token)?)?;
    let sent = client
        .sms()
        .send(&Context::background(), &phone, &message, &from)
        .await?;

    println!("count: {}", sent.count);
    for result in sent.list {
        println!(
            "id: {:?}, status: {:?}, points: {:?}",
            result.id, result.status, result.points
        );
    }

    Ok(())
}
