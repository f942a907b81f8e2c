use std::io;
use std::time::Duration;

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

    let client = SmsapiClient::international(AccessToken::new(token)?)?;
    let ctx = Context::background().with_timeout(Duration::from_secs(10));
    let result = client.hlr().check_number(&ctx, &phone).await?;

    println!(
        "number: {:?}, status: {:?}, price: {:?}",
        result.number, result.status, result.price
    );

    Ok(())
}
