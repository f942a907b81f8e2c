use std::io;

use smsapi::{AccessToken, BlacklistFilters, Context, SmsapiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SMSAPI_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAPI_ACCESS_TOKEN environment variable is required",
        )
    })?;

    let client = SmsapiClient::poland(AccessToken::new(token)?)?;
    let blacklist = client.blacklist();
    let filters = BlacklistFilters {
        limit: 50,
        ..Default::default()
    };
    let mut pages = blacklist.page_iterator(Context::background(), &filters);

    loop {
        let page = match pages.next_page().await {
            Ok(page) => page,
            Err(err) if err.is_no_more_results() => break,
            Err(err) => return Err(err.into()),
        };
        if page.collection.is_empty() {
            break;
        }
        for entry in page {
            println!("{:?} expires {:?}", entry.phone_number, entry.expire_at);
        }
    }

    Ok(())
}
