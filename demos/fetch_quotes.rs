use arnie_quotes::{QuoteClient, QuotesBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("usage: fetch_quotes <url> [<url> ...]");
        return Ok(());
    }

    let client = QuoteClient::builder().build()?;
    let results = QuotesBuilder::new(&client).urls(urls).fetch().await;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
