#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};
use wpjson::{Client, QueryOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let site = std::env::var("WORDPRESS_URL")?;

    let client = Client::new().with_base_url(site);
    let options = QueryOptions::new().with("orderby", "name").with("order", "asc");
    let categories = client.list_categories(&options).await?;
    println!("{:#?}", categories);

    Ok(())
}
