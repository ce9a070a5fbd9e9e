#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};
use wpjson::{Client, ConfigOverride, QueryOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let site = std::env::var("WORDPRESS_URL")?;

    let client = Client::new().with_base_url(site);
    let options = QueryOptions::new().with("per_page", 5).with("page", 1);
    let posts = client.list_posts(&options, ConfigOverride::default()).await?;
    println!("{:#?}", posts);

    Ok(())
}
