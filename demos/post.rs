#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};
use wpjson::{Client, ConfigOverride, PostId, QueryOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let site = std::env::var("WORDPRESS_URL")?;
    let id: PostId = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: post <id>"))?
        .parse()?;

    let client = Client::new().with_base_url(site);
    let post = client
        .get_post(id, &QueryOptions::new(), ConfigOverride::default())
        .await?;
    println!("{:#?}", post);

    Ok(())
}
