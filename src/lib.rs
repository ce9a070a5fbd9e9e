//! wpjson is a client library for the [WordPress REST API], providing an
//! interface to query posts and categories and to reshape posts into a
//! simplified, display-ready form.
//!
//! ```no_run
//! use wpjson::{Client, ConfigOverride, QueryOptions};
//!
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! // Point the client at a site
//! let client = Client::new().with_base_url("https://example.com/wp-json/wp/v2/".into());
//!
//! // Ask for the three most recent posts
//! let options = QueryOptions::new().with("per_page", 3).with("page", 1);
//! let posts = client.list_posts(&options, ConfigOverride::default()).await?;
//!
//! for post in posts.into_pretty().unwrap() {
//!     println!("{}: {}", post.id, post.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every query carries the `_embed` directive so the server inlines featured
//! media, which the pretty projection reads. Pass [`ConfigOverride::raw`] to
//! skip the projection and get the server's payload untouched.
//!
//! [WordPress REST API]: https://developer.wordpress.org/rest-api/

#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod category;
mod client;
mod config;
mod error;
mod post;
mod query;

pub use crate::category::{Category, CategoryId};
pub use crate::client::Client;
pub use crate::config::{ConfigOverride, RequestConfig};
pub use crate::error::Error;
pub use crate::post::{Post, PostId, Posts, PrettyPost, RawPost};
pub use crate::query::{QueryOptions, QueryValue};
