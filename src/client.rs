use crate::config::{ConfigOverride, RequestConfig};
use crate::post::{self, Post, PostId, Posts, PrettyPost, RawPost};
use crate::query::QueryOptions;
use crate::{Category, CategoryId, Error};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::borrow::Cow;

/// HTTP client for a WordPress site's REST API.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) client: reqwest::Client,
}

impl Client {
    /// Creates a new `Client` with the default base URL,
    /// `http://localhost:8081/wordpress/wp-json/wp/v2/`. Use
    /// [`Client::with_base_url`] to point it at a real site.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // tested to not panic
    pub fn new() -> Client {
        const USER_AGENT: &str = concat!(
            "wpjson/",
            env!("CARGO_PKG_VERSION"),
            " (https://github.com/wpjson/wpjson-rs)",
        );

        Client {
            base_url: Cow::Borrowed("http://localhost:8081/wordpress/wp-json/wp/v2/"),
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap(),
        }
    }

    /// Creates a new `Client` with a custom base URL, normally the site's
    /// `wp-json/wp/v2/` route.
    #[must_use]
    pub fn with_base_url(mut self, mut base_url: String) -> Client {
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = Cow::Owned(base_url);
        self
    }

    /// Get a page of posts.
    ///
    /// `options` passes through to the server untouched; the collection
    /// accepts paging (`page`, `per_page`, `offset`), filtering (`search`,
    /// `author`, `author_exclude`, `include`, `exclude`, `slug`, `status`,
    /// `sticky`), date bounds (`after`, `before`), ordering (`order`,
    /// `orderby`), and taxonomy terms (`categories`, `categories_exclude`,
    /// `tags`, `tags_exclude`).
    ///
    /// With the default config the payload is reshaped into
    /// [`PrettyPost`]s; override `prettify` to get the raw payloads, or
    /// `resource` to query a custom post type's route.
    #[tracing::instrument(skip(self))]
    pub async fn list_posts(
        &self,
        options: &QueryOptions,
        config: ConfigOverride,
    ) -> Result<Posts, Error> {
        let config = RequestConfig::default().merge(config);
        let raw: Vec<RawPost> = self
            .fetch(&format!("{}{}", config.resource, options.serialize()))
            .await?;

        if config.prettify {
            Ok(Posts::Pretty(post::prettify(&raw)?))
        } else {
            Ok(Posts::Raw(raw))
        }
    }

    /// Get a single post by ID.
    ///
    /// `options` is the single-resource subset: `context`, and `password`
    /// for password-protected posts. Config overrides behave as in
    /// [`Client::list_posts`].
    #[tracing::instrument(skip(self))]
    pub async fn get_post(
        &self,
        id: PostId,
        options: &QueryOptions,
        config: ConfigOverride,
    ) -> Result<Post, Error> {
        let config = RequestConfig::default().merge(config);
        let raw: RawPost = self
            .fetch(&format!("{}/{}{}", config.resource, id, options.serialize()))
            .await?;

        if config.prettify {
            Ok(Post::Pretty(PrettyPost::from_raw(&raw)?))
        } else {
            Ok(Post::Raw(raw))
        }
    }

    /// Get a page of categories, untouched.
    ///
    /// The collection accepts `page`, `per_page`, `search`, `include`,
    /// `exclude`, `order`, `orderby`, `hide_empty`, `parent`, `post`, and
    /// `slug`.
    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self, options: &QueryOptions) -> Result<Vec<Category>, Error> {
        self.fetch(&format!("categories{}", options.serialize()))
            .await
    }

    /// Get a single category by ID, untouched.
    #[tracing::instrument(skip(self))]
    pub async fn get_category(
        &self,
        id: CategoryId,
        options: &QueryOptions,
    ) -> Result<Category, Error> {
        self.fetch(&format!("categories/{}{}", id, options.serialize()))
            .await
    }

    /// One GET per call: no retries, no caching. Non-success responses turn
    /// into [`Error::Remote`] carrying the server's message.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.get(path).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status.to_string(),
            };
            Err(Error::Remote { message })
        }
    }

    #[inline]
    fn get(&self, path: &str) -> RequestBuilder {
        tracing::info!(path, "Client::get");
        self.client.get(format!("{}{}", self.base_url, path))
    }
}

impl Default for Client {
    fn default() -> Client {
        Client::new()
    }
}

/// Shape of the server's error bodies; other fields (`code`, `data`) are
/// ignored.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
