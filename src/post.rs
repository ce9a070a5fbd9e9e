use crate::Error;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A post ID.
#[allow(clippy::module_name_repetitions)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct PostId(pub u64);

/// A post payload exactly as the server returned it. The shape is owned by
/// the remote API; this library only reads the fields named in
/// [`PrettyPost::from_raw`].
#[allow(clippy::module_name_repetitions)]
pub type RawPost = Value;

/// Display-ready projection of a post.
///
/// Flattens the rendered title and content, the embedded featured media's
/// size map, and the ACF custom-fields blob out of the raw payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrettyPost {
    /// Post ID.
    pub id: PostId,
    /// URL slug.
    pub slug: String,
    /// Publication status, e.g. `publish` or `draft`.
    pub status: String,
    /// Rendered title HTML.
    pub title: String,
    /// Rendered content HTML.
    pub body: String,
    /// Featured-media size map (`media_details.sizes` of the embedded media).
    pub image: Value,
    /// Custom-fields blob attached by the ACF plugin.
    pub fields: Value,
}

impl PrettyPost {
    /// Projects a raw post into its display-ready form.
    ///
    /// The payload must carry `id`, `slug`, `status`, the rendered title and
    /// content, the embedded featured media (requests issued through
    /// [`Client`][`crate::Client`] always ask for it via `_embed`), and an
    /// ACF custom-fields blob. A missing or mis-shaped field yields
    /// [`Error::MissingField`] naming the field's JSON pointer.
    pub fn from_raw(post: &RawPost) -> Result<PrettyPost, Error> {
        Ok(PrettyPost {
            id: PostId(number(post, "/id")?),
            slug: string(post, "/slug")?,
            status: string(post, "/status")?,
            title: string(post, "/title/rendered")?,
            body: string(post, "/content/rendered")?,
            image: lookup(post, "/_embedded/wp:featuredmedia/0/media_details/sizes")?.clone(),
            fields: lookup(post, "/acf")?.clone(),
        })
    }
}

/// Result of a post-collection query: the pretty projection when `prettify`
/// is on (the default), otherwise the raw payloads.
#[derive(Clone, Debug)]
pub enum Posts {
    /// Projected posts.
    Pretty(Vec<PrettyPost>),
    /// Untouched payloads.
    Raw(Vec<RawPost>),
}

impl Posts {
    /// The projected posts, if the projection was applied.
    #[must_use]
    pub fn into_pretty(self) -> Option<Vec<PrettyPost>> {
        match self {
            Posts::Pretty(posts) => Some(posts),
            Posts::Raw(_) => None,
        }
    }

    /// The raw payloads, if the projection was skipped.
    #[must_use]
    pub fn into_raw(self) -> Option<Vec<RawPost>> {
        match self {
            Posts::Pretty(_) => None,
            Posts::Raw(posts) => Some(posts),
        }
    }
}

/// Result of a single-post query; see [`Posts`].
#[derive(Clone, Debug)]
pub enum Post {
    /// Projected post.
    Pretty(PrettyPost),
    /// Untouched payload.
    Raw(RawPost),
}

impl Post {
    /// The projected post, if the projection was applied.
    #[must_use]
    pub fn into_pretty(self) -> Option<PrettyPost> {
        match self {
            Post::Pretty(post) => Some(post),
            Post::Raw(_) => None,
        }
    }

    /// The raw payload, if the projection was skipped.
    #[must_use]
    pub fn into_raw(self) -> Option<RawPost> {
        match self {
            Post::Pretty(_) => None,
            Post::Raw(post) => Some(post),
        }
    }
}

pub(crate) fn prettify(posts: &[RawPost]) -> Result<Vec<PrettyPost>, Error> {
    posts.iter().map(PrettyPost::from_raw).collect()
}

fn lookup<'a>(post: &'a RawPost, pointer: &'static str) -> Result<&'a Value, Error> {
    post.pointer(pointer).ok_or(Error::MissingField(pointer))
}

fn string(post: &RawPost, pointer: &'static str) -> Result<String, Error> {
    lookup(post, pointer)?
        .as_str()
        .map(str::to_owned)
        .ok_or(Error::MissingField(pointer))
}

fn number(post: &RawPost, pointer: &'static str) -> Result<u64, Error> {
    lookup(post, pointer)?
        .as_u64()
        .ok_or(Error::MissingField(pointer))
}

#[cfg(test)]
mod tests {
    use super::{PostId, PrettyPost};
    use crate::Error;
    use serde_json::json;

    #[test]
    fn projects_the_flat_fields() {
        let raw = json!({
            "id": 1,
            "slug": "x",
            "status": "publish",
            "title": { "rendered": "T" },
            "content": { "rendered": "B" },
            "_embedded": {
                "wp:featuredmedia": [
                    { "media_details": { "sizes": {} } }
                ]
            },
            "acf": {}
        });

        assert_eq!(
            PrettyPost::from_raw(&raw).unwrap(),
            PrettyPost {
                id: PostId(1),
                slug: "x".into(),
                status: "publish".into(),
                title: "T".into(),
                body: "B".into(),
                image: json!({}),
                fields: json!({}),
            }
        );
    }

    #[test]
    fn keeps_the_media_size_map() {
        let raw = json!({
            "id": 7,
            "slug": "with-media",
            "status": "publish",
            "title": { "rendered": "With media" },
            "content": { "rendered": "<p>hi</p>" },
            "_embedded": {
                "wp:featuredmedia": [{
                    "media_details": {
                        "sizes": {
                            "thumbnail": { "source_url": "https://example.com/t.jpg" },
                            "full": { "source_url": "https://example.com/f.jpg" }
                        }
                    }
                }]
            },
            "acf": { "subtitle": "sub" }
        });

        let pretty = PrettyPost::from_raw(&raw).unwrap();
        assert_eq!(
            pretty.image["thumbnail"]["source_url"],
            "https://example.com/t.jpg"
        );
        assert_eq!(pretty.fields, json!({ "subtitle": "sub" }));
    }

    #[test]
    fn missing_featured_media_names_the_field() {
        let raw = json!({
            "id": 1,
            "slug": "x",
            "status": "publish",
            "title": { "rendered": "T" },
            "content": { "rendered": "B" },
            "acf": {}
        });

        match PrettyPost::from_raw(&raw) {
            Err(Error::MissingField(pointer)) => {
                assert_eq!(pointer, "/_embedded/wp:featuredmedia/0/media_details/sizes");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn mis_shaped_field_is_reported_like_a_missing_one() {
        let raw = json!({
            "id": "not-a-number",
            "slug": "x",
            "status": "publish",
            "title": { "rendered": "T" },
            "content": { "rendered": "B" },
            "_embedded": { "wp:featuredmedia": [{ "media_details": { "sizes": {} } }] },
            "acf": {}
        });

        assert!(matches!(
            PrettyPost::from_raw(&raw),
            Err(Error::MissingField("/id"))
        ));
    }
}
