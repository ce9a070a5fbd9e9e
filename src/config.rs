/// Per-request behavior, resolved by merging [`ConfigOverride`] into the
/// defaults before each call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestConfig {
    /// Reshape post payloads into [`PrettyPost`][`crate::PrettyPost`].
    /// Defaults to `true`.
    pub prettify: bool,
    /// Collection route queried for posts. Defaults to `"posts"`; point it at
    /// a custom post type's route to query that collection instead.
    pub resource: String,
}

impl Default for RequestConfig {
    fn default() -> RequestConfig {
        RequestConfig {
            prettify: true,
            resource: "posts".into(),
        }
    }
}

impl RequestConfig {
    /// Applies an override on top of `self`. A `Some` field wins; a `None`
    /// field keeps the existing value.
    #[must_use]
    pub fn merge(mut self, overrides: ConfigOverride) -> RequestConfig {
        if let Some(prettify) = overrides.prettify {
            self.prettify = prettify;
        }
        if let Some(resource) = overrides.resource {
            self.resource = resource;
        }
        self
    }
}

/// Caller-supplied overrides for a single call. `ConfigOverride::default()`
/// keeps every default.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverride {
    /// Override for [`RequestConfig::prettify`].
    pub prettify: Option<bool>,
    /// Override for [`RequestConfig::resource`].
    pub resource: Option<String>,
}

impl ConfigOverride {
    /// Skip the pretty projection and return payloads as the server sent them.
    #[must_use]
    pub fn raw() -> ConfigOverride {
        ConfigOverride {
            prettify: Some(false),
            resource: None,
        }
    }

    /// Query a different collection route, e.g. a custom post type's.
    #[must_use]
    pub fn resource(resource: impl Into<String>) -> ConfigOverride {
        ConfigOverride {
            prettify: None,
            resource: Some(resource.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigOverride, RequestConfig};

    #[test]
    fn defaults_prettify_posts() {
        let config = RequestConfig::default();
        assert!(config.prettify);
        assert_eq!(config.resource, "posts");
    }

    #[test]
    fn empty_override_keeps_defaults() {
        let config = RequestConfig::default().merge(ConfigOverride::default());
        assert_eq!(config, RequestConfig::default());
    }

    #[test]
    fn overrides_win_per_field() {
        let config = RequestConfig::default().merge(ConfigOverride::raw());
        assert!(!config.prettify);
        assert_eq!(config.resource, "posts");

        let config = RequestConfig::default().merge(ConfigOverride::resource("movies"));
        assert!(config.prettify);
        assert_eq!(config.resource, "movies");
    }
}
