use std::fmt::{self, Display};

/// Query parameters for a request, serialized in insertion order.
///
/// Keys map to scalar values only; the server is the authority on which keys
/// and values are acceptable, so nothing is validated client-side.
#[derive(Clone, Debug, Default)]
pub struct QueryOptions {
    params: Vec<(String, QueryValue)>,
}

/// Scalar query value. The remote API takes strings and numbers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryValue {
    /// A string value, placed in the query verbatim.
    Str(String),
    /// An integer value.
    Int(i64),
}

impl QueryOptions {
    /// Creates an empty set of query parameters.
    #[must_use]
    pub fn new() -> QueryOptions {
        QueryOptions::default()
    }

    /// Sets a parameter. Re-setting a key replaces its value without moving
    /// the key's position in the serialized output.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((key, value)),
        }
    }

    /// Sets a parameter, consuming and returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> QueryOptions {
        self.set(key, value);
        self
    }

    /// Renders the parameters as a query string.
    ///
    /// An empty set yields `"?_embed"`; otherwise the output is
    /// `"?k1=v1&k2=v2&_embed"` in insertion order. The `_embed` directive is
    /// always appended so the server inlines related resources such as the
    /// featured media the pretty projection reads.
    ///
    /// Keys and values are placed verbatim, with no URL-encoding; the caller
    /// must supply values that are already safe to put in a URL.
    #[must_use]
    pub fn serialize(&self) -> String {
        let pairs = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>();

        if pairs.is_empty() {
            "?_embed".into()
        } else {
            format!("?{}&_embed", pairs.join("&"))
        }
    }
}

impl Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> QueryValue {
        QueryValue::Str(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> QueryValue {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> QueryValue {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> QueryValue {
        QueryValue::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> QueryValue {
        QueryValue::Int(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::QueryOptions;

    #[test]
    fn empty_options_serialize_to_bare_embed() {
        assert_eq!(QueryOptions::new().serialize(), "?_embed");
    }

    #[test]
    fn pairs_serialize_in_insertion_order() {
        let options = QueryOptions::new().with("a", 1).with("b", 2);
        assert_eq!(options.serialize(), "?a=1&b=2&_embed");
    }

    #[test]
    fn output_is_framed_by_question_mark_and_embed() {
        let cases = [
            QueryOptions::new(),
            QueryOptions::new().with("per_page", 3),
            QueryOptions::new()
                .with("orderby", "date")
                .with("order", "desc")
                .with("page", 7),
        ];
        for options in cases {
            let query = options.serialize();
            assert!(query.starts_with('?'));
            assert!(query.ends_with("_embed"));
        }
    }

    #[test]
    fn values_are_not_url_encoded() {
        let options = QueryOptions::new().with("search", "a b&c");
        assert_eq!(options.serialize(), "?search=a b&c&_embed");
    }

    #[test]
    fn resetting_a_key_keeps_its_position() {
        let mut options = QueryOptions::new().with("page", 1).with("per_page", 10);
        options.set("page", 2);
        assert_eq!(options.serialize(), "?page=2&per_page=10&_embed");
    }
}
