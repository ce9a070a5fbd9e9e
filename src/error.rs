/// Errors that might occur when using the library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The server refused the request. Displays as the server-supplied
    /// message verbatim, extracted from the error body's `message` field
    /// (or the HTTP status line when the body carries no message).
    #[error("{message}")]
    Remote {
        /// Message the server sent alongside the failure.
        message: String,
    },

    /// A transport-level failure before a usable response arrived.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A post payload lacked a field the pretty projection needs, usually
    /// because the embedded featured media or the ACF custom-fields blob is
    /// absent.
    #[error("post field `{0}` is missing or not of the expected shape")]
    MissingField(&'static str),
}
