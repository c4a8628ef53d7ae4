//! Deezer API request parameter types.

/// Request parameters for catalog search operations.
///
/// `limit` and `index` are only sent when positive; zero or negative
/// means "let the server choose its default" and the parameter is
/// omitted from the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search text (`q` parameter).
    pub query: String,
    /// Maximum number of results (`limit` parameter).
    pub limit: i64,
    /// Result offset (`index` parameter).
    pub index: i64,
}

impl SearchParams {
    /// Creates parameters for the given search text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: 0,
            index: 0,
        }
    }

    /// Sets the result limit.
    #[must_use]
    pub const fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the result offset.
    #[must_use]
    pub const fn index(mut self, index: i64) -> Self {
        self.index = index;
        self
    }
}
