//! Shared query infrastructure: the [`Query`] trait and [`FilterValue`].

use url::Url;

/// A single filter value, serialized the way the API expects it.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Id(i64),
    Number(u32),
    Text(String),
    /// Sent as the lowercase strings `true` / `false`.
    Flag(bool),
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Id(id) => write!(f, "{}", id),
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Text(text) => f.write_str(text),
            FilterValue::Flag(true) => f.write_str("true"),
            FilterValue::Flag(false) => f.write_str("false"),
        }
    }
}

/// Trait implemented by all query builders.
///
/// Implementors only list their filters as `(query key, value)` pairs;
/// filters left unset are skipped when the query is serialized, so the key
/// never reaches the wire.
pub trait Query {
    /// Every filter this query knows, set or not, in wire order.
    fn filters(&self) -> Vec<(&'static str, Option<FilterValue>)>;

    /// The filters that were actually set, rendered as query pairs.
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.filters()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
            .collect()
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.to_query_pairs() {
            url.query_pairs_mut().append_pair(&key, &value);
        }
        url
    }
}
