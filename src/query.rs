//! Query parameters type for AMQP URIs.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::constants::{
    PARAM_CACERTFILE, PARAM_CHANNEL_MAX, PARAM_CONNECTION_TIMEOUT, PARAM_FRAME_MAX,
    PARAM_HEARTBEAT, PARAM_VERIFY,
};

/// Query parameters from an AMQP URI.
///
/// Stores name/value pairs in the order they appear in the query string.
/// A name may occur more than once; [`get`](Self::get) returns the first value
/// and [`get_all`](Self::get_all) returns every value in arrival order.
///
/// Values are decoded with `application/x-www-form-urlencoded` rules and are
/// otherwise passed through untouched. Numeric parameters are not validated.
///
/// # Recognized Parameters
///
/// - `channel_max`: Maximum channel number
/// - `frame_max`: Maximum frame size
/// - `heartbeat`: Heartbeat interval
/// - `connection_timeout`: Connection timeout
/// - `verify`: TLS peer verification mode
/// - `cacertfile`: CA certificate path
///
/// # Examples
///
/// ```
/// use amqp_uri::QueryParams;
///
/// let params = QueryParams::parse("heartbeat=30&heartbeat=60&frame_max=131072");
/// assert_eq!(params.heartbeat(), Some("30"));
/// assert_eq!(params.get_all("heartbeat"), vec!["30", "60"]);
/// assert_eq!(params.frame_max(), Some("131072"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses query parameters from a query string (without leading '?').
    ///
    /// Parsing is total: pairs without `=` get an empty value and malformed
    /// escapes are kept as written.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        form_urlencoded::parse(input.as_bytes())
            .into_owned()
            .collect()
    }

    /// Returns the first value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for a parameter, in arrival order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if the parameter occurs at least once.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(k, _)| k == name)
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of pairs, counting repeated names separately.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the pairs in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the `channel_max` parameter, if present.
    #[must_use]
    pub fn channel_max(&self) -> Option<&str> {
        self.get(PARAM_CHANNEL_MAX)
    }

    /// Returns the `frame_max` parameter, if present.
    #[must_use]
    pub fn frame_max(&self) -> Option<&str> {
        self.get(PARAM_FRAME_MAX)
    }

    /// Returns the `heartbeat` parameter, if present.
    #[must_use]
    pub fn heartbeat(&self) -> Option<&str> {
        self.get(PARAM_HEARTBEAT)
    }

    /// Returns the `connection_timeout` parameter, if present.
    #[must_use]
    pub fn connection_timeout(&self) -> Option<&str> {
        self.get(PARAM_CONNECTION_TIMEOUT)
    }

    /// Returns the `verify` parameter, if present.
    #[must_use]
    pub fn verify(&self) -> Option<&str> {
        self.get(PARAM_VERIFY)
    }

    /// Returns the `cacertfile` parameter, if present.
    #[must_use]
    pub fn cacertfile(&self) -> Option<&str> {
        self.get(PARAM_CACERTFILE)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        f.write_str(&encoded)
    }
}

impl FromStr for QueryParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
