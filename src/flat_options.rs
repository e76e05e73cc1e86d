//! Flat connect options for synchronous-style clients.

use std::num::FpCategory;

use crate::uri::AmqpUri;

/// Connect options with scalar top-level fields.
///
/// Matches clients whose connect call takes the host as its own argument
/// followed by a flat option set with a TLS toggle and a CA certificate path.
/// Every optional field is `None` when the URI does not supply it; the `ssl`
/// flag is only ever set, never serialized as `false`.
///
/// Numeric tuning values are carried as the raw query strings.
///
/// # Examples
///
/// ```
/// use amqp_uri::AmqpUri;
///
/// let uri = AmqpUri::parse("amqp://u:p@h:1234/vh?heartbeat=30&connection_timeout=0").unwrap();
/// let (host, options) = uri.flat_options();
///
/// assert_eq!(host.as_deref(), Some("h"));
/// assert_eq!(options.password(), Some("p"));
/// assert_eq!(options.heartbeat(), Some("30"));
/// assert_eq!(options.timeout(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlatOptions {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    user: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    password: Option<String>,
    port: u16,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    vhost: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    channel_max: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    frame_max: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    heartbeat: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    timeout: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    ssl: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    ssl_verify_host: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    ssl_cacert: Option<String>,
}

impl FlatOptions {
    /// Projects a parsed URI into a host and a flat option set.
    ///
    /// The host is returned beside the options rather than inside them.
    /// `timeout` is taken from `connection_timeout` only when that value is
    /// non-empty and not zero; the other tuning values are copied whenever
    /// present.
    #[must_use]
    pub fn from_uri(uri: &AmqpUri) -> (Option<String>, Self) {
        let query = uri.query();
        let options = Self {
            user: uri.user().map(str::to_owned),
            password: uri.password().map(str::to_owned),
            port: uri.port(),
            vhost: uri.vhost().map(str::to_owned),
            channel_max: query.channel_max().map(str::to_owned),
            frame_max: query.frame_max().map(str::to_owned),
            heartbeat: query.heartbeat().map(str::to_owned),
            timeout: query
                .connection_timeout()
                .filter(|t| is_truthy(t))
                .map(str::to_owned),
            ssl: uri.is_secure(),
            ssl_verify_host: query.verify().map(str::to_owned),
            ssl_cacert: query.cacertfile().map(str::to_owned),
        };
        tracing::trace!(uri = %uri.redacted(), "projected flat connect options");
        (uri.host().map(str::to_owned), options)
    }

    /// Returns the user name, if set.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the password, if set.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the virtual host, if set.
    #[must_use]
    pub fn vhost(&self) -> Option<&str> {
        self.vhost.as_deref()
    }

    /// Returns the channel limit, if set.
    #[must_use]
    pub fn channel_max(&self) -> Option<&str> {
        self.channel_max.as_deref()
    }

    /// Returns the frame size limit, if set.
    #[must_use]
    pub fn frame_max(&self) -> Option<&str> {
        self.frame_max.as_deref()
    }

    /// Returns the heartbeat interval, if set.
    #[must_use]
    pub fn heartbeat(&self) -> Option<&str> {
        self.heartbeat.as_deref()
    }

    /// Returns the connection timeout, if set.
    #[must_use]
    pub fn timeout(&self) -> Option<&str> {
        self.timeout.as_deref()
    }

    /// Returns true if TLS is requested.
    #[must_use]
    pub const fn ssl(&self) -> bool {
        self.ssl
    }

    /// Returns the TLS peer verification mode, if set.
    #[must_use]
    pub fn ssl_verify_host(&self) -> Option<&str> {
        self.ssl_verify_host.as_deref()
    }

    /// Returns the CA certificate path, if set.
    #[must_use]
    pub fn ssl_cacert(&self) -> Option<&str> {
        self.ssl_cacert.as_deref()
    }
}

/// True for a non-empty value that does not read as a zero number.
fn is_truthy(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    !matches!(value.parse::<f64>(), Ok(n) if n.classify() == FpCategory::Zero)
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(flag: &bool) -> bool {
    !*flag
}
