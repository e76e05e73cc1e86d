//! Nested connect options for asynchronous-style clients.

use crate::uri::AmqpUri;

#[cfg(feature = "serde")]
use crate::flat_options::is_false;

/// Protocol tuning values grouped under `tune`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TuneOptions {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    heartbeat: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    channel_max: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    frame_max: Option<String>,
}

impl TuneOptions {
    /// Builds the tune group, or `None` when every value is absent.
    fn from_parts(
        heartbeat: Option<&str>,
        channel_max: Option<&str>,
        frame_max: Option<&str>,
    ) -> Option<Self> {
        if heartbeat.is_none() && channel_max.is_none() && frame_max.is_none() {
            return None;
        }
        Some(Self {
            heartbeat: heartbeat.map(str::to_owned),
            channel_max: channel_max.map(str::to_owned),
            frame_max: frame_max.map(str::to_owned),
        })
    }

    /// Returns the heartbeat interval, if set.
    #[must_use]
    pub fn heartbeat(&self) -> Option<&str> {
        self.heartbeat.as_deref()
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
}

/// Connect options with protocol tuning nested under `tune`.
///
/// Unlike [`FlatOptions`](crate::FlatOptions), the host is part of the record,
/// the password field is named `pass`, the TLS flag is `tls`, and `timeout`
/// is copied from `connection_timeout` whenever it is present, zero included.
///
/// # Examples
///
/// ```
/// use amqp_uri::AmqpUri;
///
/// let uri = AmqpUri::parse("amqps://u:p@h/vh?connection_timeout=0&heartbeat=5").unwrap();
/// let options = uri.nested_options();
///
/// assert_eq!(options.pass(), Some("p"));
/// assert!(options.tls());
/// assert_eq!(options.timeout(), Some("0"));
/// assert_eq!(options.tune().and_then(|t| t.heartbeat()), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NestedOptions {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    host: Option<String>,
    port: u16,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    user: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pass: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    vhost: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    timeout: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    tls: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    tune: Option<TuneOptions>,
}

impl NestedOptions {
    /// Projects a parsed URI into a nested option set.
    #[must_use]
    pub fn from_uri(uri: &AmqpUri) -> Self {
        let query = uri.query();
        let options = Self {
            host: uri.host().map(str::to_owned),
            port: uri.port(),
            user: uri.user().map(str::to_owned),
            pass: uri.password().map(str::to_owned),
            vhost: uri.vhost().map(str::to_owned),
            timeout: query.connection_timeout().map(str::to_owned),
            tls: uri.is_secure(),
            tune: TuneOptions::from_parts(
                query.heartbeat(),
                query.channel_max(),
                query.frame_max(),
            ),
        };
        tracing::trace!(uri = %uri.redacted(), "projected nested connect options");
        options
    }

    /// Returns the host, if set.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the user name, if set.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the password, if set.
    #[must_use]
    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    /// Returns the virtual host, if set.
    #[must_use]
    pub fn vhost(&self) -> Option<&str> {
        self.vhost.as_deref()
    }

    /// Returns the connection timeout, if set.
    #[must_use]
    pub fn timeout(&self) -> Option<&str> {
        self.timeout.as_deref()
    }

    /// Returns true if TLS is requested.
    #[must_use]
    pub const fn tls(&self) -> bool {
        self.tls
    }

    /// Returns the tuning group, if any tuning value was supplied.
    #[must_use]
    pub const fn tune(&self) -> Option<&TuneOptions> {
        self.tune.as_ref()
    }
}

impl From<&AmqpUri> for NestedOptions {
    fn from(uri: &AmqpUri) -> Self {
        Self::from_uri(uri)
    }
}
