//! Constants for AMQP URI handling.

/// The plain-text URI scheme.
pub const SCHEME: &str = "amqp";

/// The TLS URI scheme.
pub const SECURE_SCHEME: &str = "amqps";

/// Port used when the URI does not name one.
///
/// AMQP defines no separate default for `amqps`, so this applies to both schemes.
pub const DEFAULT_PORT: u16 = 5672;

/// Query parameter: maximum channel number.
pub const PARAM_CHANNEL_MAX: &str = "channel_max";

/// Query parameter: maximum frame size in bytes.
pub const PARAM_FRAME_MAX: &str = "frame_max";

/// Query parameter: heartbeat interval in seconds.
pub const PARAM_HEARTBEAT: &str = "heartbeat";

/// Query parameter: connection timeout.
pub const PARAM_CONNECTION_TIMEOUT: &str = "connection_timeout";

/// Query parameter: TLS peer verification mode.
pub const PARAM_VERIFY: &str = "verify";

/// Query parameter: path to the CA certificate file.
pub const PARAM_CACERTFILE: &str = "cacertfile";
