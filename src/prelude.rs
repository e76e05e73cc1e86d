//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use amqp_uri::prelude::*;
//!
//! let uri = AmqpUri::parse("amqp://localhost").unwrap();
//! assert_eq!(uri.port(), DEFAULT_PORT);
//! ```

pub use crate::{
    // Core types
    AmqpUri, QueryParams, Url,
    // Projections
    FlatOptions, NestedOptions, TuneOptions,
    // Derivation
    derive_vhost,
    // Errors
    ParseError,
    // Constants
    DEFAULT_PORT, PARAM_CACERTFILE, PARAM_CHANNEL_MAX, PARAM_CONNECTION_TIMEOUT, PARAM_FRAME_MAX,
    PARAM_HEARTBEAT, PARAM_VERIFY, SCHEME, SECURE_SCHEME,
};
