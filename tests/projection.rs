//! End-to-end checks of both option projections.

use amqp_uri::{AmqpUri, FlatOptions, NestedOptions};

#[test]
fn flat_drops_zero_timeout() {
    let uri = AmqpUri::parse("amqp://u:p@h:1234/vh?heartbeat=30&connection_timeout=0").unwrap();
    let (host, options) = FlatOptions::from_uri(&uri);

    assert_eq!(host.as_deref(), Some("h"));
    assert_eq!(options.user(), Some("u"));
    assert_eq!(options.password(), Some("p"));
    assert_eq!(options.port(), 1234);
    assert_eq!(options.vhost(), Some("vh"));
    assert_eq!(options.heartbeat(), Some("30"));
    assert_eq!(options.timeout(), None);
    assert!(!options.ssl());
}

#[test]
fn flat_keeps_non_zero_timeout() {
    let uri = AmqpUri::parse("amqp://u:p@h:1234/vh?heartbeat=30&connection_timeout=15").unwrap();
    let (_, options) = uri.flat_options();
    assert_eq!(options.timeout(), Some("15"));
}

#[test]
fn nested_keeps_zero_timeout() {
    let uri =
        AmqpUri::parse("amqps://u:p@h/vh?connection_timeout=0&heartbeat=5&channel_max=10").unwrap();
    let options = NestedOptions::from_uri(&uri);

    assert_eq!(options.host(), Some("h"));
    assert_eq!(options.user(), Some("u"));
    assert_eq!(options.pass(), Some("p"));
    assert_eq!(options.vhost(), Some("vh"));
    assert!(options.tls());
    assert_eq!(options.timeout(), Some("0"));

    let tune = options.tune().expect("tune group present");
    assert_eq!(tune.heartbeat(), Some("5"));
    assert_eq!(tune.channel_max(), Some("10"));
    assert_eq!(tune.frame_max(), None);
}

#[test]
fn first_duplicate_wins() {
    let uri = AmqpUri::parse("amqp://h?heartbeat=10&heartbeat=20").unwrap();
    let (_, flat) = uri.flat_options();
    let nested = uri.nested_options();

    assert_eq!(flat.heartbeat(), Some("10"));
    assert_eq!(nested.tune().and_then(|t| t.heartbeat()), Some("10"));
    assert_eq!(uri.query().get_all("heartbeat"), vec!["10", "20"]);
}

#[test]
fn projections_are_independent_of_each_other() {
    let uri = AmqpUri::parse("amqps://u:p@h/vh?frame_max=4096").unwrap();
    let first = uri.nested_options();
    let _ = uri.flat_options();
    assert_eq!(first, uri.nested_options());
}

#[test]
fn option_records_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AmqpUri>();
    assert_send_sync::<FlatOptions>();
    assert_send_sync::<NestedOptions>();
}

#[test]
fn parsed_uri_can_be_shared_across_threads() {
    let uri = AmqpUri::parse("amqp://u:p@h/vh?heartbeat=30").unwrap();
    let expected = uri.nested_options();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(uri.nested_options(), expected));
        }
    });
}

#[cfg(feature = "serde")]
mod serde_shape {
    use amqp_uri::AmqpUri;
    use serde_json::json;

    #[test]
    fn flat_serializes_present_fields_only() {
        let uri =
            AmqpUri::parse("amqp://u:p@h:1234/vh?heartbeat=30&connection_timeout=0").unwrap();
        let (_, options) = uri.flat_options();

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "user": "u",
                "password": "p",
                "port": 1234,
                "vhost": "vh",
                "heartbeat": "30",
            })
        );
    }

    #[test]
    fn flat_serializes_tls_fields() {
        let uri = AmqpUri::parse("amqps://h?verify=verify_peer&cacertfile=ca.pem").unwrap();
        let (_, options) = uri.flat_options();

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "port": 5672,
                "ssl": true,
                "ssl_verify_host": "verify_peer",
                "ssl_cacert": "ca.pem",
            })
        );
    }

    #[test]
    fn nested_serializes_tune_group() {
        let uri =
            AmqpUri::parse("amqps://u:p@h/vh?connection_timeout=0&heartbeat=5&channel_max=10")
                .unwrap();

        assert_eq!(
            serde_json::to_value(uri.nested_options()).unwrap(),
            json!({
                "host": "h",
                "port": 5672,
                "user": "u",
                "pass": "p",
                "vhost": "vh",
                "timeout": "0",
                "tls": true,
                "tune": { "heartbeat": "5", "channel_max": "10" },
            })
        );
    }

    #[test]
    fn nested_omits_empty_tune() {
        let uri = AmqpUri::parse("amqp://h").unwrap();
        assert_eq!(
            serde_json::to_value(uri.nested_options()).unwrap(),
            json!({ "host": "h", "port": 5672 })
        );
    }

    #[test]
    fn uri_serializes_as_string() {
        let uri = AmqpUri::parse("amqp://u:p@h/vh").unwrap();
        let encoded = serde_json::to_string(&uri).unwrap();
        assert_eq!(encoded, "\"amqp://u:p@h/vh\"");

        let decoded: AmqpUri = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, uri);
    }
}
