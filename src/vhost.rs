//! Virtual host derivation from the URI path.

use percent_encoding::percent_decode_str;

/// Derives the AMQP virtual host from a raw (still escaped) URI path.
///
/// Exactly one leading `/` is removed. An empty remainder means the URI names
/// no virtual host, and the caller applies its own default. Anything else is
/// percent-decoded, so `%2F` is the way to spell a literal slash.
///
/// Malformed escapes are passed through undecoded and invalid UTF-8 is
/// replaced, so this never fails.
///
/// # Examples
///
/// ```
/// use amqp_uri::derive_vhost;
///
/// assert_eq!(derive_vhost(""), None);
/// assert_eq!(derive_vhost("/"), None);
/// assert_eq!(derive_vhost("/production").as_deref(), Some("production"));
/// assert_eq!(derive_vhost("/%2F").as_deref(), Some("/"));
/// ```
#[must_use]
pub fn derive_vhost(path: &str) -> Option<String> {
    let raw = path.strip_prefix('/').unwrap_or(path);
    if raw.is_empty() {
        return None;
    }
    Some(percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Returns the path of a URI string exactly as written.
///
/// The generic parser removes dot segments, including escaped ones like
/// `%2E`, which would rewrite a vhost named `.` or `a/../b`. This slices the
/// text between the end of the authority and the first `?` or `#` instead.
pub(crate) fn raw_path(input: &str) -> &str {
    let input = input.trim_matches(|c: char| c.is_ascii_control() || c == ' ');
    let rest = input.split_once(':').map_or(input, |(_, rest)| rest);
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    match rest.strip_prefix("//") {
        Some(authority) => authority.find('/').map_or("", |i| &authority[i..]),
        None => rest,
    }
}
