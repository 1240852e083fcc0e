//! Cookie strings for `document.cookie`.

use chrono::{DateTime, TimeDelta, Utc};

/// `expires` date format of RFC 6265 (`Wed, 21 Oct 2015 07:28:00 GMT`).
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Builds the assignment written to `document.cookie`.
///
/// `value` must already be free of `;`, `,` and whitespace.
pub fn set_cookie_string(name: &str, value: &str, now: DateTime<Utc>, ttl: TimeDelta) -> String {
    let expires = now + ttl;
    format!(
        "{}={}; expires={}; path=/",
        name,
        value,
        expires.format(EXPIRES_FORMAT)
    )
}

/// Finds the value of `name` in a `document.cookie` string (`a=1; b=2`).
pub fn find_cookie(jar: &str, name: &str) -> Option<String> {
    jar.split(';')
        .map(str::trim_start)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
