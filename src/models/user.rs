//! Caller identity as asserted by the upstream load balancer.
//!
//! The load balancer authenticates the user against the identity provider and
//! forwards the resulting claims as `X-Amzn-Oidc-*` headers. This service
//! consumes those headers as already trusted: it does not verify the signed
//! `X-Amzn-Oidc-Data` token, and it must only ever be reachable through that
//! load balancer. Deploying it behind anything that lets clients set these
//! headers directly lets any caller claim any identity.

use axum::http::HeaderMap;
use serde::Serialize;

pub const IDENTITY_HEADER: &str = "x-amzn-oidc-identity";
pub const EMAIL_HEADER: &str = "x-amzn-oidc-attr-email";
pub const NAME_HEADER: &str = "x-amzn-oidc-attr-name";
pub const GROUPS_HEADER: &str = "x-amzn-oidc-attr-groups";

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub name: String,
    /// Never null; an absent or empty header yields an empty list.
    pub groups: Vec<String>,
}

impl UserInfo {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        // Header values are raw bytes; names and emails routinely carry UTF-8.
        let text = |name: &str| {
            headers
                .get(name)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        };
        let or_unknown = |name: &str| text(name).unwrap_or_else(|| UNKNOWN.to_string());

        let groups = match text(GROUPS_HEADER) {
            Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        };

        Self {
            username: or_unknown(IDENTITY_HEADER),
            email: or_unknown(EMAIL_HEADER),
            name: or_unknown(NAME_HEADER),
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn missing_headers_default_to_unknown() {
        let user = UserInfo::from_headers(&HeaderMap::new());
        assert_eq!(user.username, "unknown");
        assert_eq!(user.email, "unknown");
        assert_eq!(user.name, "unknown");
        assert!(user.groups.is_empty());
    }

    #[test]
    fn reads_all_identity_headers() {
        let user = UserInfo::from_headers(&headers(&[
            (IDENTITY_HEADER, "abc-123"),
            (EMAIL_HEADER, "jane@example.com"),
            (NAME_HEADER, "Jane Doe"),
            (GROUPS_HEADER, "admin,ops"),
        ]));
        assert_eq!(user.username, "abc-123");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.groups, vec!["admin", "ops"]);
    }

    #[test]
    fn empty_groups_header_is_empty_list() {
        let user = UserInfo::from_headers(&headers(&[(GROUPS_HEADER, "")]));
        assert!(user.groups.is_empty());
    }

    #[test]
    fn groups_split_verbatim() {
        let user = UserInfo::from_headers(&headers(&[(GROUPS_HEADER, "admin, ops,")]));
        assert_eq!(user.groups, vec!["admin", " ops", ""]);
    }

    #[test]
    fn utf8_name_comes_back_intact() {
        let mut map = HeaderMap::new();
        map.insert(
            NAME_HEADER,
            HeaderValue::from_bytes("José Müller".as_bytes()).unwrap(),
        );
        assert_eq!(UserInfo::from_headers(&map).name, "José Müller");
    }

    #[test]
    fn invalid_utf8_is_kept_rather_than_defaulted() {
        let mut map = HeaderMap::new();
        map.insert(IDENTITY_HEADER, HeaderValue::from_bytes(b"caf\xe9").unwrap());
        assert_eq!(UserInfo::from_headers(&map).username, "caf\u{fffd}");
    }
}
