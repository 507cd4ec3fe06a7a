//! Client Identification
//!
//! Anonymous visitors are told apart by a fingerprint of their address and
//! User-Agent. It is stable for the same browser on the same network and
//! carries neither value in clear.

use std::net::IpAddr;

use http::{HeaderMap, header};

use crate::crypto::sha256_hex;

/// Client IP: first `X-Forwarded-For` entry, else the socket peer.
pub fn client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}

/// Hex SHA-256 of `"<ip>-<user agent>"`; missing parts read as `unknown`.
pub fn visitor_fingerprint(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> String {
    let ip = client_ip(headers, direct_ip)
        .map_or_else(|| "unknown".to_string(), |ip| ip.to_string());
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    sha256_hex(format!("{ip}-{user_agent}").as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(xff: Option<&'static str>, ua: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(xff) = xff {
            headers.insert("x-forwarded-for", HeaderValue::from_static(xff));
        }
        if let Some(ua) = ua {
            headers.insert(header::USER_AGENT, HeaderValue::from_static(ua));
        }
        headers
    }

    #[test]
    fn test_forwarded_for_wins_over_peer() {
        let peer: IpAddr = "127.0.0.1".parse().unwrap();
        let ip = client_ip(&headers(Some("203.0.113.7, 10.0.0.1"), None), Some(peer));
        assert_eq!(ip, Some("203.0.113.7".parse().unwrap()));

        assert_eq!(client_ip(&headers(Some("garbage"), None), Some(peer)), Some(peer));
        assert_eq!(client_ip(&HeaderMap::new(), None), None);
    }

    #[test]
    fn test_fingerprint_is_stable_and_distinguishing() {
        let a = visitor_fingerprint(&headers(Some("203.0.113.7"), Some("Firefox")), None);
        let again = visitor_fingerprint(&headers(Some("203.0.113.7"), Some("Firefox")), None);
        let other_ua = visitor_fingerprint(&headers(Some("203.0.113.7"), Some("Safari")), None);
        let other_ip = visitor_fingerprint(&headers(Some("203.0.113.8"), Some("Firefox")), None);

        assert_eq!(a, again);
        assert_ne!(a, other_ua);
        assert_ne!(a, other_ip);
        assert_eq!(a.len(), 64);
        assert!(!a.contains("203.0.113.7"));
    }

    #[test]
    fn test_fingerprint_without_headers() {
        assert_eq!(
            visitor_fingerprint(&HeaderMap::new(), None),
            sha256_hex(b"unknown-unknown")
        );
    }
}
