// ABOUTME: Cookie header parsing for session tokens issued by the identity provider
// ABOUTME: Returns the raw value of a named cookie from the request headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::header::COOKIE;
use http::HeaderMap;

/// Get the value of the named cookie from all `Cookie` headers
///
/// Surrounding double quotes are stripped. Empty values are treated as absent.
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_owned())
        .filter(|value| !value.is_empty())
}
