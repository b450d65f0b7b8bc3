use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;

use crate::types::TrackItem;

pub fn generate_state_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
}

/// Extracts the authorization code from the user's pasted input.
///
/// The input is either the bare authorization code or the full callback URL
/// the browser was redirected to. A callback URL must target the configured
/// redirect URI and carry the exact `state` nonce of the current flow;
/// anything else is rejected.
pub fn extract_authorization_code(input: &str, redirect_uri: &str, state: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let url = match Url::parse(trimmed) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => url,
        // not a callback URL, take the input as the bare code
        _ => return Some(trimmed.to_string()),
    };

    let expected = Url::parse(redirect_uri).ok()?;
    if url.scheme() != expected.scheme()
        || url.host_str() != expected.host_str()
        || url.port_or_known_default() != expected.port_or_known_default()
        || url.path() != expected.path()
    {
        return None;
    }

    let mut code: Option<String> = None;
    let mut callback_state: Option<String> = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => callback_state = Some(value.into_owned()),
            _ => {}
        }
    }

    if callback_state.as_deref() != Some(state) {
        return None;
    }

    code
}

pub fn pair_key(source: &str, destination: &str) -> String {
    format!("{}#{}", source, destination)
}

/// Saved tracks arrive most-recently-saved first; replaying them in save
/// order keeps the destination in natural order. Playlist sources keep the
/// API order unchanged.
pub fn order_for_processing(mut items: Vec<TrackItem>, saved_library: bool) -> Vec<TrackItem> {
    if saved_library {
        items.reverse();
    }
    items
}

/// Computes the URIs to queue for addition to the destination.
///
/// Every source track id not yet in `synced` is appended to it immediately,
/// whether or not an addition is queued. Tracks already present in the
/// destination are marked synced without being queued.
pub fn plan_additions(
    source: &[TrackItem],
    destination: &[TrackItem],
    synced: &mut Vec<String>,
) -> Vec<String> {
    let destination_ids: HashSet<&str> = destination
        .iter()
        .map(|item| item.track.id.as_str())
        .collect();

    let mut queued = Vec::new();
    for item in source {
        let id = &item.track.id;
        if synced.contains(id) {
            continue;
        }
        synced.push(id.clone());

        if destination_ids.contains(id.as_str()) {
            continue;
        }
        queued.push(item.track.uri.clone());
    }

    queued
}
