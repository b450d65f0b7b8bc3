use spotsyncli::spotify::tracks::MAX_TRACKS_PER_ADD;
use spotsyncli::types::{Track, TrackItem};
use spotsyncli::utils::*;

// Helper function to create a test track item
fn create_test_item(id: &str) -> TrackItem {
    TrackItem {
        track: Track {
            id: id.to_string(),
            uri: format!("spotify:track:{}", id),
        },
    }
}

fn create_test_items(ids: &[&str]) -> Vec<TrackItem> {
    ids.iter().map(|id| create_test_item(id)).collect()
}

const REDIRECT_URI: &str = "http://127.0.0.1:65010/authorize_callback";
const STATE: &str = "teststate123";

#[test]
fn test_generate_state_nonce() {
    let nonce = generate_state_nonce();

    // Should be exactly 32 characters
    assert_eq!(nonce.len(), 32);

    // Should contain only alphanumeric characters
    assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated nonces should be different
    let nonce2 = generate_state_nonce();
    assert_ne!(nonce, nonce2);
}

#[test]
fn test_basic_auth_header() {
    let header = basic_auth_header("my-client-id", "my-client-secret");

    // Standard base64 of "my-client-id:my-client-secret", with padding
    assert_eq!(header, "Basic bXktY2xpZW50LWlkOm15LWNsaWVudC1zZWNyZXQ=");

    // Deterministic
    assert_eq!(header, basic_auth_header("my-client-id", "my-client-secret"));
}

#[test]
fn test_pair_key() {
    assert_eq!(pair_key("src123", "dst456"), "src123#dst456");

    // Saved-tracks library source uses the empty id
    assert_eq!(pair_key("", "dst456"), "#dst456");

    // Different pairs produce different keys
    assert_ne!(pair_key("a", "b"), pair_key("b", "a"));
}

#[test]
fn test_extract_authorization_code_bare_code() {
    // A bare code is taken as-is
    let code = extract_authorization_code("AQBsomecode", REDIRECT_URI, STATE);
    assert_eq!(code.as_deref(), Some("AQBsomecode"));

    // Surrounding whitespace from the paste is trimmed
    let code = extract_authorization_code("  AQBsomecode\n", REDIRECT_URI, STATE);
    assert_eq!(code.as_deref(), Some("AQBsomecode"));

    // Empty input is not a code
    assert_eq!(extract_authorization_code("", REDIRECT_URI, STATE), None);
    assert_eq!(extract_authorization_code("   \n", REDIRECT_URI, STATE), None);
}

#[test]
fn test_extract_authorization_code_callback_url() {
    let input = format!(
        "http://127.0.0.1:65010/authorize_callback?code=AQBfromurl&state={}",
        STATE
    );
    let code = extract_authorization_code(&input, REDIRECT_URI, STATE);
    assert_eq!(code.as_deref(), Some("AQBfromurl"));

    // Query parameter order does not matter
    let input = format!(
        "http://127.0.0.1:65010/authorize_callback?state={}&code=AQBfromurl",
        STATE
    );
    let code = extract_authorization_code(&input, REDIRECT_URI, STATE);
    assert_eq!(code.as_deref(), Some("AQBfromurl"));

    // Extra parameters are ignored
    let input = format!(
        "http://127.0.0.1:65010/authorize_callback?code=AQBfromurl&state={}&foo=bar",
        STATE
    );
    let code = extract_authorization_code(&input, REDIRECT_URI, STATE);
    assert_eq!(code.as_deref(), Some("AQBfromurl"));
}

#[test]
fn test_extract_authorization_code_rejects_mismatches() {
    // Wrong state nonce
    let input = "http://127.0.0.1:65010/authorize_callback?code=AQBx&state=wrongstate";
    assert_eq!(extract_authorization_code(input, REDIRECT_URI, STATE), None);

    // Missing state
    let input = "http://127.0.0.1:65010/authorize_callback?code=AQBx";
    assert_eq!(extract_authorization_code(input, REDIRECT_URI, STATE), None);

    // Wrong path
    let input = format!("http://127.0.0.1:65010/other_path?code=AQBx&state={}", STATE);
    assert_eq!(extract_authorization_code(&input, REDIRECT_URI, STATE), None);

    // Wrong port
    let input = format!(
        "http://127.0.0.1:9999/authorize_callback?code=AQBx&state={}",
        STATE
    );
    assert_eq!(extract_authorization_code(&input, REDIRECT_URI, STATE), None);

    // Wrong host
    let input = format!(
        "http://example.com:65010/authorize_callback?code=AQBx&state={}",
        STATE
    );
    assert_eq!(extract_authorization_code(&input, REDIRECT_URI, STATE), None);

    // Matching URL without a code parameter
    let input = format!(
        "http://127.0.0.1:65010/authorize_callback?state={}",
        STATE
    );
    assert_eq!(extract_authorization_code(&input, REDIRECT_URI, STATE), None);
}

#[test]
fn test_order_for_processing() {
    let items = create_test_items(&["a", "b", "c"]);

    // Saved-tracks sources replay in reverse (chronological save order)
    let ordered = order_for_processing(items.clone(), true);
    let ids: Vec<&str> = ordered.iter().map(|i| i.track.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);

    // Playlist sources keep the fetched order
    let ordered = order_for_processing(items, false);
    let ids: Vec<&str> = ordered.iter().map(|i| i.track.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_plan_additions_example_scenario() {
    // Source [A, B, C], destination [B], empty ledger:
    // A and C are queued in order, B is marked synced without being queued.
    let source = create_test_items(&["A", "B", "C"]);
    let destination = create_test_items(&["B"]);
    let mut synced: Vec<String> = Vec::new();

    let queued = plan_additions(&source, &destination, &mut synced);

    assert_eq!(queued, vec!["spotify:track:A", "spotify:track:C"]);
    assert_eq!(synced, vec!["A", "B", "C"]);
}

#[test]
fn test_plan_additions_idempotence() {
    let source = create_test_items(&["A", "B", "C"]);
    let destination = create_test_items(&["B"]);
    let mut synced: Vec<String> = Vec::new();

    let first = plan_additions(&source, &destination, &mut synced);
    assert_eq!(first.len(), 2);

    // Second run with the persisted sequence queues nothing
    let second = plan_additions(&source, &destination, &mut synced);
    assert!(second.is_empty());
    assert_eq!(synced, vec!["A", "B", "C"]);
}

#[test]
fn test_plan_additions_never_requeues_ledgered_ids() {
    // An id already in the ledger is skipped entirely, even when the
    // destination does not contain it.
    let source = create_test_items(&["A", "B"]);
    let destination: Vec<TrackItem> = Vec::new();
    let mut synced: Vec<String> = vec!["A".to_string()];

    let queued = plan_additions(&source, &destination, &mut synced);

    assert_eq!(queued, vec!["spotify:track:B"]);
    assert_eq!(synced, vec!["A", "B"]);
}

#[test]
fn test_plan_additions_destination_presence_skip() {
    // Present in the destination but not in the ledger: marked synced,
    // never queued.
    let source = create_test_items(&["A"]);
    let destination = create_test_items(&["A"]);
    let mut synced: Vec<String> = Vec::new();

    let queued = plan_additions(&source, &destination, &mut synced);

    assert!(queued.is_empty());
    assert_eq!(synced, vec!["A"]);
}

#[test]
fn test_plan_additions_duplicate_source_ids() {
    // A track appearing twice in the source is handled once
    let source = create_test_items(&["A", "A", "B"]);
    let destination: Vec<TrackItem> = Vec::new();
    let mut synced: Vec<String> = Vec::new();

    let queued = plan_additions(&source, &destination, &mut synced);

    assert_eq!(queued, vec!["spotify:track:A", "spotify:track:B"]);
    assert_eq!(synced, vec!["A", "B"]);
}

#[test]
fn test_batch_fan_out_sizes() {
    let ids: Vec<String> = (0..250).map(|i| format!("id{}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
    let source = create_test_items(&id_refs);
    let mut synced: Vec<String> = Vec::new();

    let queued = plan_additions(&source, &[], &mut synced);
    assert_eq!(queued.len(), 250);

    // 250 queued URIs fan out into write calls of 100, 100 and 50
    let batches: Vec<&[String]> = queued.chunks(MAX_TRACKS_PER_ADD).collect();
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 100);
    assert_eq!(batches[1].len(), 100);
    assert_eq!(batches[2].len(), 50);

    // Relative order is preserved across batches
    assert_eq!(batches[0][0], "spotify:track:id0");
    assert_eq!(batches[1][0], "spotify:track:id100");
    assert_eq!(batches[2][49], "spotify:track:id249");
}
