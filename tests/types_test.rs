use spotsyncli::types::{Page, Playlist, Token, TokenGrantResponse, TrackItem};

#[test]
fn test_page_deserializes_with_next_link() {
    let json = r#"{
        "items": [
            {"track": {"id": "a", "uri": "spotify:track:a"}},
            {"track": {"id": "b", "uri": "spotify:track:b"}}
        ],
        "next": "https://api.spotify.com/v1/me/tracks?offset=50&limit=50"
    }"#;

    let page: Page<TrackItem> = serde_json::from_str(json).unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].track.id, "a");
    assert_eq!(page.items[1].track.uri, "spotify:track:b");
    assert!(page.next.is_some());
}

#[test]
fn test_page_deserializes_terminal_page() {
    // The last page carries an explicit null next link
    let json = r#"{"items": [{"id": "p1", "name": "Mix"}], "next": null}"#;
    let page: Page<Playlist> = serde_json::from_str(json).unwrap();
    assert_eq!(page.items.len(), 1);
    assert!(page.next.is_none());

    // A missing next field also terminates pagination
    let json = r#"{"items": []}"#;
    let page: Page<Playlist> = serde_json::from_str(json).unwrap();
    assert!(page.items.is_empty());
    assert!(page.next.is_none());
}

#[test]
fn test_token_defaults_to_empty() {
    // A fresh or partially written token file loads without failing
    let token: Token = serde_json::from_str("{}").unwrap();
    assert!(token.access_token.is_none());
    assert!(token.refresh_token.is_none());
    assert!(token.scope.is_none());
    assert!(token.expires_in.is_none());
    assert!(token.obtained_at.is_none());

    let json = r#"{"refresh_token": "AQCrefresh"}"#;
    let token: Token = serde_json::from_str(json).unwrap();
    assert!(token.access_token.is_none());
    assert_eq!(token.refresh_token.as_deref(), Some("AQCrefresh"));
}

#[test]
fn test_token_round_trip() {
    let token = Token {
        access_token: Some("BQCaccess".to_string()),
        refresh_token: Some("AQCrefresh".to_string()),
        scope: Some("user-library-read".to_string()),
        expires_in: Some(3600),
        obtained_at: Some(1_700_000_000),
    };

    let json = serde_json::to_string(&token).unwrap();
    let restored: Token = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.access_token.as_deref(), Some("BQCaccess"));
    assert_eq!(restored.refresh_token.as_deref(), Some("AQCrefresh"));
    assert_eq!(restored.expires_in, Some(3600));
}

#[test]
fn test_token_grant_response_without_refresh_token() {
    // Refresh grants usually omit the refresh token
    let json = r#"{
        "access_token": "BQCnew",
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-library-read"
    }"#;

    let grant: TokenGrantResponse = serde_json::from_str(json).unwrap();

    assert_eq!(grant.access_token, "BQCnew");
    assert!(grant.refresh_token.is_none());
    assert_eq!(grant.expires_in, Some(3600));
}

#[test]
fn test_token_grant_response_full_grant() {
    // Authorization-code grants carry both tokens
    let json = r#"{
        "access_token": "BQCnew",
        "refresh_token": "AQCnew",
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "playlist-modify-private"
    }"#;

    let grant: TokenGrantResponse = serde_json::from_str(json).unwrap();

    assert_eq!(grant.access_token, "BQCnew");
    assert_eq!(grant.refresh_token.as_deref(), Some("AQCnew"));
    assert_eq!(grant.scope.as_deref(), Some("playlist-modify-private"));
}
