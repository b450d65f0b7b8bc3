use std::io::{self, Write};

use reqwest::{Client, StatusCode, Url, header::AUTHORIZATION};

use crate::{
    config,
    management::TokenManager,
    types::{Token, TokenGrantResponse},
    utils, warning,
};

#[derive(Debug)]
pub enum AuthError {
    Request(reqwest::Error),
    Rejected(StatusCode),
    Code(String),
    Prompt(io::Error),
    Persist(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Request(err)
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Request(e) => write!(f, "token request failed: {}", e),
            AuthError::Rejected(status) => {
                write!(f, "token endpoint rejected the grant with status {}", status)
            }
            AuthError::Code(reason) => write!(f, "no usable authorization code: {}", reason),
            AuthError::Prompt(e) => write!(f, "failed to read authorization code: {}", e),
            AuthError::Persist(e) => write!(f, "failed to store token: {}", e),
        }
    }
}

/// A live authenticated session against the Spotify Web API.
///
/// A `Session` can only be obtained through a successful grant, so a bearer
/// header cannot be produced before authentication happened.
pub struct Session {
    access_token: String,
}

impl Session {
    fn new(access_token: String) -> Self {
        Session { access_token }
    }

    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}

/// Ensures an authenticated session, refreshing or authorizing as needed.
///
/// With a stored refresh token a refresh-token grant obtains a fresh access
/// token, leaving the refresh token unchanged unless the service issues a
/// new one. Without one, the full authorization-code flow runs: the
/// authorization URL is opened in the browser and the resulting code is read
/// from the terminal. Either way the updated token pair is written through
/// the token manager before the session is handed out.
///
/// This is a deliberate one-shot action performed once per run before any
/// API calls, not a per-call recovery mechanism. A rejected exchange is
/// fatal; the credentials or the stored refresh token need correction.
pub async fn ensure_authenticated(tokens: &mut TokenManager) -> Result<Session, AuthError> {
    let grant = match tokens.current().refresh_token.clone() {
        Some(refresh_token) => refresh_grant(&refresh_token).await?,
        None => authorize().await?,
    };

    let access_token = grant.access_token.clone();
    tokens.apply_grant(grant);
    tokens.persist().await.map_err(AuthError::Persist)?;

    Ok(Session::new(access_token))
}

/// Runs the full authorization-code flow unconditionally, discarding any
/// previously stored token pair. This is the only path that replaces a
/// stored refresh token with a fresh one.
pub async fn reauthorize(tokens: &mut TokenManager) -> Result<Session, AuthError> {
    let grant = authorize().await?;

    let access_token = grant.access_token.clone();
    tokens.replace(Token::default());
    tokens.apply_grant(grant);
    tokens.persist().await.map_err(AuthError::Persist)?;

    Ok(Session::new(access_token))
}

/// Performs the authorization-code flow: build the authorization URL with a
/// fresh state nonce, hand it to the browser, read the pasted code or
/// callback URL from stdin, and exchange the code at the token endpoint.
async fn authorize() -> Result<TokenGrantResponse, AuthError> {
    let state = utils::generate_state_nonce();
    let redirect_uri = config::spotify_redirect_uri();

    let mut auth_url = Url::parse(&config::spotify_apiauth_url())
        .expect("SPOTIFY_API_AUTH_URL must be a valid URL");
    auth_url
        .query_pairs_mut()
        .append_pair("client_id", &config::spotify_client_id())
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &redirect_uri)
        .append_pair("state", &state)
        .append_pair("scope", &config::spotify_scope());

    let input = obtain_code(auth_url.as_str())?;
    let code = utils::extract_authorization_code(&input, &redirect_uri, &state).ok_or_else(|| {
        AuthError::Code(
            "input was neither a bare code nor a callback URL matching this request".to_string(),
        )
    })?;

    exchange_code(&code, &redirect_uri).await
}

/// Opens the authorization URL in the default browser and reads the user's
/// response from the terminal. The browser is a convenience only; when it
/// cannot be opened the URL is printed for manual navigation.
fn obtain_code(auth_url: &str) -> Result<String, AuthError> {
    if webbrowser::open(auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    print!("Paste the authorization code or the full callback URL: ");
    io::stdout().flush().map_err(AuthError::Prompt)?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(AuthError::Prompt)?;
    Ok(line)
}

async fn exchange_code(code: &str, redirect_uri: &str) -> Result<TokenGrantResponse, AuthError> {
    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(
                &config::spotify_client_id(),
                &config::spotify_client_secret(),
            ),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AuthError::Rejected(response.status()));
    }

    Ok(response.json::<TokenGrantResponse>().await?)
}

async fn refresh_grant(refresh_token: &str) -> Result<TokenGrantResponse, AuthError> {
    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(
                &config::spotify_client_id(),
                &config::spotify_client_secret(),
            ),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AuthError::Rejected(response.status()));
    }

    Ok(response.json::<TokenGrantResponse>().await?)
}
