use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{spotify::auth::Session, types::Page};

#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status(StatusCode),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "page request failed: {}", e),
            FetchError::Status(status) => write!(f, "page request returned status {}", status),
        }
    }
}

/// Materializes a complete paginated collection.
///
/// Issues the initial request, then follows the `next` page link returned by
/// each response until it is absent, appending the items of every page in
/// order. The whole collection is returned eagerly because callers need full
/// membership testing over it.
///
/// # Arguments
///
/// * `session` - Authenticated session supplying the bearer token
/// * `first_url` - URL of the collection's first page, including any
///   query parameters such as `limit`
///
/// # Errors
///
/// Any non-success HTTP status or transport/decode failure at any page
/// aborts the whole fetch with a `FetchError`; no partial results are
/// returned to the caller.
pub async fn fetch_all<T>(session: &Session, first_url: &str) -> Result<Vec<T>, FetchError>
where
    T: DeserializeOwned,
{
    let client = Client::new();
    let mut items: Vec<T> = Vec::new();
    let mut next = Some(first_url.to_string());

    while let Some(url) = next {
        let response = client
            .get(&url)
            .bearer_auth(session.bearer_token())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let page = response.json::<Page<T>>().await?;
        items.extend(page.items);
        next = page.next;
    }

    Ok(items)
}
