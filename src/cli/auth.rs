use crate::{error, management::TokenManager, spotify, success};

/// Runs the full authorization-code flow, replacing any stored token pair.
pub async fn auth() {
    let mut tokens = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!("Failed to load token cache: {}", e),
    };

    match spotify::auth::reauthorize(&mut tokens).await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("Authentication failed: {}", e),
    }
}
