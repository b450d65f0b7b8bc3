use std::path::PathBuf;

use chrono::Utc;

use crate::types::{Token, TokenGrantResponse};

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Loads the stored token pair. A missing token file yields an empty
    /// token, not an error; only unreadable or unparsable files fail.
    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self {
                    token: Token::default(),
                });
            }
            Err(e) => return Err(e.to_string()),
        };
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Folds a successful grant into the stored token. The refresh token is
    /// kept when the grant does not carry a new one; it is never cleared
    /// here, only `replace` discards it.
    pub fn apply_grant(&mut self, grant: TokenGrantResponse) {
        self.token.access_token = Some(grant.access_token);
        if grant.refresh_token.is_some() {
            self.token.refresh_token = grant.refresh_token;
        }
        if grant.scope.is_some() {
            self.token.scope = grant.scope;
        }
        self.token.expires_in = grant.expires_in;
        self.token.obtained_at = Some(Utc::now().timestamp() as u64);
    }

    /// Replaces the whole token pair. Used by explicit re-authorization.
    pub fn replace(&mut self, token: Token) {
        self.token = token;
    }

    pub fn current(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotsyncli/cache/token.json");
        path
    }
}
