use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, RwLock};

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// Rejects requests that do not carry a known bearer token
pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| api_keys.is_valid(token.trim()));

    if !authorized {
        tracing::warn!("Invalid API key attempt on {}", request.uri().path());
        return Err(WebError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Logins kept valid at once; the oldest issued token is dropped past this
pub const MAX_ISSUED_TOKENS: usize = 256;

#[derive(Default)]
struct KeySet {
    configured: HashSet<String>,
    // Oldest first
    issued: VecDeque<String>,
}

/// Accepted bearer tokens: the static keys from configuration plus the most
/// recent tokens issued by a successful admin login.
#[derive(Clone, Default)]
pub struct ApiKeys {
    keys: Arc<RwLock<KeySet>>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let configured = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            keys: Arc::new(RwLock::new(KeySet {
                configured,
                issued: VecDeque::new(),
            })),
        }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        let keys = self
            .keys
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        keys.configured.contains(key) || keys.issued.iter().any(|t| t == key)
    }

    /// Mints a new random token and accepts it until
    /// [`MAX_ISSUED_TOKENS`] newer ones have been issued
    pub fn issue(&self) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        let mut keys = self
            .keys
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if keys.issued.len() >= MAX_ISSUED_TOKENS {
            keys.issued.pop_front();
        }
        keys.issued.push_back(token.clone());
        token
    }
}
