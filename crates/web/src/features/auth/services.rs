use crate::middleware::auth::ApiKeys;

/// Admin account checked by the login endpoint
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    /// Login is disabled while no password is configured
    pub password: Option<String>,
}

#[derive(Clone)]
pub struct AuthState {
    pub api_keys: ApiKeys,
    pub admin: AdminCredentials,
}

/// Issues a token when the credentials match the configured admin
pub fn login(state: &AuthState, username: &str, password: &str) -> Option<String> {
    let Some(expected) = state.admin.password.as_deref() else {
        tracing::warn!("Login attempt while ADMIN_PASSWORD is not configured");
        return None;
    };

    if username == state.admin.username && password == expected {
        tracing::info!("Admin '{}' logged in", username);
        Some(state.api_keys.issue())
    } else {
        tracing::warn!("Failed login attempt for '{}'", username);
        None
    }
}
