use contracts::system::auth::{LoginRequest, LoginResponse};

use super::storage::TokenStore;
use crate::shared::http::{ApiClient, ApiError, Method, RequestOptions};

const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";

/// Login with username and password
///
/// On success the access token is saved to `store`. Every failure, whether
/// the server rejected the credentials or could not be reached, comes back
/// as [`ApiError::InvalidCredentials`]; the cause is only logged.
pub async fn login(
    client: &ApiClient,
    store: &dyn TokenStore,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let result = match RequestOptions::new().json(&request) {
        Ok(options) => {
            client
                .request::<LoginResponse>(Method::Post, LOGIN_PATH, options)
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => {
            store.save(&response.access_token);
            log::info!("logged in as '{}'", username);
            Ok(response)
        }
        Err(e) => {
            log::warn!("login failed for '{}': {}", username, e);
            Err(ApiError::InvalidCredentials)
        }
    }
}

/// Logout: revoke the token on the server, then forget it locally.
///
/// The local token is cleared even when the server is unreachable or
/// answers with an error, so logout always succeeds from the caller's view.
pub async fn logout(client: &ApiClient, store: &dyn TokenStore) {
    if let Some(token) = store.load() {
        let options = RequestOptions::new().bearer(token);
        if let Err(e) = client.execute(Method::Post, LOGOUT_PATH, options).await {
            log::warn!("server logout failed, clearing local session anyway: {}", e);
        }
    }
    store.clear();
}

/// Stored token, if the user is logged in.
pub fn current_token(store: &dyn TokenStore) -> Option<String> {
    store.load().filter(|t| !t.trim().is_empty())
}
