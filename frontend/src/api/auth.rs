use common::error::ApiError;
use common::model::user::{TokenResponse, User};
use common::requests::{endpoints, LoginRequest, RegisterRequest};

use super::ApiClient;

/// Exchanges credentials for a token and stores it in the session.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    let token: TokenResponse = client.post_form(endpoints::LOGIN, &request.form_fields()).await?;
    client.session().sign_in(&token.access_token);
    Ok(token)
}

pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<User, ApiError> {
    client.post_json(endpoints::REGISTER, request).await
}

pub async fn me(client: &ApiClient) -> Result<User, ApiError> {
    client.get_json(endpoints::ME).await
}

pub fn logout(client: &ApiClient) {
    client.session().sign_out();
}
