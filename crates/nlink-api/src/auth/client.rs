use oauth2::{
    AccessToken, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet,
    EndpointSet, HttpClientError, RedirectUrl, RequestTokenError, TokenResponse, TokenUrl,
    basic::{BasicClient, BasicErrorResponse},
    url::Url,
};

use crate::{ApiConfig, error::ApiError, metrics::record_oauth_event};

/// OAuth client with the authorize and token endpoints set.
pub type NotionOAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Create the OAuth client for Notion's authorization-code grant.
///
/// Client credentials are sent to the token endpoint with HTTP Basic auth.
pub fn create_oauth_client(config: &ApiConfig) -> anyhow::Result<NotionOAuthClient> {
    let client = BasicClient::new(ClientId::new(config.client_id.clone()))
        .set_client_secret(ClientSecret::new(config.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.authorize_endpoint())?)
        .set_token_uri(TokenUrl::new(config.token_endpoint())?)
        .set_redirect_uri(RedirectUrl::new(config.redirect_uri.clone())?);

    Ok(client)
}

/// Build the consent-screen URL: `response_type=code`, client id and redirect URI.
///
/// `owner=user` asks Notion for a user-installed (public) integration. The
/// random `state` is attached by the library and not checked on callback.
pub fn authorize_url(client: &NotionOAuthClient) -> Url {
    let (url, _state) = client
        .authorize_url(CsrfToken::new_random)
        .add_extra_param("owner", "user")
        .url();

    url
}

/// Exchange an authorization code for a bearer token.
pub async fn exchange_code(
    client: &NotionOAuthClient,
    http_client: &reqwest::Client,
    code: String,
) -> Result<AccessToken, ApiError> {
    let result = client
        .exchange_code(AuthorizationCode::new(code))
        .request_async(http_client)
        .await;

    record_oauth_event("token_exchange", result.is_ok());

    let token_response = result.map_err(|e| ApiError::TokenExchange(describe(&e)))?;

    Ok(token_response.access_token().clone())
}

fn describe(err: &RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>) -> String {
    match err {
        RequestTokenError::ServerResponse(response) => format!("provider rejected code: {response}"),
        RequestTokenError::Request(e) => format!("request failed: {e}"),
        RequestTokenError::Parse(e, _) => format!("malformed token response: {e}"),
        RequestTokenError::Other(msg) => msg.clone(),
    }
}
