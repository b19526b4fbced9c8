//! Identity-pool operations.

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::types::AuthFlowType;
use aws_sdk_cognitoidentityprovider::Client;

use crate::error::{classify_sdk_error, CloudResult};

/// User attribute holding the immutable subject id.
pub const SUBJECT_ATTRIBUTE: &str = "sub";

/// Credential operations performed on behalf of a signed-in user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve an access token to the user's subject id.
    ///
    /// Returns `Ok(None)` when the user exists but carries no subject.
    async fn resolve_subject(&self, access_token: &str) -> CloudResult<Option<String>>;

    /// Trade a refresh token for a fresh access token.
    async fn refresh_access_token(&self, refresh_token: &str) -> CloudResult<Option<String>>;

    /// Invalidate every token issued to the user owning `access_token`.
    async fn global_sign_out(&self, access_token: &str) -> CloudResult<()>;
}

/// Administrative lookups used by signup hooks.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether any user in `user_pool_id` already has `email`.
    async fn is_email_registered(&self, user_pool_id: &str, email: &str) -> CloudResult<bool>;
}

/// Pick the subject out of a user's `(name, value)` attribute pairs.
pub fn find_subject<'a, I>(attributes: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    attributes
        .into_iter()
        .find(|(name, _)| *name == SUBJECT_ATTRIBUTE)
        .and_then(|(_, value)| value.map(str::to_string))
}

/// `ListUsers` filter matching an exact email.
pub fn email_filter(email: &str) -> String {
    format!("email = \"{}\"", email.replace('"', "\\\""))
}

// ---------------------------------------------------------------------------
// Cognito
// ---------------------------------------------------------------------------

/// [`IdentityProvider`] backed by a Cognito user pool app client.
#[derive(Debug, Clone)]
pub struct CognitoIdentity {
    client: Client,
    client_id: String,
}

impl CognitoIdentity {
    pub fn new(client: Client, client_id: String) -> Self {
        Self { client, client_id }
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentity {
    async fn resolve_subject(&self, access_token: &str) -> CloudResult<Option<String>> {
        let output = self
            .client
            .get_user()
            .access_token(access_token)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(find_subject(
            output
                .user_attributes()
                .iter()
                .map(|attr| (attr.name(), attr.value())),
        ))
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> CloudResult<Option<String>> {
        let output = self
            .client
            .initiate_auth()
            .auth_flow(AuthFlowType::RefreshTokenAuth)
            .client_id(&self.client_id)
            .auth_parameters("REFRESH_TOKEN", refresh_token)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(output
            .authentication_result()
            .and_then(|result| result.access_token())
            .map(str::to_string))
    }

    async fn global_sign_out(&self, access_token: &str) -> CloudResult<()> {
        self.client
            .global_sign_out()
            .access_token(access_token)
            .send()
            .await
            .map_err(classify_sdk_error)?;
        Ok(())
    }
}

/// [`UserDirectory`] backed by the Cognito admin API.
#[derive(Debug, Clone)]
pub struct CognitoDirectory {
    client: Client,
}

impl CognitoDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for CognitoDirectory {
    async fn is_email_registered(&self, user_pool_id: &str, email: &str) -> CloudResult<bool> {
        let output = self
            .client
            .list_users()
            .user_pool_id(user_pool_id)
            .filter(email_filter(email))
            .limit(1)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(output.users.is_some_and(|users| !users.is_empty()))
    }
}
