//! Pre-signup hook: one account per email, confirmed on creation.

use arena_cloud::UserDirectory;
use aws_lambda_events::event::cognito::CognitoEventUserPoolsPreSignup;

use crate::error::HookError;

pub const EMAIL_ATTRIBUTE: &str = "email";

/// Reject the signup if the email is registered; otherwise auto-confirm the
/// user and auto-verify the email, returning the updated event.
pub async fn handle(
    directory: &dyn UserDirectory,
    mut event: CognitoEventUserPoolsPreSignup,
) -> Result<CognitoEventUserPoolsPreSignup, HookError> {
    let email = event
        .request
        .user_attributes
        .get(EMAIL_ATTRIBUTE)
        .ok_or(HookError::MissingAttribute(EMAIL_ATTRIBUTE))?;
    let user_pool_id = event
        .cognito_event_user_pools_header
        .user_pool_id
        .as_deref()
        .ok_or(HookError::MissingUserPool)?;

    if directory.is_email_registered(user_pool_id, email).await? {
        tracing::warn!(user_pool_id, "Rejecting signup with an email already in use");
        return Err(HookError::EmailTaken);
    }

    event.response.auto_confirm_user = true;
    event.response.auto_verify_email = true;
    tracing::info!("Signup auto-confirmed");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use arena_cloud::{CloudError, CloudResult};
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;

    struct Directory {
        registered: &'static [&'static str],
    }

    #[async_trait]
    impl UserDirectory for Directory {
        async fn is_email_registered(&self, user_pool_id: &str, email: &str) -> CloudResult<bool> {
            if user_pool_id != "us-east-1_pool" {
                return Err(CloudError::Service("ResourceNotFoundException".into()));
            }
            Ok(self.registered.contains(&email))
        }
    }

    fn event(attributes: serde_json::Value) -> CognitoEventUserPoolsPreSignup {
        serde_json::from_value(serde_json::json!({
            "version": "1",
            "triggerSource": "PreSignUp_SignUp",
            "region": "us-east-1",
            "userPoolId": "us-east-1_pool",
            "userName": "new-user",
            "callerContext": {"awsSdkVersion": "aws-sdk-js-3", "clientId": "client-1"},
            "request": {"userAttributes": attributes, "validationData": null},
            "response": {"autoConfirmUser": false, "autoVerifyEmail": false, "autoVerifyPhone": false}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn new_email_is_auto_confirmed_and_verified() {
        let directory = Directory { registered: &[] };
        let out = handle(&directory, event(serde_json::json!({"email": "new@example.com"})))
            .await
            .unwrap();

        assert!(out.response.auto_confirm_user);
        assert!(out.response.auto_verify_email);
        assert!(!out.response.auto_verify_phone);
    }

    #[tokio::test]
    async fn registered_email_is_rejected() {
        let directory = Directory {
            registered: &["taken@example.com"],
        };
        let err = handle(&directory, event(serde_json::json!({"email": "taken@example.com"})))
            .await
            .unwrap_err();

        assert_matches!(err, HookError::EmailTaken);
        assert_eq!(err.to_string(), "Email is already taken");
    }

    #[tokio::test]
    async fn missing_email_is_rejected() {
        let directory = Directory { registered: &[] };
        let err = handle(&directory, event(serde_json::json!({"name": "no email"})))
            .await
            .unwrap_err();

        assert_matches!(err, HookError::MissingAttribute("email"));
    }

    #[tokio::test]
    async fn directory_failure_fails_the_hook() {
        let directory = Directory { registered: &[] };
        let mut signup = event(serde_json::json!({"email": "new@example.com"}));
        signup.cognito_event_user_pools_header.user_pool_id = Some("other-pool".into());

        let err = handle(&directory, signup).await.unwrap_err();
        assert_matches!(err, HookError::Cloud(CloudError::Service(_)));
    }
}
