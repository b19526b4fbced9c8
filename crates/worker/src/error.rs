use arena_cloud::CloudError;
use arena_db::StoreError;

/// Failure of an identity-pool hook.
///
/// The identity pool surfaces the message to the signing-up user, so
/// [`HookError::EmailTaken`] reads as a user-facing sentence.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Email is already taken")]
    EmailTaken,

    #[error("Missing user attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("Event carries no user pool id")]
    MissingUserPool,

    #[error(transparent)]
    Cloud(#[from] CloudError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
