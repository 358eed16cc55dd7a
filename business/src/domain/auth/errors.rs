#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.missing_permissions")]
    MissingPermissions,
    #[error("auth.permission_denied")]
    PermissionDenied,
}
