use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{permissions, ConfiguredCredentials, Identity};
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;

/// Checks a username/password pair against the two configured identity
/// sources: the environment-provided credential (empty permission set) and
/// the built-in administrative credential (full permission set).
///
/// Comparison is plaintext and the admin account is hardcoded; both are
/// preserved behavior from the system this service replaces (see DESIGN.md).
pub struct LoginUseCaseImpl {
    pub credentials: ConfiguredCredentials,
    pub logger: Arc<dyn Logger>,
}

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Identity, AuthError> {
        if self.credentials.matches(&params.username, &params.password) {
            self.logger
                .info(&format!("Login accepted for: {}", params.username));
            return Ok(Identity {
                id: 1,
                username: params.username,
                permissions: vec![],
            });
        }

        if params.username == ADMIN_USERNAME && params.password == ADMIN_PASSWORD {
            self.logger.info("Login accepted for: admin");
            return Ok(Identity {
                id: 99,
                username: params.username,
                permissions: permissions::all(),
            });
        }

        self.logger
            .warn(&format!("Login rejected for: {}", params.username));
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case() -> LoginUseCaseImpl {
        LoginUseCaseImpl {
            credentials: ConfiguredCredentials {
                username: Some("usuario".to_string()),
                password: Some("senha".to_string()),
            },
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_grant_full_permissions_when_admin_logs_in() {
        let result = use_case()
            .execute(LoginParams {
                username: "admin".to_string(),
                password: "admin".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.id, 99);
        assert!(result.has_permission(permissions::PRODUCTS_CREATE));
        assert!(result.has_permission(permissions::PRODUCTS_UPDATE));
        assert!(result.has_permission(permissions::PRODUCTS_DELETE));
    }

    #[tokio::test]
    async fn should_grant_empty_permissions_when_configured_user_logs_in() {
        let result = use_case()
            .execute(LoginParams {
                username: "usuario".to_string(),
                password: "senha".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.id, 1);
        assert!(result.permissions.is_empty());
    }

    #[tokio::test]
    async fn should_reject_login_when_password_is_wrong() {
        let result = use_case()
            .execute(LoginParams {
                username: "usuario".to_string(),
                password: "errada".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_reject_login_when_no_credentials_are_configured() {
        let use_case = LoginUseCaseImpl {
            credentials: ConfiguredCredentials::default(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "usuario".to_string(),
                password: "senha".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }
}
