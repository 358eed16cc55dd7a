use std::sync::Arc;

use logger::TracingLogger;
use persistence::produto::repository::ProdutoRepositoryPostgres;
use storage::LocalImageStore;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::produto::create::CreateProdutoUseCaseImpl;
use business::application::produto::delete::DeleteProdutoUseCaseImpl;
use business::application::produto::get_all::GetAllProdutosUseCaseImpl;
use business::application::produto::get_by_id::GetProdutoByIdUseCaseImpl;
use business::application::produto::update::UpdateProdutoUseCaseImpl;
use business::application::produto::update_picture::UpdateProdutoPictureUseCaseImpl;

use crate::config::auth_config::AuthConfig;
use crate::config::storage_config::StorageConfig;

/// Explicitly constructed service graph; no ambient singletons. Everything
/// the routing layer needs is wired here once at startup.
pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub produto_api: crate::api::produto::routes::ProdutoApi,
    pub auth_api: crate::api::auth::routes::AuthApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let produto_repository = Arc::new(ProdutoRepositoryPostgres::new(pool));

        let storage_config = StorageConfig::from_env();
        let image_store = Arc::new(LocalImageStore::new(storage_config.image_dir));

        // Produto use cases
        let create_use_case = Arc::new(CreateProdutoUseCaseImpl {
            repository: produto_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProdutosUseCaseImpl {
            repository: produto_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProdutoByIdUseCaseImpl {
            repository: produto_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProdutoUseCaseImpl {
            repository: produto_repository.clone(),
            logger: logger.clone(),
        });
        let update_picture_use_case = Arc::new(UpdateProdutoPictureUseCaseImpl {
            repository: produto_repository.clone(),
            image_store,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProdutoUseCaseImpl {
            repository: produto_repository,
            logger: logger.clone(),
        });

        // Auth use cases
        let auth_config = AuthConfig::from_env();
        let login_use_case = Arc::new(LoginUseCaseImpl {
            credentials: auth_config.credentials,
            logger,
        });

        let produto_api = crate::api::produto::routes::ProdutoApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            update_picture_use_case,
            delete_use_case,
        );

        let auth_api =
            crate::api::auth::routes::AuthApi::new(login_use_case, auth_config.jwt_secret);

        Ok(Self {
            health_api,
            produto_api,
            auth_api,
        })
    }
}
