use std::sync::Arc;

use dotenvy::dotenv;

use allowlist::AllowedCategoryClient;
use business::application::produto::filter_allowed::FilterAllowedProdutosUseCaseImpl;
use business::domain::produto::use_cases::filter_allowed::FilterAllowedProdutosUseCase;
use logger::TracingLogger;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use persistence::produto::repository::ProdutoRepositoryPostgres;

/// Offline batch tool: checks every produto's category against the remote
/// allowed-category service (fail-closed) and writes the allowed
/// `{id, name}` pairs to `processed.json`.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - ALLOWED_CATEGORY_URL: allowed-category service base URL
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;

    let base_url = std::env::var("ALLOWED_CATEGORY_URL")
        .unwrap_or_else(|_| "https://posdesweb.igormaldonado.com.br".to_string());

    let use_case = FilterAllowedProdutosUseCaseImpl {
        repository: Arc::new(ProdutoRepositoryPostgres::new(pool)),
        policy: Arc::new(AllowedCategoryClient::new(base_url)),
        logger: Arc::new(TracingLogger),
    };

    let allowed = use_case.execute().await?;

    let entries: Vec<serde_json::Value> = allowed
        .iter()
        .map(|p| serde_json::json!({ "id": p.id, "name": p.name }))
        .collect();

    tokio::fs::write("processed.json", serde_json::to_vec_pretty(&entries)?).await?;
    println!("processed.json written with {} produtos", entries.len());

    Ok(())
}
