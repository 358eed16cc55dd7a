use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::produto::model::{NewProduto, Produto, ProdutoChanges};
use business::domain::produto::repository::ProdutoRepository;

use super::entity::{ProdutoEntity, price_to_decimal};

const PRODUTO_COLUMNS: &str = "id, external_id, name, description, price, category, picture_url";

pub struct ProdutoRepositoryPostgres {
    pool: PgPool,
}

impl ProdutoRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("produtos query failed: {err}");
    RepositoryError::DatabaseError
}

fn write_error(err: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = err.as_database_error()
        && db_err.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    tracing::error!("produtos write failed: {err}");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProdutoRepository for ProdutoRepositoryPostgres {
    async fn all(&self) -> Result<Vec<Produto>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProdutoEntity>(&format!(
            "SELECT {PRODUTO_COLUMNS} FROM produtos ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_one(&self, id: i32) -> Result<Produto, RepositoryError> {
        let entity = sqlx::query_as::<_, ProdutoEntity>(&format!(
            "SELECT {PRODUTO_COLUMNS} FROM produtos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn add_one(&self, produto: &NewProduto) -> Result<Produto, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        let entity = sqlx::query_as::<_, ProdutoEntity>(&format!(
            "INSERT INTO produtos (external_id, name, description, price, category, picture_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {PRODUTO_COLUMNS}"
        ))
        .bind(&produto.external_id)
        .bind(&produto.name)
        .bind(&produto.description)
        .bind(price_to_decimal(produto.price))
        .bind(&produto.category)
        .bind(&produto.picture_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(write_error)?;

        tx.commit().await.map_err(query_error)?;
        Ok(entity.into_domain())
    }

    async fn update_one(
        &self,
        id: i32,
        changes: &ProdutoChanges,
    ) -> Result<Produto, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        // COALESCE keeps the stored value for every field the caller omitted.
        let result = sqlx::query(
            "UPDATE produtos SET
                external_id = COALESCE($2, external_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                category = COALESCE($6, category),
                picture_url = COALESCE($7, picture_url)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&changes.external_id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.price.map(price_to_decimal))
        .bind(&changes.category)
        .bind(&changes.picture_url)
        .execute(&mut *tx)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(RepositoryError::NotFound);
        }

        // Read-after-write inside the same transaction so the returned row
        // is exactly what was committed.
        let entity = sqlx::query_as::<_, ProdutoEntity>(&format!(
            "SELECT {PRODUTO_COLUMNS} FROM produtos WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(query_error)?;

        tx.commit().await.map_err(query_error)?;
        Ok(entity.into_domain())
    }

    async fn delete_one(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(query_error)?;
        Ok(())
    }
}
