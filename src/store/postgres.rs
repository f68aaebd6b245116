//! PostgreSQL-backed store over the `produtos` table.

use super::ProductStore;
use crate::error::{AppError, ConfigError};
use crate::model::Product;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const COLUMNS: &str = "id, nome, descricao, preco, quantidade_estoque, fabricante";

type ProductRow = (i64, String, String, Decimal, i32, String);

fn row_to_product((id, name, description, price, stock_quantity, manufacturer): ProductRow) -> Product {
    Product {
        id: Some(id),
        name,
        description,
        price,
        stock_quantity,
        manufacturer,
    }
}

/// Create the `produtos` table if missing. Identity columns never hand out a value twice.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS produtos (
            id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            nome TEXT NOT NULL,
            descricao TEXT NOT NULL,
            preco NUMERIC NOT NULL,
            quantidade_estoque INTEGER NOT NULL,
            fabricante TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| invalid_url(database_url, e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| invalid_url(url, "no path".into()))? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

/// A bad `DATABASE_URL` is an operator configuration problem, reported at startup.
/// Credentials are dropped from the echoed value.
fn invalid_url(url: &str, reason: String) -> AppError {
    let value = match (url.find("://"), url.rfind('@')) {
        (Some(scheme), Some(at)) if at > scheme => format!("{}://***@{}", &url[..scheme], &url[at + 1..]),
        _ => url.to_string(),
    };
    AppError::Config(ConfigError::Invalid {
        key: "DATABASE_URL",
        value,
        reason,
    })
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM produtos ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<ProductRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(row_to_product).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM produtos WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<ProductRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(row_to_product))
    }

    async fn save(&self, product: Product) -> Result<Product, AppError> {
        let row: Option<ProductRow> = match product.id {
            None => {
                let sql = format!(
                    "INSERT INTO produtos (nome, descricao, preco, quantidade_estoque, fabricante) \
                     VALUES ($1, $2, $3, $4, $5) RETURNING {}",
                    COLUMNS
                );
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as(&sql)
                    .bind(&product.name)
                    .bind(&product.description)
                    .bind(product.price)
                    .bind(product.stock_quantity)
                    .bind(&product.manufacturer)
                    .fetch_optional(&self.pool)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    "UPDATE produtos SET nome = $1, descricao = $2, preco = $3, quantidade_estoque = $4, \
                     fabricante = $5 WHERE id = $6 RETURNING {}",
                    COLUMNS
                );
                tracing::debug!(sql = %sql, id, "query");
                let row: Option<ProductRow> = sqlx::query_as(&sql)
                    .bind(&product.name)
                    .bind(&product.description)
                    .bind(product.price)
                    .bind(product.stock_quantity)
                    .bind(&product.manufacturer)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?;
                Some(row.ok_or_else(AppError::product_not_found)?)
            }
        };
        row.map(row_to_product)
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete");
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::product_not_found());
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM produtos WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
