use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::produtos::{Produto, ProdutoPayload},
};

// Repositório da tabela 'produtos'. O código do produto é a chave de
// negócio usada nas junções; o id serial só aparece na atualização.
#[derive(Clone)]
pub struct ProdutosRepository {
    pool: PgPool,
}

impl ProdutosRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self, limite: i64, deslocamento: i64) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            r#"
            SELECT id, cod_produto, nome, cod_ean, cod_dun
            FROM produtos
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limite)
        .bind(deslocamento)
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    pub async fn listar_por_codigo(&self, cod_produto: &str) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT id, cod_produto, nome, cod_ean, cod_dun FROM produtos WHERE cod_produto = $1",
        )
        .bind(cod_produto)
        .fetch_all(&self.pool)
        .await?;
        Ok(produtos)
    }

    pub async fn codigo_existe(&self, cod_produto: &str) -> Result<bool, AppError> {
        let existe = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM produtos WHERE cod_produto = $1)",
        )
        .bind(cod_produto)
        .fetch_one(&self.pool)
        .await?;
        Ok(existe)
    }

    pub async fn existe_id(&self, id: i32) -> Result<bool, AppError> {
        let existe =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM produtos WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(existe)
    }

    /// Resolve o código interno do produto a partir do EAN lido na venda.
    pub async fn buscar_codigo_por_ean(
        &self,
        cod_ean: &str,
    ) -> Result<Option<String>, AppError> {
        let codigo = sqlx::query_scalar::<_, String>(
            "SELECT cod_produto FROM produtos WHERE cod_ean = $1",
        )
        .bind(cod_ean)
        .fetch_optional(&self.pool)
        .await?;
        Ok(codigo)
    }

    pub async fn inserir(&self, dados: &ProdutoPayload) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO produtos (cod_produto, nome, cod_ean, cod_dun) VALUES ($1, $2, $3, $4)",
        )
        .bind(&dados.cod_produto)
        .bind(&dados.nome)
        .bind(&dados.cod_ean)
        .bind(&dados.cod_dun)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn atualizar(&self, id: i32, dados: &ProdutoPayload) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE produtos SET cod_produto = $2, nome = $3, cod_ean = $4, cod_dun = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&dados.cod_produto)
        .bind(&dados.nome)
        .bind(&dados.cod_ean)
        .bind(&dados.cod_dun)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn remover_por_codigo(&self, cod_produto: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM produtos WHERE cod_produto = $1")
            .bind(cod_produto)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
