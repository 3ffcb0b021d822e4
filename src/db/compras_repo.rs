use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{compras::CompraResumo, relatorio::AgregadoProduto},
};

// Repositório da tabela 'compras'. Cada linha é um item de nota fiscal;
// uma nota com vários produtos gera várias linhas com a mesma nf_entrada.
#[derive(Clone)]
pub struct ComprasRepository {
    pool: PgPool,
}

impl ComprasRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(
        &self,
        limite: i64,
        deslocamento: i64,
    ) -> Result<Vec<CompraResumo>, AppError> {
        let compras = sqlx::query_as::<_, CompraResumo>(
            r#"
            SELECT c.id, c.cod_produto, p.nome, c.quantidade, c.preco, c.total,
                   c.nf_entrada, cf.cpf_cnpj, cf.razao_social, c.lote
            FROM compras c
            JOIN produtos p ON p.cod_produto = c.cod_produto
            JOIN clientes_fornecedores cf ON cf.id = c.fornecedor
            ORDER BY c.data_entrada ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limite)
        .bind(deslocamento)
        .fetch_all(&self.pool)
        .await?;
        Ok(compras)
    }

    /// Verifica se a nota fiscal já foi lançada. Na atualização, as linhas
    /// da própria compra ficam fora da conferência.
    pub async fn nota_existe(
        &self,
        nf_entrada: i64,
        excluir_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let existe = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM compras
                WHERE nf_entrada = $1 AND ($2::int IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(nf_entrada)
        .bind(excluir_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(existe)
    }

    pub async fn existe_id(&self, id: i32) -> Result<bool, AppError> {
        let existe =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM compras WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(existe)
    }

    // O total é coluna gerada (quantidade * preco); não entra no INSERT.
    pub async fn inserir_item(
        &self,
        cod_produto: &str,
        quantidade: i32,
        preco: Decimal,
        fornecedor: i32,
        nf_entrada: i64,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO compras (cod_produto, quantidade, preco, fornecedor, nf_entrada)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(cod_produto)
        .bind(quantidade)
        .bind(preco)
        .bind(fornecedor)
        .bind(nf_entrada)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn atualizar_item(
        &self,
        id: i32,
        cod_produto: &str,
        quantidade: i32,
        preco: Decimal,
        fornecedor: i32,
        nf_entrada: i64,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE compras
            SET cod_produto = $2, quantidade = $3, preco = $4,
                fornecedor = $5, nf_entrada = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(cod_produto)
        .bind(quantidade)
        .bind(preco)
        .bind(fornecedor)
        .bind(nf_entrada)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn remover(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM compras WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Procedimento do banco que renumera os lotes por ordem de entrada.
    /// Invocado após toda mutação de compras; o retorno é descartado.
    pub async fn reorganizar_lotes(&self) -> Result<(), AppError> {
        sqlx::query("CALL reorganizar_lotes()")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn agregar_por_produto(
        &self,
        cod_produto: &str,
    ) -> Result<Option<AgregadoProduto>, AppError> {
        let agregado = sqlx::query_as::<_, AgregadoProduto>(
            r#"
            SELECT p.nome,
                   AVG(c.preco) AS media,
                   SUM(c.quantidade)::bigint AS quantidade,
                   SUM(c.total) AS total
            FROM compras c
            JOIN produtos p ON p.cod_produto = c.cod_produto
            WHERE c.cod_produto = $1
            GROUP BY p.nome
            "#,
        )
        .bind(cod_produto)
        .fetch_optional(&self.pool)
        .await?;
        Ok(agregado)
    }
}
