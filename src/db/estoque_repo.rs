use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::estoque::{EstoqueItem, EstoqueProdutoItem},
};

// Repositório da tabela 'estoque'. Somente leitura: o saldo é mantido
// por rotinas do próprio banco a partir de compras e vendas.
#[derive(Clone)]
pub struct EstoqueRepository {
    pool: PgPool,
}

impl EstoqueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(
        &self,
        limite: i64,
        deslocamento: i64,
    ) -> Result<Vec<EstoqueItem>, AppError> {
        let itens = sqlx::query_as::<_, EstoqueItem>(
            r#"
            SELECT p.id, p.cod_produto, p.nome, e.quantidade,
                   p.cod_ean, p.cod_dun, c.lote
            FROM estoque e
            JOIN produtos p ON p.cod_produto = e.cod_produto
            JOIN compras c ON c.cod_produto = p.cod_produto
            ORDER BY c.lote ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limite)
        .bind(deslocamento)
        .fetch_all(&self.pool)
        .await?;
        Ok(itens)
    }

    pub async fn listar_por_produto(
        &self,
        cod_produto: &str,
        limite: i64,
        deslocamento: i64,
    ) -> Result<Vec<EstoqueProdutoItem>, AppError> {
        let itens = sqlx::query_as::<_, EstoqueProdutoItem>(
            r#"
            SELECT p.id, p.cod_produto, p.nome, e.quantidade,
                   p.cod_ean, p.cod_dun, c.lote,
                   TO_CHAR(c.data_entrada, 'DD/MM/YYYY') AS data_entrada,
                   TO_CHAR(c.data_entrada, 'HH24:MI:SS') AS horario_entrada
            FROM estoque e
            JOIN produtos p ON p.cod_produto = e.cod_produto
            JOIN compras c ON c.cod_produto = p.cod_produto
            WHERE e.cod_produto = $1
            ORDER BY c.lote ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(cod_produto)
        .bind(limite)
        .bind(deslocamento)
        .fetch_all(&self.pool)
        .await?;
        Ok(itens)
    }

    pub async fn quantidade_disponivel(
        &self,
        cod_produto: &str,
    ) -> Result<Option<i32>, AppError> {
        let quantidade = sqlx::query_scalar::<_, i32>(
            "SELECT quantidade FROM estoque WHERE cod_produto = $1",
        )
        .bind(cod_produto)
        .fetch_optional(&self.pool)
        .await?;
        Ok(quantidade)
    }
}
