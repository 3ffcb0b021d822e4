use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{relatorio::AgregadoProduto, vendas::VendaResumo},
};

// Repositório da tabela 'vendas'. A escrita é condicionada ao saldo de
// estoque na própria instrução, fechando a janela entre conferir e gravar.
#[derive(Clone)]
pub struct VendasRepository {
    pool: PgPool,
}

impl VendasRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(
        &self,
        limite: i64,
        deslocamento: i64,
    ) -> Result<Vec<VendaResumo>, AppError> {
        let vendas = sqlx::query_as::<_, VendaResumo>(
            r#"
            SELECT v.id, p.cod_produto, p.nome, v.quantidade, v.preco, v.total,
                   v.data_saida, cf.razao_social
            FROM vendas v
            JOIN produtos p ON p.cod_produto = v.cod_produto
            JOIN clientes_fornecedores cf ON cf.id = v.cliente
            ORDER BY v.data_saida ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limite)
        .bind(deslocamento)
        .fetch_all(&self.pool)
        .await?;
        Ok(vendas)
    }

    pub async fn existe_id(&self, id: i32) -> Result<bool, AppError> {
        let existe =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vendas WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(existe)
    }

    pub async fn existe_para_produto(&self, cod_produto: &str) -> Result<bool, AppError> {
        let existe = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM vendas WHERE cod_produto = $1)",
        )
        .bind(cod_produto)
        .fetch_one(&self.pool)
        .await?;
        Ok(existe)
    }

    /// Insere a venda somente se o saldo em estoque cobre a quantidade.
    /// Devolve quantas linhas foram gravadas: zero significa saldo
    /// insuficiente no instante da escrita.
    pub async fn inserir_condicional(
        &self,
        cod_produto: &str,
        quantidade: i32,
        preco: Decimal,
        cliente: i32,
    ) -> Result<u64, AppError> {
        let resultado = sqlx::query(
            r#"
            INSERT INTO vendas (cod_produto, quantidade, preco, cliente)
            SELECT $1, $2, $3, $4
            WHERE COALESCE((SELECT quantidade FROM estoque WHERE cod_produto = $1), 0) >= $2
            "#,
        )
        .bind(cod_produto)
        .bind(quantidade)
        .bind(preco)
        .bind(cliente)
        .execute(&self.pool)
        .await?;
        Ok(resultado.rows_affected())
    }

    /// Mesma guarda de saldo do insert, aplicada à linha indicada.
    pub async fn atualizar_condicional(
        &self,
        id: i32,
        cod_produto: &str,
        quantidade: i32,
        preco: Decimal,
        cliente: i32,
    ) -> Result<u64, AppError> {
        let resultado = sqlx::query(
            r#"
            UPDATE vendas
            SET cod_produto = $2, quantidade = $3, preco = $4, cliente = $5
            WHERE id = $1
              AND COALESCE((SELECT quantidade FROM estoque WHERE cod_produto = $2), 0) >= $3
            "#,
        )
        .bind(id)
        .bind(cod_produto)
        .bind(quantidade)
        .bind(preco)
        .bind(cliente)
        .execute(&self.pool)
        .await?;
        Ok(resultado.rows_affected())
    }

    pub async fn remover(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM vendas WHERE id = $1")
            .bind(id)
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
                   AVG(v.preco) AS media,
                   SUM(v.quantidade)::bigint AS quantidade,
                   SUM(v.total) AS total
            FROM vendas v
            JOIN produtos p ON p.cod_produto = v.cod_produto
            WHERE v.cod_produto = $1
            GROUP BY p.nome
            "#,
        )
        .bind(cod_produto)
        .fetch_optional(&self.pool)
        .await?;
        Ok(agregado)
    }
}
