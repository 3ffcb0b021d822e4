// src/handlers/estoque.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, pagination::Paginacao},
    config::AppState,
    models::estoque::{EstoqueItem, EstoqueProdutoItem},
};

// GET /estoque/get
// Uma linha por lote de compra do produto, ordenadas por lote.
#[utoipa::path(
    get,
    path = "/estoque/get",
    tag = "Estoque",
    params(Paginacao),
    responses(
        (status = 200, description = "Saldo de estoque por lote", body = [EstoqueItem])
    )
)]
pub async fn get_estoque(
    State(app_state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> Result<impl IntoResponse, AppError> {
    let itens = app_state
        .estoque
        .listar(paginacao.limite(), paginacao.deslocamento())
        .await?;

    Ok((StatusCode::OK, Json(itens)))
}

// GET /estoque/get/{codProduto}
#[utoipa::path(
    get,
    path = "/estoque/get/{codProduto}",
    tag = "Estoque",
    params(
        ("codProduto" = String, Path, description = "Código do produto"),
        Paginacao
    ),
    responses(
        (status = 200, description = "Estoque do produto com data e horário de entrada", body = [EstoqueProdutoItem]),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_estoque_por_produto(
    State(app_state): State<AppState>,
    Path(cod_produto): Path<String>,
    Query(paginacao): Query<Paginacao>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.produtos.codigo_existe(&cod_produto).await? {
        return Err(AppError::ProdutoNaoEncontrado);
    }

    let itens = app_state
        .estoque
        .listar_por_produto(&cod_produto, paginacao.limite(), paginacao.deslocamento())
        .await?;

    Ok((StatusCode::OK, Json(itens)))
}
