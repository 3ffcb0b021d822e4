// src/handlers/produtos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{error::AppError, pagination::Paginacao},
    config::AppState,
    models::produtos::{Produto, ProdutoPayload},
};

// GET /produtos/get
#[utoipa::path(
    get,
    path = "/produtos/get",
    tag = "Produtos",
    params(Paginacao),
    responses(
        (status = 200, description = "Lista paginada de produtos", body = [Produto])
    )
)]
pub async fn get_produtos(
    State(app_state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state
        .produtos
        .listar(paginacao.limite(), paginacao.deslocamento())
        .await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /produtos/get/{codProduto}
#[utoipa::path(
    get,
    path = "/produtos/get/{codProduto}",
    tag = "Produtos",
    params(("codProduto" = String, Path, description = "Código do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = [Produto]),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_produto_por_codigo(
    State(app_state): State<AppState>,
    Path(cod_produto): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state.produtos.listar_por_codigo(&cod_produto).await?;

    if produtos.is_empty() {
        return Err(AppError::ProdutoNaoEncontrado);
    }

    Ok((StatusCode::OK, Json(produtos)))
}

// POST /produtos/post
#[utoipa::path(
    post,
    path = "/produtos/post",
    tag = "Produtos",
    request_body = ProdutoPayload,
    responses(
        (status = 201, description = "Produto criado"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn post_produto(
    State(app_state): State<AppState>,
    Json(payload): Json<ProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.produtos.inserir(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Produto criado com sucesso!" })),
    ))
}

// PUT /produtos/put/{id}
#[utoipa::path(
    put,
    path = "/produtos/put/{id}",
    tag = "Produtos",
    params(("id" = i32, Path, description = "Id do produto")),
    request_body = ProdutoPayload,
    responses(
        (status = 201, description = "Produto atualizado"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn put_produto(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.produtos.existe_id(id).await? {
        return Err(AppError::ProdutoNaoEncontrado);
    }

    payload.validate()?;

    app_state.produtos.atualizar(id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Produto atualizado com sucesso!" })),
    ))
}

// DELETE /produtos/delete/{codProduto}
#[utoipa::path(
    delete,
    path = "/produtos/delete/{codProduto}",
    tag = "Produtos",
    params(("codProduto" = String, Path, description = "Código do produto")),
    responses(
        (status = 201, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_produto(
    State(app_state): State<AppState>,
    Path(cod_produto): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.produtos.codigo_existe(&cod_produto).await? {
        return Err(AppError::ProdutoNaoEncontrado);
    }

    app_state.produtos.remover_por_codigo(&cod_produto).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Produto deletado com sucesso!" })),
    ))
}
