// src/handlers/compras.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::{
    common::{error::AppError, pagination::Paginacao},
    config::AppState,
    models::{
        compras::{CompraPayload, CompraResumo, ItemCompra},
        relatorio::Relatorio,
    },
};

// As validações de item seguem a mesma ordem no insert e no update:
// produto conhecido, quantidade positiva, preço positivo.
async fn validar_item(app_state: &AppState, item: &ItemCompra) -> Result<(), AppError> {
    if !app_state.produtos.codigo_existe(&item.cod_produto).await? {
        return Err(AppError::ProdutoDesconhecido(item.cod_produto.clone()));
    }
    if item.quantidade <= 0 {
        return Err(AppError::QuantidadeInvalida(item.cod_produto.clone()));
    }
    if item.preco <= Decimal::ZERO {
        return Err(AppError::PrecoInvalido(item.cod_produto.clone()));
    }
    Ok(())
}

// GET /compras/get
#[utoipa::path(
    get,
    path = "/compras/get",
    tag = "Compras",
    params(Paginacao),
    responses(
        (status = 200, description = "Compras por ordem de entrada", body = [CompraResumo])
    )
)]
pub async fn get_compras(
    State(app_state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> Result<impl IntoResponse, AppError> {
    let compras = app_state
        .compras
        .listar(paginacao.limite(), paginacao.deslocamento())
        .await?;

    Ok((StatusCode::OK, Json(compras)))
}

// POST /compras/post
// Os itens são gravados um a um, na ordem recebida; ao final os lotes são
// renumerados pelo procedimento do banco.
#[utoipa::path(
    post,
    path = "/compras/post",
    tag = "Compras",
    request_body = CompraPayload,
    responses(
        (status = 201, description = "Compra registrada"),
        (status = 400, description = "Nota fiscal duplicada ou item inválido"),
        (status = 404, description = "Fornecedor ou produto não encontrado")
    )
)]
pub async fn post_compras(
    State(app_state): State<AppState>,
    Json(payload): Json<CompraPayload>,
) -> Result<impl IntoResponse, AppError> {
    if app_state.compras.nota_existe(payload.nf_entrada, None).await? {
        return Err(AppError::NotaFiscalDuplicada(payload.nf_entrada));
    }

    if !app_state.cadastros.existe_id(payload.fornecedor).await? {
        return Err(AppError::FornecedorNaoEncontrado(payload.fornecedor));
    }

    for item in &payload.produtos {
        validar_item(&app_state, item).await?;

        app_state
            .compras
            .inserir_item(
                &item.cod_produto,
                item.quantidade,
                item.preco,
                payload.fornecedor,
                payload.nf_entrada,
            )
            .await?;
    }

    app_state.compras.reorganizar_lotes().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Compra registrada com sucesso!" })),
    ))
}

// PUT /compras/put/{id}
// A conferência de nota fiscal ignora as linhas da própria compra, para
// que reenviar a mesma NF não seja tratado como duplicidade.
#[utoipa::path(
    put,
    path = "/compras/put/{id}",
    tag = "Compras",
    params(("id" = i32, Path, description = "Id da compra")),
    request_body = CompraPayload,
    responses(
        (status = 201, description = "Compra atualizada"),
        (status = 400, description = "Nota fiscal duplicada ou item inválido"),
        (status = 404, description = "Fornecedor ou produto não encontrado")
    )
)]
pub async fn put_compras(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CompraPayload>,
) -> Result<impl IntoResponse, AppError> {
    if app_state
        .compras
        .nota_existe(payload.nf_entrada, Some(id))
        .await?
    {
        return Err(AppError::NotaFiscalDuplicada(payload.nf_entrada));
    }

    if !app_state.cadastros.existe_id(payload.fornecedor).await? {
        return Err(AppError::FornecedorNaoEncontrado(payload.fornecedor));
    }

    for item in &payload.produtos {
        validar_item(&app_state, item).await?;

        app_state
            .compras
            .atualizar_item(
                id,
                &item.cod_produto,
                item.quantidade,
                item.preco,
                payload.fornecedor,
                payload.nf_entrada,
            )
            .await?;
    }

    app_state.compras.reorganizar_lotes().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Compra atualizada com sucesso!" })),
    ))
}

// DELETE /compras/delete/{id}
#[utoipa::path(
    delete,
    path = "/compras/delete/{id}",
    tag = "Compras",
    params(("id" = i32, Path, description = "Id da compra")),
    responses(
        (status = 201, description = "Compra removida"),
        (status = 404, description = "Compra não encontrada")
    )
)]
pub async fn delete_compras(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.compras.existe_id(id).await? {
        return Err(AppError::CompraNaoEncontrada);
    }

    app_state.compras.remover(id).await?;
    app_state.compras.reorganizar_lotes().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Compra deletada com sucesso!" })),
    ))
}

// GET /compras/relatorio/{codProduto}
#[utoipa::path(
    get,
    path = "/compras/relatorio/{codProduto}",
    tag = "Compras",
    params(("codProduto" = String, Path, description = "Código do produto")),
    responses(
        (status = 200, description = "Média de preço, quantidade e total comprados", body = Relatorio),
        (status = 404, description = "Produto sem cadastro ou sem compras")
    )
)]
pub async fn get_compras_relatorio(
    State(app_state): State<AppState>,
    Path(cod_produto): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.produtos.codigo_existe(&cod_produto).await? {
        return Err(AppError::ProdutoNaoEncontrado);
    }

    let agregado = app_state
        .compras
        .agregar_por_produto(&cod_produto)
        .await?
        .ok_or(AppError::SemComprasDoProduto)?;

    Ok((
        StatusCode::OK,
        Json(Relatorio::montar(cod_produto, agregado)),
    ))
}
