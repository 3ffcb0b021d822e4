// src/handlers/cadastros.rs

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
    models::cadastros::{CadastroPayload, ClienteFornecedor, TipoCadastro},
};

// GET /clientes/get
#[utoipa::path(
    get,
    path = "/clientes/get",
    tag = "Cadastros",
    params(Paginacao),
    responses(
        (status = 200, description = "Lista paginada de clientes", body = [ClienteFornecedor])
    )
)]
pub async fn get_clientes(
    State(app_state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state
        .cadastros
        .listar_por_tipo(
            TipoCadastro::Cliente,
            paginacao.limite(),
            paginacao.deslocamento(),
        )
        .await?;

    Ok((StatusCode::OK, Json(clientes)))
}

// GET /clientes/get/{cpfCNPJ}
// O documento precisa existir E pertencer a um cliente: um fornecedor
// consultado por aqui responde 404.
#[utoipa::path(
    get,
    path = "/clientes/get/{cpfCNPJ}",
    tag = "Cadastros",
    params(("cpfCNPJ" = String, Path, description = "CPF ou CNPJ do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = [ClienteFornecedor]),
        (status = 404, description = "Registro ausente ou não é cliente")
    )
)]
pub async fn get_cliente_por_documento(
    State(app_state): State<AppState>,
    Path(cpf_cnpj): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let registro = app_state
        .cadastros
        .buscar_por_documento(&cpf_cnpj)
        .await?
        .ok_or(AppError::RegistroNaoEncontrado)?;

    if registro.tipo_cadastro != TipoCadastro::Cliente {
        return Err(AppError::NaoEhCliente);
    }

    let clientes = app_state
        .cadastros
        .listar_por_documento_e_tipo(&cpf_cnpj, TipoCadastro::Cliente)
        .await?;

    Ok((StatusCode::OK, Json(clientes)))
}

// GET /fornecedores/get
#[utoipa::path(
    get,
    path = "/fornecedores/get",
    tag = "Cadastros",
    params(Paginacao),
    responses(
        (status = 200, description = "Lista paginada de fornecedores", body = [ClienteFornecedor])
    )
)]
pub async fn get_fornecedores(
    State(app_state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> Result<impl IntoResponse, AppError> {
    let fornecedores = app_state
        .cadastros
        .listar_por_tipo(
            TipoCadastro::Fornecedor,
            paginacao.limite(),
            paginacao.deslocamento(),
        )
        .await?;

    Ok((StatusCode::OK, Json(fornecedores)))
}

// GET /fornecedores/get/{cpfCNPJ}
#[utoipa::path(
    get,
    path = "/fornecedores/get/{cpfCNPJ}",
    tag = "Cadastros",
    params(("cpfCNPJ" = String, Path, description = "CPF ou CNPJ do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor encontrado", body = [ClienteFornecedor]),
        (status = 404, description = "Registro ausente ou não é fornecedor")
    )
)]
pub async fn get_fornecedor_por_documento(
    State(app_state): State<AppState>,
    Path(cpf_cnpj): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let registro = app_state
        .cadastros
        .buscar_por_documento(&cpf_cnpj)
        .await?
        .ok_or(AppError::RegistroNaoEncontrado)?;

    if registro.tipo_cadastro != TipoCadastro::Fornecedor {
        return Err(AppError::NaoEhFornecedor);
    }

    let fornecedores = app_state
        .cadastros
        .listar_por_documento_e_tipo(&cpf_cnpj, TipoCadastro::Fornecedor)
        .await?;

    Ok((StatusCode::OK, Json(fornecedores)))
}

// POST /clientesFornecedores/post
#[utoipa::path(
    post,
    path = "/clientesFornecedores/post",
    tag = "Cadastros",
    request_body = CadastroPayload,
    responses(
        (status = 201, description = "Cadastro criado"),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn post_cadastro(
    State(app_state): State<AppState>,
    Json(payload): Json<CadastroPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state.cadastros.inserir(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} criado com sucesso!", payload.tipo_cadastro)
        })),
    ))
}

// PUT /clientesFornecedores/put/{id}
#[utoipa::path(
    put,
    path = "/clientesFornecedores/put/{id}",
    tag = "Cadastros",
    params(("id" = i32, Path, description = "Id do cadastro")),
    request_body = CadastroPayload,
    responses(
        (status = 201, description = "Cadastro atualizado"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn put_cadastro(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CadastroPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.cadastros.existe_id(id).await? {
        return Err(AppError::RegistroNaoEncontrado);
    }

    payload.validate()?;

    app_state.cadastros.atualizar(id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} atualizado com sucesso!", payload.tipo_cadastro)
        })),
    ))
}

// DELETE /clientesFornecedores/delete/{id}
// A mensagem de resposta menciona o papel do registro apagado, então o
// papel é lido antes da exclusão.
#[utoipa::path(
    delete,
    path = "/clientesFornecedores/delete/{id}",
    tag = "Cadastros",
    params(("id" = i32, Path, description = "Id do cadastro")),
    responses(
        (status = 201, description = "Cadastro removido"),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn delete_cadastro(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tipo = app_state
        .cadastros
        .tipo_por_id(id)
        .await?
        .ok_or(AppError::RegistroNaoEncontrado)?;

    app_state.cadastros.remover(id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} deletado com sucesso!", tipo)
        })),
    ))
}
