use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DocumentService;
use crate::models::{
    ApiResponse, ErrorCode, IdQuery, SuccessResponse,
    documents::{
        requests::{NewIdentity, SaveIdentityRequest},
        responses::SaveIdentityResponse,
    },
};
use crate::services::{bad_request, error_response, required};

pub async fn save_identity(
    service: &DocumentService,
    identity_data: SaveIdentityRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(numero), Some(nome)) = (
        required(&identity_data.numero),
        required(&identity_data.nome),
    ) else {
        return Ok(bad_request("Número e nome são obrigatórios"));
    };

    let storage = service.get_storage(request);

    match storage
        .save_identity(NewIdentity {
            numero,
            nome,
            request: identity_data,
        })
        .await
    {
        Ok(documento) => {
            info!(
                "Identity document {} saved with {} photo(s)",
                documento.id,
                documento.fotos.len()
            );
            let message = "Documento salvo com sucesso!";
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SaveIdentityResponse {
                    success: true,
                    documento_id: documento.id,
                    message: message.to_string(),
                },
                message,
            )))
        }
        Err(e) => Ok(error_response(&e, "Erro ao salvar documento")),
    }
}

pub async fn list_identities(
    service: &DocumentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_identities().await {
        Ok(documentos) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(documentos, "Documentos listados")))
        }
        Err(e) => Ok(error_response(&e, "Erro ao listar documentos")),
    }
}

pub async fn delete_identity(
    service: &DocumentService,
    query: IdQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID do documento não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.delete_identity(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SuccessResponse::ok(),
            "Documento excluído com sucesso",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DocumentNotFound,
            "Documento não encontrado",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao excluir documento")),
    }
}
