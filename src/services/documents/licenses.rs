use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DocumentService;
use crate::models::{
    ApiResponse, ErrorCode, IdQuery, SuccessResponse,
    documents::{
        requests::{NewLicense, SaveLicenseRequest},
        responses::SaveLicenseResponse,
    },
};
use crate::services::{bad_request, error_response, required};

pub async fn save_license(
    service: &DocumentService,
    license_data: SaveLicenseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(numero), Some(nome)) = (
        required(&license_data.numero),
        required(&license_data.nome),
    ) else {
        return Ok(bad_request("Número e nome são obrigatórios"));
    };

    let storage = service.get_storage(request);

    match storage
        .save_license(NewLicense {
            numero,
            nome,
            request: license_data,
        })
        .await
    {
        Ok(carta) => {
            info!(
                "Driving license {} saved with {} photo(s)",
                carta.id,
                carta.fotos.len()
            );
            let message = "Carta de condução salva com sucesso!";
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SaveLicenseResponse {
                    success: true,
                    carta_id: carta.id,
                    message: message.to_string(),
                },
                message,
            )))
        }
        Err(e) => Ok(error_response(&e, "Erro ao salvar carta de condução")),
    }
}

pub async fn list_licenses(
    service: &DocumentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_licenses().await {
        Ok(cartas) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(cartas, "Cartas de condução listadas")))
        }
        Err(e) => Ok(error_response(&e, "Erro ao listar cartas de condução")),
    }
}

pub async fn delete_license(
    service: &DocumentService,
    query: IdQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(id) = query.non_empty() else {
        return Ok(bad_request("ID da carta não fornecido"));
    };

    let storage = service.get_storage(request);

    match storage.delete_license(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SuccessResponse::ok(),
            "Carta de condução excluída com sucesso",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DocumentNotFound,
            "Carta de condução não encontrada",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao excluir carta de condução")),
    }
}
