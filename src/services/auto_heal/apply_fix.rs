use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AutoHealService;
use crate::models::auto_heal::{requests::ApplyFixRequest, responses::ApplyFixResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, error_response, required};

pub async fn apply_fix(
    service: &AutoHealService,
    fix_data: ApplyFixRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(correcao_id) = required(&fix_data.correcao_id) else {
        return Ok(bad_request("ID da correção é obrigatório"));
    };

    let storage = service.get_storage(request);

    match storage
        .apply_correcao(&correcao_id, fix_data.confirmada.unwrap_or(false))
        .await
    {
        Ok(Some(correcao)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ApplyFixResponse {
                success: true,
                correcao,
            },
            "Correção aplicada",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CorrecaoNotFound,
            "Correção não encontrada",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao aplicar correção")),
    }
}

pub async fn list_correcoes(
    service: &AutoHealService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_correcoes_with_log().await {
        Ok(correcoes) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(correcoes, "Correções listadas")))
        }
        Err(e) => Ok(error_response(&e, "Erro ao listar correções")),
    }
}
