use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AutoHealService;
use crate::models::auto_heal::{
    requests::{CreateLogRequest, NewSystemLog},
    responses::CreateLogResponse,
};
use crate::models::{ApiResponse, ErrorCode, IdQuery, SuccessResponse};
use crate::services::{bad_request, error_response, required};

const RECENT_LOGS: u64 = 100;

pub async fn create_log(
    service: &AutoHealService,
    log_data: CreateLogRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(mensagem) = required(&log_data.mensagem) else {
        return Ok(bad_request("Mensagem é obrigatória"));
    };

    let detalhes = match log_data.detalhes {
        Some(serde_json::Value::Null) | None => None,
        Some(value) => Some(value.to_string()),
    };

    let log = NewSystemLog {
        nivel: required(&log_data.nivel).unwrap_or_else(|| "INFO".to_string()),
        tipo: required(&log_data.tipo).unwrap_or_else(|| "SYSTEM".to_string()),
        mensagem,
        detalhes,
        arquivo: log_data.arquivo,
        linha: log_data.linha,
        stack_trace: log_data.stack_trace,
    };

    let storage = service.get_storage(request);

    match storage.create_log(log).await {
        Ok(log) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CreateLogResponse {
                success: true,
                log_id: log.id,
            },
            "Log registado",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao criar log")),
    }
}

pub async fn list_logs(
    service: &AutoHealService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_logs_with_correcoes(RECENT_LOGS).await {
        Ok(logs) => Ok(HttpResponse::Ok().json(ApiResponse::success(logs, "Logs listados"))),
        Err(e) => Ok(error_response(&e, "Erro ao listar logs")),
    }
}

pub async fn delete_logs(
    service: &AutoHealService,
    query: IdQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match query.non_empty() {
        Some(id) => match storage.delete_log(id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::LogNotFound,
                    "Log não encontrado",
                )));
            }
            Err(e) => Err(e),
        },
        None => storage.delete_all_logs().await.map(|_| ()),
    };

    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SuccessResponse::ok(),
            "Logs eliminados",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao eliminar logs")),
    }
}
