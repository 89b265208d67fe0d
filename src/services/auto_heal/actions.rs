use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{AutoHealService, HealJob};
use crate::models::auto_heal::{
    entities::{HealActionType, HealStatus},
    requests::CreateActionRequest,
    responses::CreateActionResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

const RECENT_ACTIONS: u64 = 20;

pub async fn create_action(
    service: &AutoHealService,
    action_data: CreateActionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(tipo) = action_data
        .tipo
        .as_deref()
        .and_then(|t| t.parse::<HealActionType>().ok())
    else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::HealActionInvalid,
            "Tipo de ação inválido",
        )));
    };

    let storage = service.get_storage(request);

    let action = match storage
        .create_heal_action(tipo, action_data.parametro, action_data.valor_novo)
        .await
    {
        Ok(action) => action,
        Err(e) => return Ok(error_response(&e, "Erro ao criar ação")),
    };

    let queue = service.get_queue(request);
    let job = HealJob {
        acao_id: action.id.clone(),
        tipo,
    };

    if let Err(e) = queue.submit(job) {
        // 未入队的动作不会被执行，直接标记失败
        if let Err(update_err) = storage
            .transition_heal_action(
                &action.id,
                HealStatus::Pending,
                HealStatus::Failed,
                Some(e.message().to_string()),
            )
            .await
        {
            error!("Failed to mark heal action {} as failed: {}", action.id, update_err);
        }
        return Ok(error_response(&e, "Erro ao criar ação"));
    }

    info!("Heal action {} ({}) queued", action.id, tipo);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CreateActionResponse {
            success: true,
            acao_id: action.id,
            mensagem: "Ação iniciada".to_string(),
        },
        "Ação iniciada",
    )))
}

pub async fn list_actions(
    service: &AutoHealService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_heal_actions(RECENT_ACTIONS).await {
        Ok(actions) => Ok(HttpResponse::Ok().json(ApiResponse::success(actions, "Ações listadas"))),
        Err(e) => Ok(error_response(&e, "Erro ao listar ações")),
    }
}
