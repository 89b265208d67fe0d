use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::BTreeMap;

use super::AutoHealService;
use crate::models::auto_heal::{
    entities::{MetricStatus, SystemMetric},
    requests::{CreateMetricRequest, NewSystemMetric},
    responses::CreateMetricResponse,
};
use crate::models::ApiResponse;
use crate::services::{bad_request, error_response, required};

const RECENT_METRICS: u64 = 50;

/// 指标分级结果
#[derive(Debug, Clone, PartialEq)]
pub struct MetricClassification {
    pub status: MetricStatus,
    pub alerta: bool,
    pub descricao_alerta: Option<&'static str>,
}

/// 按类型阈值给指标分级
pub fn classify_metric(tipo: &str, valor: f64) -> MetricClassification {
    let alert = |status, descricao| MetricClassification {
        status,
        alerta: true,
        descricao_alerta: Some(descricao),
    };

    match tipo {
        "CPU" if valor > 80.0 => alert(MetricStatus::Critical, "Uso de CPU acima de 80%"),
        "MEMORY" if valor > 85.0 => alert(MetricStatus::Warning, "Uso de memória acima de 85%"),
        "API_RESPONSE" if valor > 1000.0 => {
            alert(MetricStatus::Warning, "Tempo de resposta da API acima de 1s")
        }
        "DATABASE_QUERY" if valor > 500.0 => {
            alert(MetricStatus::Warning, "Query de banco lenta (> 500ms)")
        }
        _ => MetricClassification {
            status: MetricStatus::Normal,
            alerta: false,
            descricao_alerta: None,
        },
    }
}

/// 每种类型只保留最新的一条
pub fn latest_per_tipo(metrics: Vec<SystemMetric>) -> BTreeMap<String, SystemMetric> {
    let mut latest: BTreeMap<String, SystemMetric> = BTreeMap::new();
    for metric in metrics {
        match latest.get(&metric.tipo) {
            Some(current) if current.created_at >= metric.created_at => {}
            _ => {
                latest.insert(metric.tipo.clone(), metric);
            }
        }
    }
    latest
}

pub async fn create_metric(
    service: &AutoHealService,
    metric_data: CreateMetricRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(tipo), Some(valor)) = (required(&metric_data.tipo), metric_data.valor) else {
        return Ok(bad_request("Tipo e valor são obrigatórios"));
    };

    let classification = classify_metric(&tipo, valor);
    let metric = NewSystemMetric {
        tipo,
        valor,
        unidade: required(&metric_data.unidade).unwrap_or_else(|| "%".to_string()),
        status: classification.status.to_string(),
        alerta: classification.alerta,
        descricao_alerta: classification.descricao_alerta.map(str::to_string),
    };

    let storage = service.get_storage(request);

    match storage.create_metric(metric).await {
        Ok(metrica) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CreateMetricResponse {
                success: true,
                metrica,
            },
            "Métrica registada",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao criar métrica")),
    }
}

pub async fn latest_metrics(
    service: &AutoHealService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_recent_metrics(RECENT_METRICS).await {
        Ok(metrics) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            latest_per_tipo(metrics),
            "Métricas listadas",
        ))),
        Err(e) => Ok(error_response(&e, "Erro ao listar métricas")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_classify_thresholds() {
        let cpu = classify_metric("CPU", 91.0);
        assert_eq!(cpu.status, MetricStatus::Critical);
        assert!(cpu.alerta);
        assert_eq!(cpu.descricao_alerta, Some("Uso de CPU acima de 80%"));

        assert_eq!(classify_metric("CPU", 80.0).status, MetricStatus::Normal);
        assert_eq!(classify_metric("MEMORY", 86.0).status, MetricStatus::Warning);
        assert_eq!(classify_metric("API_RESPONSE", 1500.0).status, MetricStatus::Warning);
        assert_eq!(classify_metric("DATABASE_QUERY", 501.0).status, MetricStatus::Warning);

        let disk = classify_metric("DISK", 99.0);
        assert_eq!(disk.status, MetricStatus::Normal);
        assert!(!disk.alerta);
        assert_eq!(disk.descricao_alerta, None);
    }

    fn metric(tipo: &str, valor: f64, age_secs: i64) -> SystemMetric {
        SystemMetric {
            id: format!("{tipo}-{age_secs}"),
            tipo: tipo.to_string(),
            valor,
            unidade: Some("%".to_string()),
            status: MetricStatus::Normal,
            alerta: false,
            descricao_alerta: None,
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    #[test]
    fn test_latest_per_tipo_keeps_newest() {
        let latest = latest_per_tipo(vec![
            metric("CPU", 10.0, 5),
            metric("CPU", 20.0, 1),
            metric("MEMORY", 30.0, 3),
        ]);

        assert_eq!(latest.len(), 2);
        assert_eq!(latest["CPU"].valor, 20.0);
        assert_eq!(latest["MEMORY"].valor, 30.0);
    }
}
