use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::{debug, info};

use super::AutoHealService;
use crate::errors::{GestaoError, Result};
use crate::models::auto_heal::{
    entities::SystemLog,
    requests::{AnalyzeRequest, NewCorrecao},
    responses::{AnaliseCorrecao, AnaliseProblema, AnalyzeResponse},
};
use crate::models::assistant::entities::ChatMessage;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, error_response, required};
use crate::utils::strip_code_fences;

const ANALYZE_FAILED: &str = "Erro ao analisar problema";
const STACK_TRACE_LIMIT: usize = 1000;

pub const ANALYSIS_PROMPT: &str = r#"Tu és um especialista em diagnóstico de sistemas e programação. A tua função é analisar erros de sistemas e fornecer soluções inteligentes.

REGRAS DE ANÁLISE:
1. Analisa o erro de forma sistemática: tipo, causa provável, impacto
2. Classifica a severidade: LOW, MEDIUM, HIGH, CRITICAL
3. Identifica o tipo de problema: SYNTAX_ERROR, MISSING_FILE, PERFORMANCE, DATABASE, CONFIGURATION, SECURITY, DEPENDENCY, NETWORK
4. Fornece soluções específicas e acionáveis
5. Se possível, sugere código de correção
6. Considera o contexto da aplicação Next.js
7. Fornece explicações claras em português

FORMATO DE RESPOSTA JSON:
{
  "tipoProblema": "tipo do problema (ex: SYNTAX_ERROR)",
  "descricao": "descrição detalhada do problema",
  "causaProvavel": "causa mais provável",
  "solucao": "solução passo a passo",
  "codigoCorrecao": "código de correção se aplicável (opcional)",
  "severidade": "LOW/MEDIUM/HIGH/CRITICAL",
  "melhoriasAdicionais": ["lista de melhorias recomendadas"]
}

Exemplos de tipos de problemas:
- SYNTAX_ERROR: Erros de sintaxe em código TypeScript/JavaScript
- MISSING_FILE: Arquivos ou componentes em falta
- PERFORMANCE: Lentidão, tempos de resposta altos
- DATABASE: Erros de banco de dados, prisma
- CONFIGURATION: Problemas de configuração
- SECURITY: Vulnerabilidades ou problemas de segurança
- DEPENDENCY: Problemas com dependências
- NETWORK: Erros de API, requisições HTTP"#;

/// 构建发送给模型的诊断上下文
pub fn build_context(log: &SystemLog) -> String {
    let mut lines = vec![
        format!("Tipo de erro: {}", log.tipo),
        format!("Nível: {}", log.nivel),
        format!("Mensagem: {}", log.mensagem),
    ];
    if let Some(arquivo) = log.arquivo.as_deref().filter(|a| !a.is_empty()) {
        lines.push(format!("Arquivo: {arquivo}"));
    }
    if let Some(linha) = log.linha {
        lines.push(format!("Linha: {linha}"));
    }
    if let Some(detalhes) = log.detalhes.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Detalhes: {detalhes}"));
    }
    if let Some(stack) = log.stack_trace.as_deref().filter(|s| !s.is_empty()) {
        let head: String = stack.chars().take(STACK_TRACE_LIMIT).collect();
        lines.push(format!("Stack trace: {head}"));
    }

    format!(
        "{}\n\nAnalisa este erro e fornece:\n\
         1. Tipo exato do problema\n\
         2. Causa provável\n\
         3. Solução detalhada passo a passo\n\
         4. Código de correção se aplicável\n\
         5. Severidade baseada no impacto\n\
         6. Melhorias adicionais recomendadas",
        lines.join("\n")
    )
}

/// 解析模型返回的分析 JSON
pub fn parse_analysis(content: &str) -> Result<AnaliseProblema> {
    let cleaned = strip_code_fences(content);
    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        debug!("Unparseable analysis reply: {}", content);
        GestaoError::ai_response(format!("Erro ao processar análise do modelo: {e}"))
    })?;
    if !value.is_object() {
        return Err(GestaoError::ai_response("Análise do modelo não é um objeto JSON"));
    }
    serde_json::from_value(value)
        .map_err(|e| GestaoError::ai_response(format!("Erro ao processar análise do modelo: {e}")))
}

fn to_correcao(log_id: String, analise: &AnaliseProblema) -> NewCorrecao {
    NewCorrecao {
        log_id,
        tipo_problema: required(&analise.tipo_problema).unwrap_or_else(|| "UNKNOWN".to_string()),
        descricao: required(&analise.descricao).unwrap_or_else(|| "Sem descrição".to_string()),
        causa_provavel: analise.causa_provavel.clone(),
        solucao: analise.solucao.clone(),
        codigo_correcao: analise.codigo_correcao.clone(),
        severidade: required(&analise.severidade).unwrap_or_else(|| "MEDIUM".to_string()),
    }
}

pub async fn analyze_log(
    service: &AutoHealService,
    analyze_data: AnalyzeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(log_id) = required(&analyze_data.log_id) else {
        return Ok(bad_request("ID do log é obrigatório"));
    };

    let storage = service.get_storage(request);

    let log = match storage.get_log(&log_id).await {
        Ok(Some(log)) => log,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LogNotFound,
                "Log não encontrado",
            )));
        }
        Err(e) => return Ok(error_response(&e, ANALYZE_FAILED)),
    };

    let client = service.get_completion_client(request);
    let messages = [
        ChatMessage::system(ANALYSIS_PROMPT),
        ChatMessage::user(build_context(&log)),
    ];

    let analise = match client.complete(&messages).await.and_then(|r| parse_analysis(&r)) {
        Ok(analise) => analise,
        Err(e) => return Ok(error_response(&e, ANALYZE_FAILED)),
    };

    match storage.create_correcao(to_correcao(log_id, &analise)).await {
        Ok(correcao) => {
            info!("Stored correction {} for log {}", correcao.id, correcao.log_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AnalyzeResponse {
                    success: true,
                    correcao: AnaliseCorrecao {
                        id: correcao.id,
                        analise,
                    },
                },
                "Análise concluída",
            )))
        }
        Err(e) => Ok(error_response(&e, ANALYZE_FAILED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> SystemLog {
        SystemLog {
            id: "l1".to_string(),
            nivel: "ERROR".to_string(),
            tipo: "DATABASE".to_string(),
            mensagem: "connection refused".to_string(),
            detalhes: None,
            arquivo: Some("src/db.ts".to_string()),
            linha: Some(42),
            stack_trace: Some("x".repeat(1500)),
            resolved: false,
            auto_resolved: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_context_includes_present_fields_only() {
        let context = build_context(&log());

        assert!(context.starts_with("Tipo de erro: DATABASE\nNível: ERROR\nMensagem: connection refused"));
        assert!(context.contains("Arquivo: src/db.ts"));
        assert!(context.contains("Linha: 42"));
        assert!(!context.contains("Detalhes:"));
        assert!(context.contains(&format!("Stack trace: {}\n", "x".repeat(1000))));
        assert!(!context.contains(&"x".repeat(1001)));
        assert!(context.ends_with("6. Melhorias adicionais recomendadas"));
    }

    #[test]
    fn test_parse_analysis_and_defaults() {
        let analise = parse_analysis(
            "```json\n{\"tipoProblema\": \"DATABASE\", \"melhoriasAdicionais\": [\"pool\"]}\n```",
        )
        .unwrap();
        assert_eq!(analise.tipo_problema.as_deref(), Some("DATABASE"));
        assert_eq!(analise.melhorias_adicionais, vec!["pool".to_string()]);

        let correcao = to_correcao("l1".to_string(), &analise);
        assert_eq!(correcao.tipo_problema, "DATABASE");
        assert_eq!(correcao.descricao, "Sem descrição");
        assert_eq!(correcao.severidade, "MEDIUM");
    }

    #[test]
    fn test_parse_analysis_tolerates_loose_optional_fields() {
        let analise = parse_analysis(
            r#"{"tipoProblema":"DATABASE","descricao":"x","melhoriasAdicionais":null}"#,
        )
        .unwrap();
        assert_eq!(analise.descricao.as_deref(), Some("x"));
        assert!(analise.melhorias_adicionais.is_empty());

        let analise = parse_analysis(
            r#"{"melhoriasAdicionais":"aumentar o pool","codigoCorrecao":{"ficheiro":"db.ts"},"severidade":null}"#,
        )
        .unwrap();
        assert_eq!(analise.melhorias_adicionais, vec!["aumentar o pool".to_string()]);
        assert_eq!(analise.codigo_correcao.as_deref(), Some("{\"ficheiro\":\"db.ts\"}"));
        assert_eq!(to_correcao("l1".to_string(), &analise).severidade, "MEDIUM");
    }

    #[test]
    fn test_parse_analysis_rejects_garbage() {
        assert!(matches!(parse_analysis("não consigo"), Err(GestaoError::AiResponse(_))));
        assert!(matches!(parse_analysis("[]"), Err(GestaoError::AiResponse(_))));
    }
}
