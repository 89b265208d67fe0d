//! HTTP 层集成测试：内存 SQLite + Moka 缓存 + 固定回复的补全客户端

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use base64::Engine;
use sea_orm::Database;
use serde_json::{Value, json};

use gestao_documental::ai::{CompletionClient, ImageInput};
use gestao_documental::cache::ObjectCache;
use gestao_documental::cache::object_cache::moka::MokaCacheWrapper;
use gestao_documental::config::HealConfig;
use gestao_documental::errors::Result;
use gestao_documental::models::assistant::entities::ChatMessage;
use gestao_documental::models::auto_heal::entities::HealStatus;
use gestao_documental::routes;
use gestao_documental::services::ConversationStore;
use gestao_documental::services::auto_heal::{HealExecutor, HealQueue};
use gestao_documental::storage::Storage;
use gestao_documental::storage::sea_orm_storage::SeaOrmStorage;

/// 总是返回同一段文本
struct CannedClient {
    reply: String,
}

#[async_trait]
impl CompletionClient for CannedClient {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
        Ok(self.reply.clone())
    }

    async fn complete_vision(&self, _prompt: &str, _image: &ImageInput) -> Result<String> {
        Ok(self.reply.clone())
    }
}

struct TestContext {
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    completion: Arc<dyn CompletionClient>,
    conversations: Arc<ConversationStore>,
    heal_queue: Arc<HealQueue>,
}

async fn context(reply: &str) -> TestContext {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::from_connection(db).await.unwrap());
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(1000, 600));
    let completion: Arc<dyn CompletionClient> = Arc::new(CannedClient {
        reply: reply.to_string(),
    });
    let conversations = Arc::new(ConversationStore::new(cache.clone(), 20, 0));
    let executor = HealExecutor::new(storage.clone(), cache.clone(), Duration::from_secs(5));
    let heal_queue = Arc::new(HealQueue::start(
        executor,
        &HealConfig {
            queue_capacity: 8,
            max_concurrent: 2,
            job_timeout_secs: 5,
        },
    ));

    TestContext {
        storage,
        cache,
        completion,
        conversations,
        heal_queue,
    }
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.storage.clone()))
                .app_data(web::Data::new($ctx.cache.clone()))
                .app_data(web::Data::new($ctx.completion.clone()))
                .app_data(web::Data::new($ctx.conversations.clone()))
                .app_data(web::Data::new($ctx.heal_queue.clone()))
                .configure(routes::configure_asset_routes)
                .configure(routes::configure_user_routes)
                .configure(routes::configure_role_routes)
                .configure(routes::configure_document_routes)
                .configure(routes::configure_legal_assistant_routes)
                .configure(routes::configure_auto_heal_routes),
        )
        .await
    };
}

macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn test_asset_crud_and_id_errors() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/assets/create")
            .set_json(json!({"nome": "Carrinha", "valorDiario": 45.0, "disponivel": true}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/assets/update?id={id}"))
            .set_json(json!({"estado": "manutencao"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nome"], "Carrinha");
    assert_eq!(body["data"]["estado"], "manutencao");

    // 显式 null 清空字段，缺失的字段保持不变
    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/assets/update?id={id}"))
            .set_json(json!({"estado": null, "valorDiario": null}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["estado"], Value::Null);
    assert_eq!(body["data"]["valorDiario"], Value::Null);
    assert_eq!(body["data"]["nome"], "Carrinha");

    let (status, _) = call!(app, test::TestRequest::delete().uri("/api/assets/delete"));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri("/api/assets/delete?id=inexistente")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/assets/delete?id={id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["success"], true);

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/assets/list"));
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_role_assignment_flow() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (_, user) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/create")
            .set_json(json!({"email": "ana@example.pt", "name": "Ana"}))
    );
    let user_id = user["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/roles/create")
            .set_json(json!({"descricao": "sem nome"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, role) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/roles/create")
            .set_json(json!({"nome": "Gestor"}))
    );
    let role_id = role["data"]["id"].as_str().unwrap().to_string();

    let assign = json!({"userId": user_id, "roleId": role_id});
    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/assign-role")
            .set_json(&assign)
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/assign-role")
            .set_json(&assign)
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, roles) = call!(app, test::TestRequest::get().uri("/api/roles/list"));
    assert_eq!(roles["data"][0]["userRoles"], 1);

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri(&format!(
            "/api/users/assign-role?userId={user_id}&roleId={role_id}"
        ))
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_generate_document_returns_docx() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (status, template) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/create-template")
            .set_json(json!({
                "nome": "Contrato",
                "conteudo": "Contrato de aluguer:\nO cliente {{nome}} paga {{valor}} euros.",
                "campos": ["nome", "valor"]
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let template_id = template["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/generate")
            .set_json(json!({"dados": {}}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/generate")
            .set_json(json!({"templateId": "inexistente"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/generate")
            .set_json(json!({"templateId": template_id, "dados": {"nome": "Ana & Filhos", "valor": 120}}))
    );
    assert_eq!(status, StatusCode::OK);

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(body["data"]["buffer"].as_str().unwrap())
        .unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    assert!(xml.contains("O cliente Ana &amp; Filhos paga 120 euros."));

    let (_, generated) = call!(app, test::TestRequest::get().uri("/api/documents/generated"));
    let generated = generated["data"].as_array().unwrap();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0]["templateNome"], "Contrato");
    assert_eq!(generated[0]["dados"]["nome"], "Ana & Filhos");
}

#[actix_web::test]
async fn test_upload_rejects_non_images() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let boundary = "----gestao-test";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"notas.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         nada de imagem\r\n\
         --{boundary}--\r\n"
    );

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/upload-identity-photo")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(body)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Por favor, selecione apenas imagens");

    let empty = format!("--{boundary}--\r\n");
    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/upload-license-photo")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(empty)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Arquivo não fornecido");
}

#[actix_web::test]
async fn test_chat_history_is_capped() {
    let ctx = context("Claro, aqui está.").await;
    let app = init_app!(ctx);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/legal-assistant/chat")
            .set_json(json!({"sessionId": "s1"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut last = Value::Null;
    for i in 0..12 {
        let (status, body) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/legal-assistant/chat")
                .set_json(json!({"message": format!("pergunta {i}"), "sessionId": "s1"}))
        );
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    assert_eq!(last["data"]["response"], "Claro, aqui está.");
    assert_eq!(last["data"]["historyLength"], 20);

    let (_, other) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/legal-assistant/chat")
            .set_json(json!({"message": "olá"}))
    );
    assert_eq!(other["data"]["historyLength"], 2);

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri("/api/legal-assistant/chat?sessionId=s1")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.conversations.load("s1").await.len(), 1);
}

#[actix_web::test]
async fn test_analyze_and_apply_fix() {
    let reply = "```json\n{\"tipoProblema\": \"DATABASE\", \"descricao\": \"Ligação recusada\", \"severidade\": \"HIGH\", \"melhoriasAdicionais\": [\"retry\"]}\n```";
    let ctx = context(reply).await;
    let app = init_app!(ctx);

    let (status, log) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/logs")
            .set_json(json!({"nivel": "ERROR", "mensagem": "connection refused", "detalhes": {"porta": 5432}}))
    );
    assert_eq!(status, StatusCode::OK);
    let log_id = log["data"]["logId"].as_str().unwrap().to_string();

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/analyze")
            .set_json(json!({"logId": "inexistente"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, analysis) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/analyze")
            .set_json(json!({"logId": log_id}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analysis["data"]["correcao"]["tipoProblema"], "DATABASE");
    let correcao_id = analysis["data"]["correcao"]["id"].as_str().unwrap().to_string();

    let (status, applied) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/apply-fix")
            .set_json(json!({"correcaoId": correcao_id, "confirmada": true}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(applied["data"]["correcao"]["aplicada"], true);

    let (_, logs) = call!(app, test::TestRequest::get().uri("/api/auto-heal/logs"));
    assert_eq!(logs["data"][0]["resolved"], true);
    assert_eq!(logs["data"][0]["autoResolved"], true);
    assert_eq!(logs["data"][0]["correcoes"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_unparseable_analysis_is_bad_gateway() {
    let ctx = context("não sei analisar isto").await;
    let app = init_app!(ctx);

    let (_, log) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/logs")
            .set_json(json!({"mensagem": "boom"}))
    );
    let log_id = log["data"]["logId"].as_str().unwrap().to_string();

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/analyze")
            .set_json(json!({"logId": log_id}))
    );
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_heal_action_runs_to_success() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/actions")
            .set_json(json!({"tipo": "REBOOT_UNIVERSE"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/auto-heal/actions")
            .set_json(json!({"tipo": "CLEAR_CACHE"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["mensagem"], "Ação iniciada");
    let acao_id = body["data"]["acaoId"].as_str().unwrap().to_string();

    let mut status = HealStatus::Pending;
    for _ in 0..100 {
        status = ctx
            .storage
            .get_heal_action(&acao_id)
            .await
            .unwrap()
            .unwrap()
            .status;
        if status.is_terminal() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(status, HealStatus::Success);

    let (_, actions) = call!(app, test::TestRequest::get().uri("/api/auto-heal/actions"));
    assert_eq!(actions["data"][0]["status"], "SUCCESS");
    assert_eq!(actions["data"][0]["mensagemResultado"], "Cache limpo com sucesso");
}

#[actix_web::test]
async fn test_metrics_latest_per_tipo() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    for (tipo, valor) in [("CPU", 50.0), ("CPU", 95.0), ("MEMORY", 40.0)] {
        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/auto-heal/metrics")
                .set_json(json!({"tipo": tipo, "valor": valor}))
        );
        assert_eq!(status, StatusCode::OK);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let (_, metrics) = call!(app, test::TestRequest::get().uri("/api/auto-heal/metrics"));
    assert_eq!(metrics["data"]["CPU"]["valor"], 95.0);
    assert_eq!(metrics["data"]["CPU"]["status"], "CRITICAL");
    assert_eq!(metrics["data"]["MEMORY"]["unidade"], "%");
}

#[actix_web::test]
async fn test_user_update_delete_and_duplicate_email() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (status, user) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/create")
            .set_json(json!({"email": "rui@example.pt", "name": "Rui", "telefone": "910000000"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let user_id = user["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/create")
            .set_json(json!({"email": "rui@example.pt", "name": "Outro Rui"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, other) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/create")
            .set_json(json!({"email": "eva@example.pt", "name": "Eva"}))
    );
    let other_id = other["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/users/update?id={other_id}"))
            .set_json(json!({"email": "rui@example.pt"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/users/update?id={user_id}"))
            .set_json(json!({"apelido": "Costa", "telefone": null, "ativo": false}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["apelido"], "Costa");
    assert_eq!(updated["data"]["telefone"], Value::Null);
    assert_eq!(updated["data"]["ativo"], false);
    assert_eq!(updated["data"]["email"], "rui@example.pt");

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/users/update?id=inexistente")
            .set_json(json!({"name": "X"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, role) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/roles/create")
            .set_json(json!({"nome": "Operador"}))
    );
    let role_id = role["data"]["id"].as_str().unwrap().to_string();
    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/assign-role")
            .set_json(json!({"userId": user_id, "roleId": role_id}))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (_, users) = call!(app, test::TestRequest::get().uri("/api/users/list"));
    let listed = users["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == user_id.as_str())
        .unwrap()
        .clone();
    assert_eq!(listed["roles"][0]["nome"], "Operador");

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/users/delete?id={user_id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["success"], true);

    // 删除用户时角色关联一并删除
    let (_, roles) = call!(app, test::TestRequest::get().uri("/api/roles/list"));
    assert_eq!(roles["data"][0]["userRoles"], 0);

    let (_, users) = call!(app, test::TestRequest::get().uri("/api/users/list"));
    assert_eq!(users["data"].as_array().unwrap().len(), 1);

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/users/delete?id={user_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_save_license_with_photos() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/save-license")
            .set_json(json!({"numero": "L-1"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/save-license")
            .set_json(json!({
                "numero": "L-1",
                "nome": "Rui",
                "categoria": "B",
                "fotos": [
                    {"tipo": "FRENTE", "url": "/uploads/documentos/a.jpg"},
                    {"tipo": "VERSO", "url": "/uploads/documentos/b.jpg"}
                ]
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["success"], true);
    let carta_id = body["data"]["cartaId"].as_str().unwrap().to_string();

    let (_, cartas) = call!(app, test::TestRequest::get().uri("/api/documents/licenses"));
    let carta = &cartas["data"][0];
    assert_eq!(carta["id"], carta_id.as_str());
    assert_eq!(carta["ativo"], true);
    assert_eq!(carta["categoria"], "B");
    assert_eq!(carta["fotos"][0]["tipo"], "FRENTE");
    assert_eq!(carta["fotos"][0]["ordem"], 1);
    assert_eq!(carta["fotos"][1]["tipo"], "VERSO");
    assert_eq!(carta["fotos"][1]["ordem"], 2);

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/documents/licenses?id={carta_id}"))
    );
    assert_eq!(status, StatusCode::OK);
    let (_, cartas) = call!(app, test::TestRequest::get().uri("/api/documents/licenses"));
    assert_eq!(cartas["data"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_identity_list_and_delete() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/save-identity")
            .set_json(json!({"numero": "12345678", "nome": "Ana", "fotos": null}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let sem_fotos = body["data"]["documentoId"].as_str().unwrap().to_string();

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/documents/save-identity")
            .set_json(json!({
                "numero": "87654321",
                "nome": "Eva",
                "fotos": [{"tipo": "FOTOGRAFIA", "url": "/uploads/documentos/c.png"}]
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let com_foto = body["data"]["documentoId"].as_str().unwrap().to_string();

    let (_, docs) = call!(app, test::TestRequest::get().uri("/api/documents/identities"));
    let docs = docs["data"].as_array().unwrap();
    assert_eq!(docs.len(), 2);
    let eva = docs.iter().find(|d| d["id"] == com_foto.as_str()).unwrap();
    assert_eq!(eva["ativo"], false);
    assert_eq!(eva["tipoDocumentoId"], "default");
    assert_eq!(eva["fotos"][0]["ordem"], 1);
    let ana = docs.iter().find(|d| d["id"] == sem_fotos.as_str()).unwrap();
    assert_eq!(ana["fotos"].as_array().unwrap().len(), 0);

    let (status, _) = call!(app, test::TestRequest::delete().uri("/api/documents/identities"));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri("/api/documents/identities?id=inexistente")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/documents/identities?id={com_foto}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["success"], true);

    let (_, docs) = call!(app, test::TestRequest::get().uri("/api/documents/identities"));
    let docs = docs["data"].as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["id"], sem_fotos.as_str());
}

#[actix_web::test]
async fn test_assistant_save_template() {
    let ctx = context("").await;
    let app = init_app!(ctx);

    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/legal-assistant/save-template")
            .set_json(json!({"conteudo": "Minuta"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/legal-assistant/save-template")
            .set_json(json!({"nome": "Procuração", "conteudo": "   "}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Nome e conteúdo são obrigatórios");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/legal-assistant/save-template")
            .set_json(json!({
                "nome": "Procuração",
                "tipo": "juridico",
                "conteudo": "Eu, {{nome}}, constituo meu procurador...",
                "campos": ["nome"]
            }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["success"], true);
    assert_eq!(body["data"]["template"]["nome"], "Procuração");
    assert_eq!(body["data"]["template"]["campos"][0], "nome");

    let (_, templates) = call!(app, test::TestRequest::get().uri("/api/documents/templates"));
    assert_eq!(templates["data"].as_array().unwrap().len(), 1);
}
