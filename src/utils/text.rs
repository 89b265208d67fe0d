//! 文本处理工具

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\n?|\n?```").expect("valid code fence regex"));

/// 去掉模型回复中的 Markdown 代码块标记
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// 按 `dados` 的每个键替换 `{{chave}}` 占位符
///
/// 键按原文匹配（可含空格或连字符）；没有对应键的占位符保持原样。
/// null、false、0 与空串视为空值；字符串原样插入，其余值按 JSON 文本插入。
pub fn render_placeholders(template: &str, dados: &HashMap<String, Value>) -> String {
    dados
        .iter()
        .fold(template.to_string(), |conteudo, (chave, valor)| {
            conteudo.replace(&format!("{{{{{chave}}}}}"), &placeholder_value(valor))
        })
}

fn placeholder_value(valor: &Value) -> String {
    match valor {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_render_placeholders() {
        let dados: HashMap<String, Value> = [
            ("nome".to_string(), json!("Ana")),
            ("idade".to_string(), json!(30)),
            ("nulo".to_string(), Value::Null),
            ("falso".to_string(), json!(false)),
            ("zero".to_string(), json!(0)),
            ("vazio".to_string(), json!("")),
        ]
        .into_iter()
        .collect();

        let out = render_placeholders(
            "Nome: {{nome}} ({{idade}}) [{{nulo}}][{{falso}}][{{zero}}][{{vazio}}]",
            &dados,
        );
        assert_eq!(out, "Nome: Ana (30) [][][][]");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let dados: HashMap<String, Value> =
            [("nome".to_string(), json!("Ana"))].into_iter().collect();
        assert_eq!(
            render_placeholders("{{nome}} {{ausente}}", &dados),
            "Ana {{ausente}}"
        );
    }

    #[test]
    fn test_keys_with_spaces_and_hyphens() {
        let dados: HashMap<String, Value> = [
            ("nome completo".to_string(), json!("Ana Silva")),
            ("data-inicio".to_string(), json!("2025-01-01")),
            ("zero".to_string(), json!(0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            render_placeholders(
                "[{{ausente}}] [{{nome completo}}] [{{data-inicio}}] [{{zero}}]",
                &dados
            ),
            "[{{ausente}}] [Ana Silva] [2025-01-01] []"
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        let dados: HashMap<String, Value> = [("x".to_string(), json!("1"))].into_iter().collect();
        assert_eq!(render_placeholders("{{x}}-{{x}}", &dados), "1-1");
    }
}
