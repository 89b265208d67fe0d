//! 宽松的反序列化函数
//!
//! 前端表单与模型回复常把可选字段写成 `null` 或类型不符的值，
//! 这些函数让单个字段的异常不影响整个请求。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` 视为默认值（用于列表字段）
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 任意 JSON 值转为可选字符串：`null` 为 None，非字符串按 JSON 文本保存
pub fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// 字符串列表：接受数组、单个字符串或 `null`
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        other => vec![other.to_string()],
    })
}

/// 区分"字段缺失"与"显式 null"
///
/// 配合 `#[serde(default)]` 使用：缺失为 None，`null` 为 Some(None)。
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        itens: Vec<u32>,
        #[serde(default, deserialize_with = "loose_string")]
        texto: Option<String>,
        #[serde(default, deserialize_with = "string_list")]
        lista: Vec<String>,
        #[serde(default, deserialize_with = "double_option")]
        campo: Option<Option<String>>,
    }

    fn sample(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let s = sample(json!({}));
        assert!(s.itens.is_empty());
        assert_eq!(s.texto, None);
        assert!(s.lista.is_empty());
        assert_eq!(s.campo, None);
    }

    #[test]
    fn test_null_values_are_tolerated() {
        let s = sample(json!({"itens": null, "texto": null, "lista": null, "campo": null}));
        assert!(s.itens.is_empty());
        assert_eq!(s.texto, None);
        assert!(s.lista.is_empty());
        assert_eq!(s.campo, Some(None));
    }

    #[test]
    fn test_mismatched_types_are_coerced() {
        let s = sample(json!({"texto": {"linha": 3}, "lista": "reiniciar pool", "campo": "x"}));
        assert_eq!(s.texto.as_deref(), Some("{\"linha\":3}"));
        assert_eq!(s.lista, vec!["reiniciar pool".to_string()]);
        assert_eq!(s.campo, Some(Some("x".to_string())));

        let s = sample(json!({"lista": ["a", 2, null]}));
        assert_eq!(s.lista, vec!["a".to_string(), "2".to_string()]);
    }
}
