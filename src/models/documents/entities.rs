use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 证件照片类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub enum TipoFoto {
    Frente,
    Verso,
    Fotografia,
    Outra,
}

impl TipoFoto {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoFoto::Frente => "FRENTE",
            TipoFoto::Verso => "VERSO",
            TipoFoto::Fotografia => "FOTOGRAFIA",
            TipoFoto::Outra => "OUTRA",
        }
    }
}

impl std::fmt::Display for TipoFoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TipoFoto {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FRENTE" => Ok(TipoFoto::Frente),
            "VERSO" => Ok(TipoFoto::Verso),
            "FOTOGRAFIA" => Ok(TipoFoto::Fotografia),
            "OUTRA" => Ok(TipoFoto::Outra),
            _ => Err(format!("Tipo de foto inválido: {s}")),
        }
    }
}

// 证件照片
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct DocumentoFoto {
    pub id: String,
    pub tipo: TipoFoto,
    pub url: String,
    pub ordem: i32,
}

// 身份证件
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct DocumentoIdentificacao {
    pub id: String,
    pub numero: String,
    pub nome: String,
    pub apelido: Option<String>,
    pub data_nascimento: Option<String>,
    pub naturalidade: Option<String>,
    pub nacionalidade: Option<String>,
    pub sexo: Option<String>,
    pub altura: Option<String>,
    pub filiado: Option<String>,
    pub validade: Option<String>,
    pub emissao: Option<String>,
    pub morada: Option<String>,
    pub tipo_documento_id: String,
    pub ativo: bool,
    pub fotos: Vec<DocumentoFoto>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 驾驶证
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/documento.ts")]
pub struct CartaConducao {
    pub id: String,
    pub numero: String,
    pub nome: String,
    pub apelido: Option<String>,
    pub data_nascimento: Option<String>,
    pub naturalidade: Option<String>,
    pub categoria: Option<String>,
    pub validade: Option<String>,
    pub emissao: Option<String>,
    pub numero_registo: Option<String>,
    pub morada: Option<String>,
    pub raw_extraido: Option<String>,
    pub ativo: bool,
    pub fotos: Vec<DocumentoFoto>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
