use std::collections::HashMap;

use super::{SeaOrmStorage, new_id, now_millis, write_error};
use crate::entity::cartas_conducao::{
    ActiveModel as CartaActiveModel, Column as CartaColumn, Entity as CartasConducao,
};
use crate::entity::documento_fotos::{
    ActiveModel as FotoActiveModel, Column as FotoColumn, Entity as DocumentoFotos,
    Model as FotoModel,
};
use crate::entity::documentos_identificacao::{
    ActiveModel as DocumentoActiveModel, Column as DocumentoColumn,
    Entity as DocumentosIdentificacao,
};
use crate::errors::{GestaoError, Result};
use crate::models::documents::{
    entities::{CartaConducao, DocumentoFoto, DocumentoIdentificacao},
    requests::{FotoInput, NewIdentity, NewLicense},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 照片所属的证件
enum FotoOwner<'a> {
    Documento(&'a str),
    Carta(&'a str),
}

/// 按提交顺序写入照片，ordem 从 1 开始
async fn insert_fotos<C: ConnectionTrait>(
    conn: &C,
    owner: FotoOwner<'_>,
    fotos: Vec<FotoInput>,
    now: i64,
) -> Result<Vec<DocumentoFoto>> {
    let mut saved = Vec::with_capacity(fotos.len());
    for (index, foto) in fotos.into_iter().enumerate() {
        let (documento_id, carta_id) = match owner {
            FotoOwner::Documento(id) => (Some(id.to_string()), None),
            FotoOwner::Carta(id) => (None, Some(id.to_string())),
        };
        let model = FotoActiveModel {
            id: Set(new_id()),
            documento_id: Set(documento_id),
            carta_id: Set(carta_id),
            tipo: Set(foto.tipo.to_string()),
            url: Set(foto.url),
            ordem: Set(index as i32 + 1),
            created_at: Set(now),
        }
        .insert(conn)
        .await
        .map_err(|e| write_error(e, "保存证件照片失败"))?;
        saved.push(model.into_foto());
    }
    Ok(saved)
}

/// 按父记录分组照片
fn group_fotos(
    fotos: Vec<FotoModel>,
    key: impl Fn(&FotoModel) -> Option<String>,
) -> HashMap<String, Vec<DocumentoFoto>> {
    let mut grouped: HashMap<String, Vec<DocumentoFoto>> = HashMap::new();
    for foto in fotos {
        if let Some(parent) = key(&foto) {
            grouped.entry(parent).or_default().push(foto.into_foto());
        }
    }
    grouped
}

impl SeaOrmStorage {
    /// 保存身份证件及照片（同一事务）
    pub async fn save_identity_impl(&self, doc: NewIdentity) -> Result<DocumentoIdentificacao> {
        let now = now_millis();
        let req = doc.request;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        let documento = DocumentoActiveModel {
            id: Set(new_id()),
            numero: Set(doc.numero),
            nome: Set(doc.nome),
            apelido: Set(req.apelido),
            data_nascimento: Set(req.data_nascimento),
            naturalidade: Set(req.naturalidade),
            nacionalidade: Set(req.nacionalidade),
            sexo: Set(req.sexo),
            altura: Set(req.altura),
            filiado: Set(req.filiado),
            validade: Set(req.validade),
            emissao: Set(req.emissao),
            morada: Set(req.morada),
            tipo_documento_id: Set(req
                .tipo_documento_id
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "default".to_string())),
            ativo: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| write_error(e, "保存身份证件失败"))?;

        let fotos = insert_fotos(&txn, FotoOwner::Documento(&documento.id), req.fotos, now).await?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(documento.into_documento(fotos))
    }

    /// 保存驾驶证及照片（同一事务）
    pub async fn save_license_impl(&self, carta: NewLicense) -> Result<CartaConducao> {
        let now = now_millis();
        let req = carta.request;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        let saved = CartaActiveModel {
            id: Set(new_id()),
            numero: Set(carta.numero),
            nome: Set(carta.nome),
            apelido: Set(req.apelido),
            data_nascimento: Set(req.data_nascimento),
            naturalidade: Set(req.naturalidade),
            categoria: Set(req.categoria),
            validade: Set(req.validade),
            emissao: Set(req.emissao),
            numero_registo: Set(req.numero_registo),
            morada: Set(req.morada),
            raw_extraido: Set(req.raw_extraido),
            ativo: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| write_error(e, "保存驾驶证失败"))?;

        let fotos = insert_fotos(&txn, FotoOwner::Carta(&saved.id), req.fotos, now).await?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(saved.into_carta(fotos))
    }

    /// 列出身份证件（含照片）
    pub async fn list_identities_impl(&self) -> Result<Vec<DocumentoIdentificacao>> {
        let documentos = DocumentosIdentificacao::find()
            .order_by_desc(DocumentoColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询身份证件失败: {e}")))?;

        let fotos = DocumentoFotos::find()
            .filter(FotoColumn::DocumentoId.is_not_null())
            .order_by_asc(FotoColumn::Ordem)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询证件照片失败: {e}")))?;
        let mut fotos = group_fotos(fotos, |f| f.documento_id.clone());

        Ok(documentos
            .into_iter()
            .map(|m| {
                let fotos = fotos.remove(&m.id).unwrap_or_default();
                m.into_documento(fotos)
            })
            .collect())
    }

    /// 删除身份证件及照片
    pub async fn delete_identity_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        DocumentoFotos::delete_many()
            .filter(FotoColumn::DocumentoId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除证件照片失败: {e}")))?;

        let result = DocumentosIdentificacao::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除身份证件失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出驾驶证（含照片）
    pub async fn list_licenses_impl(&self) -> Result<Vec<CartaConducao>> {
        let cartas = CartasConducao::find()
            .order_by_desc(CartaColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询驾驶证失败: {e}")))?;

        let fotos = DocumentoFotos::find()
            .filter(FotoColumn::CartaId.is_not_null())
            .order_by_asc(FotoColumn::Ordem)
            .all(&self.db)
            .await
            .map_err(|e| GestaoError::database_operation(format!("查询证件照片失败: {e}")))?;
        let mut fotos = group_fotos(fotos, |f| f.carta_id.clone());

        Ok(cartas
            .into_iter()
            .map(|m| {
                let fotos = fotos.remove(&m.id).unwrap_or_default();
                m.into_carta(fotos)
            })
            .collect())
    }

    /// 删除驾驶证及照片
    pub async fn delete_license_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GestaoError::database_operation(format!("开启事务失败: {e}")))?;

        DocumentoFotos::delete_many()
            .filter(FotoColumn::CartaId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除证件照片失败: {e}")))?;

        let result = CartasConducao::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| GestaoError::database_operation(format!("删除驾驶证失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GestaoError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::documents::entities::TipoFoto;
    use crate::models::documents::requests::SaveIdentityRequest;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_identity_fotos_are_ordered_and_removed() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let storage = SeaOrmStorage::from_connection(db).await.unwrap();

        let saved = storage
            .save_identity_impl(NewIdentity {
                numero: "12345678".to_string(),
                nome: "Maria".to_string(),
                request: SaveIdentityRequest {
                    fotos: vec![
                        FotoInput {
                            tipo: TipoFoto::Frente,
                            url: "/uploads/documentos/a.jpg".to_string(),
                        },
                        FotoInput {
                            tipo: TipoFoto::Verso,
                            url: "/uploads/documentos/b.jpg".to_string(),
                        },
                    ],
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(saved.tipo_documento_id, "default");
        assert!(!saved.ativo);

        let listed = storage.list_identities_impl().await.unwrap();
        assert_eq!(listed.len(), 1);
        let ordens: Vec<i32> = listed[0].fotos.iter().map(|f| f.ordem).collect();
        assert_eq!(ordens, vec![1, 2]);
        assert_eq!(listed[0].fotos[1].tipo, TipoFoto::Verso);

        assert!(storage.delete_identity_impl(&saved.id).await.unwrap());
        assert!(!storage.delete_identity_impl(&saved.id).await.unwrap());
        assert!(storage.list_identities_impl().await.unwrap().is_empty());
    }
}
