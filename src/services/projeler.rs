//! Project creation with `P####` number allocation.

use std::sync::Arc;
use tracing::{info, instrument};

use super::numbering::{self, DocumentScope};
use crate::entities::proje;
use crate::errors::ServiceError;
use crate::storage::{NewProje, ProjeRecord, Storage};

#[derive(Clone)]
pub struct ProjeService {
    storage: Arc<dyn Storage>,
}

impl ProjeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewProje) -> Result<proje::Model, ServiceError> {
        let seq = self
            .storage
            .next_document_number(DocumentScope::Proje)
            .await?;
        let proje_no = numbering::format_number(DocumentScope::Proje, seq);
        let model = self
            .storage
            .insert_proje(ProjeRecord { proje_no, input })
            .await?;
        info!(proje_no = %model.proje_no, proje_id = model.id, "project created");
        Ok(model)
    }
}
