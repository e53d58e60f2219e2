pub mod list;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assessments::requests::{ScoreQuery, UpsertScoreRequest};
use crate::storage::Storage;

pub struct ScoreService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScoreService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_scores(
        &self,
        request: &HttpRequest,
        query: ScoreQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_scores(self, request, query).await
    }

    // 按（学生, 班级, 科目, 单元, 类型）写入或覆盖
    pub async fn upsert_score(
        &self,
        request: &HttpRequest,
        score: UpsertScoreRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_score(self, request, score).await
    }
}
