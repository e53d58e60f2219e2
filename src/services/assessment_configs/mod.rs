pub mod create;
pub mod delete;
pub mod list;
pub mod toggle;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::grading::weight_advisory;
use crate::models::assessments::{
    entities::AssessmentConfig,
    requests::{CreateAssessmentConfigRequest, ToggleAssessmentConfigRequest},
    responses::WeightAdvisory,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::storage::Storage;

pub struct AssessmentConfigService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssessmentConfigService {
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

    pub async fn list_configs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_configs(self, request).await
    }

    pub async fn create_config(
        &self,
        request: &HttpRequest,
        config: CreateAssessmentConfigRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_config(self, request, config).await
    }

    pub async fn toggle_config(
        &self,
        request: &HttpRequest,
        config_id: i64,
        toggle: ToggleAssessmentConfigRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_config(self, request, config_id, toggle).await
    }

    pub async fn delete_config(
        &self,
        request: &HttpRequest,
        config_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_config(self, request, config_id).await
    }
}

/// 汇总该单元当前的启用权重，查询失败只记录日志
pub(crate) async fn advisory_for(
    storage: &dyn Storage,
    config: &AssessmentConfig,
) -> Option<WeightAdvisory> {
    match storage
        .list_active_weights(config.class_id, config.subject_id, config.unit)
        .await
    {
        Ok(weights) => {
            let advisory = weight_advisory(&weights);
            if let Some(warning) = &advisory.warning {
                tracing::info!("Config {}: {}", config.id, warning);
            }
            Some(advisory)
        }
        Err(e) => {
            tracing::warn!("Failed to compute weight advisory for config {}: {}", config.id, e);
            None
        }
    }
}

/// 读取当前教师自己的配置，他人的配置视为不存在
pub(crate) async fn owned_config(
    storage: &dyn Storage,
    config_id: i64,
    teacher_id: i64,
) -> Result<AssessmentConfig, HttpResponse> {
    match storage.get_config_by_id(config_id).await {
        Ok(Some(config)) if config.teacher_id == teacher_id => Ok(config),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssessmentConfigNotFound,
            "Assessment config not found",
        ))),
        Err(e) => Err(internal_error(format!(
            "Failed to get assessment config: {e}"
        ))),
    }
}
