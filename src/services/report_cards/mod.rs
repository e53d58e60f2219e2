pub mod mine;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::grading::build_report;
use crate::models::report_cards::responses::ReportCardResponse;
use crate::storage::Storage;

pub struct ReportCardService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportCardService {
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

    // 当前学生的成绩单
    pub async fn my_report_card(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        mine::my_report_card(self, request).await
    }

    // 指定学生的成绩单（教师、管理员）
    pub async fn student_report_card(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        student::student_report_card(self, request, student_id).await
    }
}

/// 读取班级科目、启用配置与学生成绩后交给聚合器
pub(crate) async fn load_report_card(
    storage: &dyn Storage,
    student_id: i64,
    student_name: String,
    class_id: i64,
) -> Result<ReportCardResponse> {
    let subjects = storage.list_subjects_for_class(class_id).await?;
    let configs = storage.list_active_configs_for_class(class_id).await?;
    let scores = storage.list_scores_for_student(student_id).await?;

    Ok(ReportCardResponse {
        student_id,
        student_name,
        class_id,
        subjects: build_report(&subjects, &configs, &scores),
    })
}
