pub mod create;
pub mod grade;
pub mod list;
pub mod pending;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::activities::requests::{
    CreateActivityRequest, GradeSubmissionRequest, SubmitActivityRequest,
};
use crate::storage::Storage;

pub struct ActivityService {
    storage: Option<Arc<dyn Storage>>,
}

impl ActivityService {
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

    pub async fn create_activity(
        &self,
        request: &HttpRequest,
        activity: CreateActivityRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_activity(self, request, activity).await
    }

    // 学生：本班活动及提交状态；教师：自己课程下的活动
    pub async fn list_activities(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_activities(self, request).await
    }

    pub async fn submit(
        &self,
        request: &HttpRequest,
        submission: SubmitActivityRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_activity(self, request, submission).await
    }

    pub async fn list_pending(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        pending::list_pending(self, request).await
    }

    pub async fn grade(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        grade: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, grade).await
    }
}
