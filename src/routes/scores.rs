use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assessments::requests::{ScoreQuery, UpsertScoreRequest};
use crate::models::users::entities::UserRole;
use crate::services::ScoreService;

static SCORE_SERVICE: Lazy<ScoreService> = Lazy::new(ScoreService::new_lazy);

pub async fn list_scores(
    req: HttpRequest,
    query: web::Query<ScoreQuery>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.list_scores(&req, query.into_inner()).await
}

pub async fn upsert_score(
    req: HttpRequest,
    score: web::Json<UpsertScoreRequest>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.upsert_score(&req, score.into_inner()).await
}

// 配置路由
pub fn configure_score_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/scores")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_scores))
                    .route(web::post().to(upsert_score)),
            ),
    );
}
