use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct DbCheckResponse {
    pub database: String,
    pub server_time: chrono::DateTime<chrono::Utc>,
}
