use serde::Serialize;

/// 进程启动时间，用于计算运行时长
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.start_datetime)
            .num_seconds()
    }
}
