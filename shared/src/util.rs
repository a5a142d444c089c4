/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Alert lifetime: 14 days in milliseconds
///
/// `expires_at = created_at + ALERT_TTL_MS`, fixed at creation and
/// never recomputed.
pub const ALERT_TTL_MS: i64 = 14 * 24 * 60 * 60 * 1000;
