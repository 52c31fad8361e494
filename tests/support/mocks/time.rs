// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use inkpot_core::application::ports::time::Clock;

/// テスト用の固定タイムスタンプ
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// `fixed_now()` から `minutes` 分後
pub fn minutes_after(minutes: i64) -> DateTime<Utc> {
    fixed_now() + Duration::minutes(minutes)
}

/// 常に同じ時刻を返すクロック
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
