//! Platform timers for scoped UI futures.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u64::from(u32::MAX)) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Wall-clock refresh stamp rendered as `HH:MM:SS` (UTC).
pub fn clock_label(stamp: time::OffsetDateTime) -> String {
    let t = stamp.time();
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}
