/// Source of "now" for the footer copy.
pub trait Clock {
    fn current_year(&self) -> i32;
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

#[cfg(test)]
pub struct FixedClock(pub i32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(target_arch = "wasm32")]
pub fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

// std::time::SystemTime is unavailable on wasm32-unknown-unknown.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
