//! # 페이스 계산
//!
//! 100미터당 걸린 시간을 `분:초` 형태로 표시합니다. 저장하지 않는 표시용 값입니다.

/// 거리가 0일 때 보여주는 자리표시자
pub const ZERO_PACE: &str = "0:00";

/// 100미터당 초 단위 페이스. 거리가 0 이하이거나 유한하지 않으면 None.
pub fn pace_seconds(distance_meters: f64, duration_minutes: i64) -> Option<f64> {
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return None;
    }
    Some((duration_minutes as f64 * 60.0) / (distance_meters / 100.0))
}

/// `M:SS` 형태의 페이스 문자열
///
/// 초는 전체를 먼저 반올림한 뒤 나누므로 `1:60` 같은 값은 나오지 않습니다.
pub fn format_pace(distance_meters: f64, duration_minutes: i64) -> String {
    match pace_seconds(distance_meters, duration_minutes) {
        Some(seconds) if seconds.is_finite() => {
            let total = seconds.round().max(0.0) as u64;
            format!("{}:{:02}", total / 60, total % 60)
        }
        _ => ZERO_PACE.to_string(),
    }
}
