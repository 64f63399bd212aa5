//! # 연습 입력 검증
//!
//! 클라이언트가 보낸 `RawPracticeInput`을 `CreatePracticeInput`으로 바꿉니다.
//!
//! 두 단계로 진행됩니다:
//! 1. **강제 변환(coercion)**: JSON 값을 도메인 타입으로 바꿉니다.
//!    - `date`: `"2024-01-15"`, RFC 3339 문자열, 시간대 없는 날짜-시각 문자열(UTC로 해석), 에포크 밀리초 숫자
//!    - `duration_minutes`: 정수 또는 정수를 담은 문자열 (`60`, `60.0`, `"60"`)
//!    - `distance_meters`: 숫자 또는 숫자를 담은 문자열
//!    - `notes`: 문자열, 또는 없음/null
//! 2. **범위 검증**: `validator` derive 규칙 (`duration_minutes >= 1`, `distance_meters > 0`)
//!
//! 실패한 필드는 모두 모아 하나의 `ValidationError`로 반환합니다.
//! 부작용이 없고, 같은 입력에는 항상 같은 결과가 나옵니다.

use crate::error::ValidationError;
use crate::models::{midnight_utc, CreatePracticeInput, RawPracticeInput};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use validator::Validate;

const REQUIRED: &str = "is required";
const NOT_A_DATE: &str = "must be a calendar date";
const NOT_A_NUMBER: &str = "must be a number";
const NOT_AN_INTEGER: &str = "must be an integer";
const OUT_OF_RANGE: &str = "is out of range";
const NOT_TEXT: &str = "must be text";

/// 에러 목록을 정렬할 때 쓰는 필드 순서
const FIELD_ORDER: [&str; 4] = ["date", "duration_minutes", "distance_meters", "notes"];

/// 가공 전 입력을 검증하여 `CreatePracticeInput`을 만듭니다.
///
/// # 반환값
/// - `Ok(CreatePracticeInput)`: 모든 필드가 규칙을 통과
/// - `Err(ValidationError)`: 실패한 필드 전부와 그 이유
pub fn validate_create_input(raw: &RawPracticeInput) -> Result<CreatePracticeInput, ValidationError> {
    let mut errors = ValidationError::default();

    let date = coerce_date(raw.date.as_ref())
        .map_err(|msg| errors.push("date", msg))
        .ok();
    let duration = coerce_integer(raw.duration_minutes.as_ref())
        .map_err(|msg| errors.push("duration_minutes", msg))
        .ok();
    let distance = coerce_real(raw.distance_meters.as_ref())
        .map_err(|msg| errors.push("distance_meters", msg))
        .ok();
    let notes = coerce_notes(raw.notes.as_ref())
        .map_err(|msg| errors.push("notes", msg))
        .ok()
        .flatten();

    // 변환에 실패한 필드는 범위 규칙을 통과하는 값으로 채워서,
    // validator가 변환에 성공한 필드의 범위 위반만 보고하게 합니다.
    let candidate = CreatePracticeInput {
        date: date.unwrap_or_default(),
        duration_minutes: duration.unwrap_or(1),
        distance_meters: distance.unwrap_or(1.0),
        notes,
    };

    if let Err(report) = candidate.validate() {
        for (field, field_errors) in report.field_errors() {
            for e in field_errors.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                errors.push(field.to_string(), message);
            }
        }
    }

    if errors.is_empty() {
        Ok(candidate)
    } else {
        // HashMap 순회 순서에 결과가 좌우되지 않도록 필드 순서대로 정렬
        errors.fields.sort_by_key(|f| {
            FIELD_ORDER
                .iter()
                .position(|name| *name == f.field)
                .unwrap_or(FIELD_ORDER.len())
        });
        Err(errors)
    }
}

fn coerce_date(value: Option<&Value>) -> Result<DateTime<Utc>, &'static str> {
    let date = match value {
        None => return Err(REQUIRED),
        Some(Value::String(text)) => parse_date_text(text.trim()),
        // 숫자는 에포크 밀리초로 해석합니다.
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        Some(_) => None,
    };
    // 저장 형식 `YYYY-MM-DD`는 네 자리 연도만 문자열 정렬 순서가 날짜 순서와 같습니다.
    date.filter(|dt| (0..=9999).contains(&dt.year()))
        .ok_or(NOT_A_DATE)
}

/// 문자열 날짜 표현을 UTC 시각으로 해석합니다.
///
/// 날짜만 있는 `YYYY-MM-DD`는 UTC 자정, 시간대가 없는 날짜-시각은 UTC로 취급합니다.
pub fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(midnight_utc(date));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn coerce_integer(value: Option<&Value>) -> Result<i64, &'static str> {
    match value {
        None => Err(REQUIRED),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Ok(i),
            None => float_to_integer(n.as_f64().ok_or(NOT_A_NUMBER)?),
        },
        Some(Value::String(text)) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(i) => Ok(i),
                Err(_) => float_to_integer(text.parse::<f64>().map_err(|_| NOT_A_NUMBER)?),
            }
        }
        Some(_) => Err(NOT_A_NUMBER),
    }
}

fn float_to_integer(value: f64) -> Result<i64, &'static str> {
    if !value.is_finite() {
        return Err(NOT_A_NUMBER);
    }
    if value.fract() != 0.0 {
        return Err(NOT_AN_INTEGER);
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(OUT_OF_RANGE);
    }
    Ok(value as i64)
}

fn coerce_real(value: Option<&Value>) -> Result<f64, &'static str> {
    let number = match value {
        None => return Err(REQUIRED),
        Some(Value::Number(n)) => n.as_f64().ok_or(NOT_A_NUMBER)?,
        Some(Value::String(text)) => text.trim().parse::<f64>().map_err(|_| NOT_A_NUMBER)?,
        Some(_) => return Err(NOT_A_NUMBER),
    };
    if number.is_finite() {
        Ok(number)
    } else {
        Err(NOT_A_NUMBER)
    }
}

fn coerce_notes(value: Option<&Value>) -> Result<Option<String>, &'static str> {
    match value {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(NOT_TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawPracticeInput {
        serde_json::from_value(value).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        midnight_utc(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn accepts_a_complete_form_submission() {
        let input = validate_create_input(&raw(json!({
            "date": "2024-01-15",
            "duration_minutes": 60,
            "distance_meters": 2000.5,
            "notes": "Great practice session with focus on freestyle technique"
        })))
        .unwrap();

        assert_eq!(input.date, day(2024, 1, 15));
        assert_eq!(input.duration_minutes, 60);
        assert_eq!(input.distance_meters, 2000.5);
        assert_eq!(
            input.notes.as_deref(),
            Some("Great practice session with focus on freestyle technique")
        );
    }

    #[test]
    fn absent_and_null_notes_become_none() {
        let absent = validate_create_input(&raw(json!({
            "date": "2024-01-16", "duration_minutes": 45, "distance_meters": 1500
        })))
        .unwrap();
        let null = validate_create_input(&raw(json!({
            "date": "2024-01-16", "duration_minutes": 45, "distance_meters": 1500, "notes": null
        })))
        .unwrap();

        assert_eq!(absent.notes, None);
        assert_eq!(null.notes, None);
    }

    #[test]
    fn empty_notes_pass_validation_unchanged() {
        let input = validate_create_input(&raw(json!({
            "date": "2024-01-16", "duration_minutes": 45, "distance_meters": 1500, "notes": ""
        })))
        .unwrap();
        assert_eq!(input.notes.as_deref(), Some(""));
    }

    #[test]
    fn coerces_every_supported_date_shape() {
        assert_eq!(parse_date_text("2024-01-15"), Some(day(2024, 1, 15)));
        assert_eq!(
            parse_date_text("2024-01-15T23:30:00+09:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap())
        );
        assert_eq!(
            parse_date_text("2024-01-15T08:15:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 15, 0).unwrap())
        );
        assert_eq!(
            parse_date_text("2024-01-15 08:15:00.250"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 15, 0).unwrap()
                + chrono::Duration::milliseconds(250))
        );

        let from_millis = validate_create_input(&raw(json!({
            "date": 1_705_276_800_000_i64, "duration_minutes": 30, "distance_meters": 1000
        })))
        .unwrap();
        assert_eq!(from_millis.date, day(2024, 1, 15));
    }

    #[test]
    fn rejects_uncoercible_dates() {
        for bad in [json!("yesterday"), json!("2024-13-40"), json!(true), json!([2024, 1, 15])] {
            let err = validate_create_input(&raw(json!({
                "date": bad, "duration_minutes": 30, "distance_meters": 1000
            })))
            .unwrap_err();
            assert_eq!(err.fields, vec![crate::error::FieldError::new("date", NOT_A_DATE)]);
        }
    }

    #[test]
    fn rejects_years_beyond_four_digits() {
        for bad in [json!(253_402_300_800_000_i64), json!("+10000-01-01T00:00:00Z"), json!(-62_198_755_200_000_i64)] {
            let err = validate_create_input(&raw(json!({
                "date": bad, "duration_minutes": 30, "distance_meters": 1000
            })))
            .unwrap_err();
            assert_eq!(err.fields, vec![crate::error::FieldError::new("date", NOT_A_DATE)], "date {bad}");
        }

        let last_day = validate_create_input(&raw(json!({
            "date": "9999-12-31", "duration_minutes": 30, "distance_meters": 1000
        })))
        .unwrap();
        assert_eq!(last_day.date, day(9999, 12, 31));
    }

    #[test]
    fn numeric_strings_from_form_fields_are_coerced() {
        let input = validate_create_input(&raw(json!({
            "date": "2024-01-15", "duration_minutes": " 45 ", "distance_meters": "1234.75"
        })))
        .unwrap();
        assert_eq!(input.duration_minutes, 45);
        assert_eq!(input.distance_meters, 1234.75);

        let integral_float = validate_create_input(&raw(json!({
            "date": "2024-01-15", "duration_minutes": 60.0, "distance_meters": 1000
        })))
        .unwrap();
        assert_eq!(integral_float.duration_minutes, 60);
    }

    #[test]
    fn duration_must_be_a_positive_integer() {
        let cases = [
            (json!(0), "must be at least 1"),
            (json!(-5), "must be at least 1"),
            (json!(60.5), NOT_AN_INTEGER),
            (json!("sixty"), NOT_A_NUMBER),
            (json!(""), NOT_A_NUMBER),
            (json!(1e30), OUT_OF_RANGE),
        ];
        for (value, expected) in cases {
            let err = validate_create_input(&raw(json!({
                "date": "2024-01-15", "duration_minutes": value, "distance_meters": 1000
            })))
            .unwrap_err();
            assert_eq!(
                err.fields,
                vec![crate::error::FieldError::new("duration_minutes", expected)],
                "duration {value}"
            );
        }
    }

    #[test]
    fn distance_must_be_positive_and_finite() {
        let cases = [
            (json!(0), "must be greater than 0"),
            (json!(-0.5), "must be greater than 0"),
            (json!("NaN"), NOT_A_NUMBER),
            (json!("inf"), NOT_A_NUMBER),
            (json!({}), NOT_A_NUMBER),
        ];
        for (value, expected) in cases {
            let err = validate_create_input(&raw(json!({
                "date": "2024-01-15", "duration_minutes": 30, "distance_meters": value
            })))
            .unwrap_err();
            assert_eq!(
                err.fields,
                vec![crate::error::FieldError::new("distance_meters", expected)],
                "distance {value}"
            );
        }
    }

    #[test]
    fn reports_every_failing_field_in_field_order() {
        let err = validate_create_input(&raw(json!({
            "duration_minutes": 0,
            "distance_meters": -1,
            "notes": 42
        })))
        .unwrap_err();

        let fields: Vec<&str> = err.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["date", "duration_minutes", "distance_meters", "notes"]);
        assert_eq!(err.fields[0].message, REQUIRED);
        assert_eq!(err.fields[3].message, NOT_TEXT);
    }

    #[test]
    fn validation_is_deterministic() {
        let input = raw(json!({ "date": "nope", "duration_minutes": -1, "distance_meters": 0 }));
        assert_eq!(validate_create_input(&input), validate_create_input(&input));
    }
}
