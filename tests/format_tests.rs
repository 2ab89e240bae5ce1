use studylog::errors::AppError;
use studylog::utils::time::format_duration;

#[test]
fn test_format_duration_zero() {
    assert_eq!(format_duration(0).expect("format"), "0 min 0 sec");
}

#[test]
fn test_format_duration_minutes_and_seconds() {
    assert_eq!(format_duration(65).expect("format"), "1 min 5 sec");
}

#[test]
fn test_format_duration_with_hours() {
    assert_eq!(format_duration(3661).expect("format"), "1 h 1 min 1 sec");
}

#[test]
fn test_format_duration_just_below_an_hour() {
    assert_eq!(format_duration(3599).expect("format"), "59 min 59 sec");
}

#[test]
fn test_format_duration_negative_is_rejected() {
    let err = format_duration(-1).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration(-1)), "got {err:?}");
}

/// Re-derives (h, m, s) from the rendered text and recomputes the seconds.
fn parse_back(rendered: &str) -> i64 {
    let tokens: Vec<&str> = rendered.split_whitespace().collect();
    match tokens.as_slice() {
        [h, "h", m, "min", s, "sec"] => {
            h.parse::<i64>().unwrap() * 3600
                + m.parse::<i64>().unwrap() * 60
                + s.parse::<i64>().unwrap()
        }
        [m, "min", s, "sec"] => m.parse::<i64>().unwrap() * 60 + s.parse::<i64>().unwrap(),
        other => panic!("unexpected duration format: {other:?}"),
    }
}

#[test]
fn test_format_duration_round_trips() {
    for secs in [
        0, 1, 59, 60, 61, 65, 119, 3599, 3600, 3661, 7325, 86399, 86400, 90061, 123456,
    ] {
        let rendered = format_duration(secs).expect("format");
        assert_eq!(parse_back(&rendered), secs, "for input {secs}");
    }
}
