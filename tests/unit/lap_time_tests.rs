/*!
 * Tests for lap time parsing and formatting
 */

use lapchapters::errors::TimeParseError;
use lapchapters::lap_time::{LapDuration, TimeFormat};

/// Test that a bare integer parses as seconds
#[test]
fn test_parse_withBareInteger_shouldReadSeconds() {
    let d = LapDuration::parse("40").unwrap();
    assert_eq!(d.as_millis(), 40_000);

    let d = LapDuration::parse("42").unwrap();
    assert_eq!(d.as_millis(), 42_000);
}

/// Test minutes:seconds form with a fraction
#[test]
fn test_parse_withMinutesAndFraction_shouldReadExactMillis() {
    let d = LapDuration::parse("1:32.500").unwrap();
    assert_eq!(d.as_millis(), 92_500);

    let d = LapDuration::parse("1:29.800").unwrap();
    assert_eq!(d.as_millis(), 89_800);
}

/// Test single-digit groups are zero-padded before interpretation
#[test]
fn test_parse_withSingleDigitGroups_shouldPadAndParse() {
    // "5.2" pads to "05.2" and reads as 5.2 seconds
    let d = LapDuration::parse("5.2").unwrap();
    assert_eq!(d.as_millis(), 5_200);

    // "1:5.2" pads the seconds group
    let d = LapDuration::parse("1:5.2").unwrap();
    assert_eq!(d.as_millis(), 65_200);
}

/// Test the full three-group form
#[test]
fn test_parse_withThreeGroups_shouldReadHours() {
    let d = LapDuration::parse("01:02:03").unwrap();
    assert_eq!(d.as_millis(), 3_723_000);
}

/// Test surrounding whitespace is trimmed
#[test]
fn test_parse_withWhitespace_shouldTrim() {
    let d = LapDuration::parse("  1:32  ").unwrap();
    assert_eq!(d.as_millis(), 92_000);
}

/// Test short fractions are right-padded: ".2" means 200ms
#[test]
fn test_parse_withShortFraction_shouldRightPad() {
    let d = LapDuration::parse("0.2").unwrap();
    assert_eq!(d.as_millis(), 200);

    let d = LapDuration::parse("0.25").unwrap();
    assert_eq!(d.as_millis(), 250);
}

/// Test fractional digits beyond millisecond precision are rounded, not dropped
#[test]
fn test_parse_withSubMillisFraction_shouldRound() {
    let d = LapDuration::parse("1.2345").unwrap();
    assert_eq!(d.as_millis(), 1_235);

    let d = LapDuration::parse("1.2344").unwrap();
    assert_eq!(d.as_millis(), 1_234);
}

/// Test empty and whitespace-only input fails
#[test]
fn test_parse_withEmptyInput_shouldFail() {
    assert_eq!(LapDuration::parse(""), Err(TimeParseError::EmptyInput));
    assert_eq!(LapDuration::parse("   "), Err(TimeParseError::EmptyInput));
}

/// Test group count limit
#[test]
fn test_parse_withTooManyGroups_shouldFail() {
    assert_eq!(
        LapDuration::parse("1:2:3:4"),
        Err(TimeParseError::TooManyGroups(4))
    );
}

/// Test non-numeric input fails deterministically
#[test]
fn test_parse_withNonNumericInput_shouldFail() {
    assert!(matches!(
        LapDuration::parse("abc"),
        Err(TimeParseError::InvalidNumber(_))
    ));
    assert!(matches!(
        LapDuration::parse("1:xx"),
        Err(TimeParseError::InvalidNumber(_))
    ));
    assert!(matches!(
        LapDuration::parse("1.2.3"),
        Err(TimeParseError::InvalidNumber(_))
    ));
}

/// Test wall-clock range validation of the normalized form
#[test]
fn test_parse_withOutOfRangeComponents_shouldFail() {
    // 99 bare seconds normalize to 00:00:99, which is not a valid time of day
    assert!(matches!(
        LapDuration::parse("99"),
        Err(TimeParseError::ComponentOutOfRange { component: "seconds", .. })
    ));
    assert!(matches!(
        LapDuration::parse("75:00"),
        Err(TimeParseError::ComponentOutOfRange { component: "minutes", .. })
    ));
    assert!(matches!(
        LapDuration::parse("25:00:00"),
        Err(TimeParseError::ComponentOutOfRange { component: "hours", .. })
    ));
}

/// Test the three output patterns without truncation
#[test]
fn test_format_withPatterns_shouldRenderFixedForms() {
    let d = LapDuration::from_millis(92_500);
    assert_eq!(d.format(TimeFormat::LapTime, false), "00:01:32.500");
    assert_eq!(d.format(TimeFormat::Timestamp, false), "00:01:32");
    assert_eq!(d.format(TimeFormat::Subtitle, false), "00:01:32,500");
}

/// Test leading zero-group truncation strips repeatedly
#[test]
fn test_format_withTruncation_shouldStripLeadingZeroGroups() {
    assert_eq!(
        LapDuration::from_millis(92_500).format(TimeFormat::LapTime, true),
        "01:32.500"
    );
    assert_eq!(
        LapDuration::from_millis(2_700).format(TimeFormat::LapTime, true),
        "02.700"
    );
    assert_eq!(
        LapDuration::from_millis(40_000).format(TimeFormat::LapTime, true),
        "40.000"
    );
}

/// Test truncation never removes the seconds/fraction group
#[test]
fn test_format_withZeroDuration_shouldKeepFinalGroup() {
    assert_eq!(
        LapDuration::ZERO.format(TimeFormat::LapTime, true),
        "00.000"
    );
    assert_eq!(LapDuration::ZERO.format(TimeFormat::Timestamp, true), "00");
}

/// Test negative durations render with an explicit sign
#[test]
fn test_format_withNegativeDuration_shouldRenderSign() {
    let d = LapDuration::from_millis(-2_700);
    assert_eq!(d.format(TimeFormat::LapTime, false), "-00:00:02.700");
    assert_eq!(d.format(TimeFormat::LapTime, true), "-02.700");
}

/// Test hours are an unbounded magnitude field, never wrapped modulo 24
#[test]
fn test_format_withOver24Hours_shouldNotWrap() {
    let d = LapDuration::from_secs(25 * 3600 + 61);
    assert_eq!(d.format(TimeFormat::Timestamp, false), "25:01:01");

    let d = LapDuration::from_secs(100 * 3600);
    assert_eq!(d.format(TimeFormat::Timestamp, false), "100:00:00");
}

/// Test arithmetic and comparison behave like plain signed milliseconds
#[test]
fn test_arithmetic_withAddAndSub_shouldKeepMillisecondPrecision() {
    let a = LapDuration::parse("1:32.500").unwrap();
    let b = LapDuration::parse("1:29.800").unwrap();

    assert_eq!((a + b).as_millis(), 182_300);
    assert_eq!((a - b).as_millis(), 2_700);
    assert_eq!((b - a).as_millis(), -2_700);
    assert!((b - a).is_negative());
    assert!(b < a);
}

/// Test format(parse(s)) round-trips to the canonical normalized form
#[test]
fn test_roundtrip_withGrammarValidInputs_shouldNormalize() {
    let cases = [
        ("40", "00:00:40.000", "40.000"),
        ("1:32.500", "00:01:32.500", "01:32.500"),
        ("5.2", "00:00:05.200", "05.200"),
        ("01:02:03", "01:02:03.000", "01:02:03.000"),
    ];

    for (input, untruncated, truncated) in cases {
        let d = LapDuration::parse(input).unwrap();
        assert_eq!(d.format(TimeFormat::LapTime, false), untruncated);
        assert_eq!(d.format(TimeFormat::LapTime, true), truncated);
    }
}
