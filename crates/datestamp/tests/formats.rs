// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests that exercise every format tag through render, parse and JSON text.

use datestamp::Formatted;
use datestamp::format::*;
use jiff::Zoned;
use jiff::civil::date;
use jiff::tz::{Offset, TimeZone};

fn sample() -> Zoned {
    date(2023, 7, 9).at(16, 5, 7, 123_456_789).to_zoned(TimeZone::UTC).unwrap()
}

fn utc(year: i16, month: i8, day: i8, hour: i8, minute: i8, second: i8, nanos: i32) -> Zoned {
    date(year, month, day)
        .at(hour, minute, second, nanos)
        .to_zoned(TimeZone::UTC)
        .unwrap()
}

/// Renders `sample()` with `F`, checks the text and that it parses back to `expected`.
fn assert_round_trip<F: Format>(text: &str, expected: &Zoned) {
    let stamp = F::stamp(sample());
    assert_eq!(stamp.render(), text, "{}", F::NAME);

    let parsed: Formatted<F> = text.parse().unwrap();
    assert_eq!(parsed.as_zoned(), expected, "{}", F::NAME);
    assert_eq!(parsed.render(), text, "{}", F::NAME);

    let decoded = Formatted::<F>::from_json_text(stamp.to_json_text().as_bytes()).unwrap();
    assert_eq!(decoded, parsed, "{}", F::NAME);
}

#[test]
fn round_trip_every_format() {
    assert_round_trip::<Ansic>("Sun Jul  9 16:05:07 2023", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<UnixDate>("Sun Jul  9 16:05:07 UTC 2023", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<RubyDate>("Sun Jul 09 16:05:07 +0000 2023", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<Rfc822>("09 Jul 23 16:05 UTC", &utc(2023, 7, 9, 16, 5, 0, 0));
    assert_round_trip::<Rfc822Z>("09 Jul 23 16:05 +0000", &utc(2023, 7, 9, 16, 5, 0, 0));
    assert_round_trip::<Rfc850>("Sunday, 09-Jul-23 16:05:07 UTC", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<Rfc1123>("Sun, 09 Jul 2023 16:05:07 UTC", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<Rfc1123Z>("Sun, 09 Jul 2023 16:05:07 +0000", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<Rfc3339>("2023-07-09T16:05:07Z", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<Rfc3339Nano>("2023-07-09T16:05:07.123456789Z", &sample());
    assert_round_trip::<Kitchen>("4:05PM", &utc(0, 1, 1, 16, 5, 0, 0));
    assert_round_trip::<Stamp>("Jul  9 16:05:07", &utc(0, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<StampMilli>("Jul  9 16:05:07.123", &utc(0, 7, 9, 16, 5, 7, 123_000_000));
    assert_round_trip::<StampMicro>("Jul  9 16:05:07.123456", &utc(0, 7, 9, 16, 5, 7, 123_456_000));
    assert_round_trip::<StampNano>("Jul  9 16:05:07.123456789", &utc(0, 7, 9, 16, 5, 7, 123_456_789));
    assert_round_trip::<DateTime>("2023-07-09 16:05:07", &utc(2023, 7, 9, 16, 5, 7, 0));
    assert_round_trip::<DateOnly>("2023-07-09", &utc(2023, 7, 9, 0, 0, 0, 0));
    assert_round_trip::<TimeOnly>("16:05:07", &utc(0, 1, 1, 16, 5, 7, 0));
}

#[test]
fn numeric_offsets_round_trip() {
    let offset = Offset::from_seconds(-(3 * 3600 + 30 * 60)).unwrap();
    let zoned = sample().with_time_zone(TimeZone::fixed(offset));

    let stamp = Rfc3339Nano::stamp(zoned.clone());
    assert_eq!(stamp.render(), "2023-07-09T12:35:07.123456789-03:30");
    let parsed = Formatted::<Rfc3339Nano>::parse(&stamp.render()).unwrap();
    assert_eq!(parsed.as_zoned().offset(), offset);
    assert_eq!(parsed, stamp);

    let stamp = RubyDate::stamp(zoned.clone());
    assert_eq!(stamp.render(), "Sun Jul 09 12:35:07 -0330 2023");
    assert_eq!(Formatted::<RubyDate>::parse(&stamp.render()).unwrap().as_zoned().offset(), offset);

    let stamp = Rfc822Z::stamp(zoned);
    assert_eq!(stamp.render(), "09 Jul 23 12:35 -0330");
}

#[test]
fn zone_abbreviation_keeps_name() {
    let stamp = Formatted::<Rfc1123>::parse("Sun, 09 Jul 2023 16:05:07 PDT").unwrap();

    // Unknown abbreviations parse with a zero offset.
    assert_eq!(stamp.as_zoned().offset(), Offset::UTC);
    assert_eq!(stamp.timestamp().as_second(), sample().timestamp().as_second());
    assert_eq!(stamp.render(), "Sun, 09 Jul 2023 16:05:07 PDT");
}

#[test]
fn numeric_zone_name_keeps_text() {
    let text = "Sun, 09 Jul 2023 16:05:07 +07";
    let stamp = Formatted::<Rfc1123>::parse(text).unwrap();

    // A bare signed hour is a name, not an offset.
    assert_eq!(stamp.as_zoned().offset(), Offset::UTC);
    assert_eq!(stamp.render(), text);
}

/// Each format rejects a wrong delimiter, an invalid month and a non-numeric day (or hour).
fn assert_rejects<F: Format>(inputs: [&str; 3]) {
    for input in inputs {
        let err = Formatted::<F>::parse(input).unwrap_err();
        assert_eq!(err.layout(), F::LAYOUT, "{input}");
        assert_eq!(err.text(), input);
    }
}

#[test]
fn strict_parsing() {
    assert_rejects::<Ansic>(["Sun Jul  9 16-05-07 2023", "Sun Jux  9 16:05:07 2023", "Sun Jul  x 16:05:07 2023"]);
    assert_rejects::<UnixDate>([
        "Sun Jul  9 16.05.07 UTC 2023",
        "Sun Juli  9 16:05:07 UTC 2023",
        "Sun Jul  x 16:05:07 UTC 2023",
    ]);
    assert_rejects::<RubyDate>([
        "Sun Jul 09 16:05:07 +00:00 2023",
        "Sun Xyz 09 16:05:07 +0000 2023",
        "Sun Jul 9 16:05:07 +0000 2023",
    ]);
    assert_rejects::<Rfc822>(["09-Jul-23 16:05 UTC", "09 Jly 23 16:05 UTC", "32 Jul 23 16:05 UTC"]);
    assert_rejects::<Rfc822Z>(["09 Jul 23 16:05 UTC", "09 13 23 16:05 +0000", "xx Jul 23 16:05 +0000"]);
    assert_rejects::<Rfc850>([
        "Sunday 09-Jul-23 16:05:07 UTC",
        "Sunday, 09-July-23 16:05:07 UTC",
        "Sunday, x9-Jul-23 16:05:07 UTC",
    ]);
    assert_rejects::<Rfc1123>([
        "Sun 09 Jul 2023 16:05:07 UTC",
        "Sun, 09 Jux 2023 16:05:07 UTC",
        "Sun, 9x Jul 2023 16:05:07 UTC",
    ]);
    assert_rejects::<Rfc1123Z>([
        "Sun, 09 Jul 2023 16:05:07 UTC",
        "Sun, 09 Jux 2023 16:05:07 +0000",
        "Sun, 31 Jun 2023 16:05:07 +0000",
    ]);
    assert_rejects::<Rfc3339>(["2023/07/09T16:05:07Z", "2023-13-09T16:05:07Z", "2023-07-xxT16:05:07Z"]);
    assert_rejects::<Rfc3339Nano>([
        "2023-07-09 16:05:07.1Z",
        "2023-13-09T16:05:07.1Z",
        "2023-07-0xT16:05:07.1Z",
    ]);
    assert_rejects::<Kitchen>(["4-05PM", "13:05PM", "4:05XM"]);
    assert_rejects::<Stamp>(["Jul  9 16-05-07", "Jux  9 16:05:07", "Jul  x 16:05:07"]);
    assert_rejects::<StampMilli>(["Jul  9 16:05:07,12", "Jux  9 16:05:07.123", "Jul  x 16:05:07.123"]);
    assert_rejects::<StampMicro>(["Jul  9 16:05:07.123", "Jux  9 16:05:07.123456", "Jul  x 16:05:07.123456"]);
    assert_rejects::<StampNano>(["Jul  9 16:05:07", "Jux  9 16:05:07.123456789", "Jul  x 16:05:07.123456789"]);
    assert_rejects::<DateTime>(["2023-07-09T16:05:07", "2023-13-09 16:05:07", "2023-07-xx 16:05:07"]);
    assert_rejects::<DateOnly>(["2023/07/09", "2023-13-09", "2023-07-xx"]);
    assert_rejects::<TimeOnly>(["16-05-07", "24:05:07", "xx:05:07"]);
}

#[test]
fn trailing_text_is_rejected() {
    let err = Formatted::<DateOnly>::parse("2023-07-09T00:00:00Z").unwrap_err();
    assert_eq!(
        err.parse_error().to_string(),
        r#"parsing time "2023-07-09T00:00:00Z": extra text: "T00:00:00Z""#
    );
}
