use unicode_tables_source::parser::parse_records;
use unicode_tables_source::{normalize, Interval, MAX_CODE_POINT};

mod common;

use common::assert_normalized;

const SENTINEL: &str = "Unknown";

fn normalize_lines(lines: &[&str]) -> Vec<(u32, u32, String)>
{
    let records = parse_records(lines.join("\n").as_str()).unwrap();
    let table = normalize(records, SENTINEL);

    assert_normalized(&table);

    table
        .intervals()
        .iter()
        .map(|i| (i.start, i.end, i.label.clone()))
        .collect()
}

fn expected(intervals: &[(u32, u32, &str)]) -> Vec<(u32, u32, String)>
{
    intervals
        .iter()
        .map(|&(start, end, label)| (start, end, label.to_owned()))
        .collect()
}

#[test]
fn empty_input()
{
    assert_eq!(
        normalize_lines(&[]),
        expected(&[(0, MAX_CODE_POINT, SENTINEL)])
    );
}

#[test]
fn gaps_are_filled()
{
    let result = normalize_lines(&[
        "0000..0040; Common",
        "0041..005A; Latin",
        "0530..0530; Armenian",
    ]);

    assert_eq!(
        result,
        expected(&[
            (0x0, 0x40, "Common"),
            (0x41, 0x5A, "Latin"),
            (0x5B, 0x52F, SENTINEL),
            (0x530, 0x530, "Armenian"),
            (0x531, MAX_CODE_POINT, SENTINEL),
        ])
    );
}

#[test]
fn leading_gap()
{
    let result = normalize_lines(&["0041..005A; Latin"]);

    assert_eq!(
        result,
        expected(&[
            (0x0, 0x40, SENTINEL),
            (0x41, 0x5A, "Latin"),
            (0x5B, MAX_CODE_POINT, SENTINEL),
        ])
    );
}

#[test]
fn adjacent_runs_are_merged()
{
    let result = normalize_lines(&["0041..005A; Latin", "005B..0060; Latin"]);

    assert_eq!(
        result,
        expected(&[
            (0x0, 0x40, SENTINEL),
            (0x41, 0x60, "Latin"),
            (0x61, MAX_CODE_POINT, SENTINEL),
        ])
    );
}

#[test]
fn runs_separated_by_gap_are_not_merged()
{
    let result = normalize_lines(&["0041..005A; Latin", "0061..007A; Latin"]);

    assert_eq!(
        result,
        expected(&[
            (0x0, 0x40, SENTINEL),
            (0x41, 0x5A, "Latin"),
            (0x5B, 0x60, SENTINEL),
            (0x61, 0x7A, "Latin"),
            (0x7B, MAX_CODE_POINT, SENTINEL),
        ])
    );
}

#[test]
fn explicit_sentinel_merges_with_synthesized_gap()
{
    let result = normalize_lines(&["0000..0040; Common", "0050..005F; Unknown"]);

    assert_eq!(
        result,
        expected(&[(0x0, 0x40, "Common"), (0x41, MAX_CODE_POINT, SENTINEL)])
    );
}

#[test]
fn unordered_input_is_sorted()
{
    let result = normalize_lines(&[
        "0370..0373; Greek",
        "0000..001F; Common",
        "0041..005A; Latin",
        "0020; Common",
    ]);

    assert_eq!(
        result,
        expected(&[
            (0x0, 0x20, "Common"),
            (0x21, 0x40, SENTINEL),
            (0x41, 0x5A, "Latin"),
            (0x5B, 0x36F, SENTINEL),
            (0x370, 0x373, "Greek"),
            (0x374, MAX_CODE_POINT, SENTINEL),
        ])
    );
}

#[test]
fn full_coverage_has_no_sentinel()
{
    let result = normalize_lines(&["0000..FFFF; Low", "10000..10FFFF; High"]);

    assert_eq!(
        result,
        expected(&[(0x0, 0xFFFF, "Low"), (0x10000, MAX_CODE_POINT, "High")])
    );
}

#[test]
fn last_code_point_only()
{
    let result = normalize_lines(&["10FFFF; Last"]);

    assert_eq!(
        result,
        expected(&[(0x0, 0x10FFFE, SENTINEL), (MAX_CODE_POINT, MAX_CODE_POINT, "Last")])
    );
}

#[test]
fn deterministic()
{
    let records = vec![
        Interval::new(0x61, 0x7A, "Latin"),
        Interval::new(0x0, 0x40, "Common"),
        Interval::new(0x41, 0x5A, "Latin"),
    ];

    let first = normalize(records.clone(), SENTINEL);
    let second = normalize(records, SENTINEL);

    assert_eq!(first, second);
    assert_normalized(&first);
}
