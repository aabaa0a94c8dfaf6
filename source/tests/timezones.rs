use unicode_tables_source::short_time_zone_ids;
use unicode_tables_source::timezone::parse_time_zone_types;

const TIMEZONES: &str = include_str!("./data/timezone.xml");

#[test]
fn all_types_with_aliases()
{
    let names: Vec<String> = parse_time_zone_types(TIMEZONES)
        .into_iter()
        .map(|tz| tz.name)
        .collect();

    assert_eq!(
        names,
        vec!["adalv", "aedxb", "aqams", "mzutc", "unk", "uslax", "usnyc", "utc"]
    );
}

#[test]
fn short_ids_skip_metazones_deprecated_and_unknown()
{
    let ids: Vec<(String, String)> = short_time_zone_ids(TIMEZONES)
        .into_iter()
        .map(|id| (id.short, id.zone))
        .collect();

    let expected: Vec<(String, String)> = [
        ("adalv", "Europe/Andorra"),
        ("aedxb", "Asia/Dubai"),
        ("uslax", "America/Los_Angeles"),
        ("usnyc", "America/New_York"),
        ("utc", "Etc/UTC"),
    ]
    .iter()
    .map(|(short, zone)| (short.to_string(), zone.to_string()))
    .collect();

    assert_eq!(ids, expected);
}
