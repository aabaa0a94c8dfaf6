use unicode_tables_source::ShortTimeZoneId;

use super::format::format_array;

/// короткие идентификаторы LDML и соответствующие им часовые пояса
pub fn render(ids: &[ShortTimeZoneId]) -> String
{
    let rows = ids
        .iter()
        .map(|id| format!("(\"{}\", \"{}\"),", id.short, id.zone));

    format!(
        "// Generated from timezone.xml\n\n{}",
        format_array(
            "LDML short time zone ids and their canonical zones",
            "SHORT_TIME_ZONE_IDS",
            "(&str, &str)",
            rows,
        )
    )
}
