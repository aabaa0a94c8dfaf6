use regex::Regex;

lazy_static! {
    /// элемент <type> из CLDR bcp47/timezone.xml
    static ref TYPE: Regex = Regex::new(
        r#"^\s*<type name="(?P<name>[a-z0-9]+)"\s*description="(?P<desc>[^"]+)"\s*(?P<depr>deprecated="true")?\s*alias="(?P<alias>[^"]+)".*"#
    )
    .expect("valid timezone type pattern");
}

/// название служебного часового пояса "неизвестно"
const UNKNOWN_ZONE: &str = "unk";
/// описание метазоны
const METAZONE: &str = "Metazone";

/// часовой пояс из CLDR
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZoneType
{
    /// короткий идентификатор LDML (например, "usnyc")
    pub name: String,
    pub description: String,
    pub deprecated: bool,
    /// идентификаторы TZDB, первый из них - канонический
    pub aliases: Vec<String>,
}

impl TimeZoneType
{
    /// канонический идентификатор TZDB
    pub fn canonical(&self) -> &str
    {
        self.aliases.first().map(String::as_str).unwrap_or_default()
    }
}

/// короткий идентификатор и соответствующий ему часовой пояс
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortTimeZoneId
{
    pub short: String,
    pub zone: String,
}

/// все элементы <type> с псевдонимами в порядке следования в файле
pub fn parse_time_zone_types(text: &str) -> Vec<TimeZoneType>
{
    text.lines()
        .filter_map(|line| TYPE.captures(line))
        .map(|captures| TimeZoneType {
            name: captures["name"].to_owned(),
            description: captures["desc"].to_owned(),
            deprecated: captures.name("depr").is_some(),
            aliases: captures["alias"]
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
        })
        .collect()
}

/// короткие идентификаторы действующих часовых поясов:
/// без метазон, устаревших записей и "unk"
pub fn short_time_zone_ids(text: &str) -> Vec<ShortTimeZoneId>
{
    let ids: Vec<ShortTimeZoneId> = parse_time_zone_types(text)
        .into_iter()
        .filter(|tz| tz.description != METAZONE && !tz.deprecated && tz.name != UNKNOWN_ZONE)
        .map(|tz| ShortTimeZoneId {
            zone: tz.canonical().to_owned(),
            short: tz.name,
        })
        .collect();

    tracing::info!(ids = ids.len(), "collected short time zone ids");

    ids
}
