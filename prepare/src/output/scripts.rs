use unicode_tables_source::identifier::{display_name, legalize, Identifier};
use unicode_tables_source::{to_hex_string, CompiledTable, PropertyValueAlias};

use super::format::{format_array, pad, INDENT};

/// ширина колонки с началом диапазона
const STARTS_WIDTH: usize = 11;
/// ширина колонки с письменностью
const SCRIPTS_WIDTH: usize = 45;

/// таблицы письменностей: новые варианты перечисления, начала диапазонов,
/// письменность каждого диапазона и четырехбуквенные псевдонимы
pub fn render(compiled: &CompiledTable, aliases: &[PropertyValueAlias], since: &str) -> String
{
    let unknown = legalize(compiled.table.sentinel());
    let resolved = &compiled.identifiers.intervals;

    let name_of = |identifier: &Identifier| -> String {
        match identifier {
            Identifier::Named(name) => name.clone(),
            Identifier::Sentinel => unknown.clone(),
        }
    };

    let mut variants: Vec<String> = compiled
        .identifiers
        .new_identifiers
        .iter()
        .map(|new| {
            format!(
                "{i}/// Unicode script \"{name}\".\n\
                 {i}///\n\
                 {i}/// Since {since}.\n\
                 {i}{id},\n",
                i = INDENT,
                name = display_name(&new.label),
                since = since,
                id = new.identifier,
            )
        })
        .collect();

    variants.push(format!(
        "{i}/// Unicode script \"{name}\".\n{i}{id},\n",
        i = INDENT,
        name = compiled.table.sentinel(),
        id = unknown,
    ));

    let starts = resolved.iter().map(|r| {
        let start = to_hex_string(r.interval.start);
        let end = to_hex_string(r.interval.end);

        let range = match r.interval.is_single() {
            true => format!("{}{}; ", start, " ".repeat(end.len() + 2)),
            false => format!("{}..{}; ", start, end),
        };

        format!(
            "0x{},{}// {}{}",
            start,
            pad(start.len(), STARTS_WIDTH),
            range,
            name_of(&r.identifier)
        )
    });

    let scripts = resolved.iter().map(|r| {
        let entry = format!("UnicodeScript::{},", name_of(&r.identifier));

        format!(
            "{}{}// {}",
            entry,
            pad(entry.len(), SCRIPTS_WIDTH),
            r.interval.range_string()
        )
    });

    let aliases = unicode_tables_source::script_aliases(compiled, aliases)
        .into_iter()
        .map(|(short, identifier)| {
            format!("(\"{}\", UnicodeScript::{}),", short, name_of(&identifier))
        });

    format!(
        "// Generated from {}\n\n// UnicodeScript: new variants\n\n{}\n{}\n{}\n{}",
        compiled.kind.file_name(),
        variants.join("\n"),
        format_array(
            "first code points of the Unicode script ranges",
            "SCRIPT_STARTS",
            "u32",
            starts,
        ),
        format_array(
            "Unicode script of each range in SCRIPT_STARTS",
            "SCRIPTS",
            "UnicodeScript",
            scripts,
        ),
        format_array(
            "ISO 15924 codes of the Unicode scripts",
            "SCRIPT_ALIASES",
            "(&str, UnicodeScript)",
            aliases,
        ),
    )
}
