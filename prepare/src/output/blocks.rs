use unicode_tables_source::identifier::{display_name, name_variants, Identifier};
use unicode_tables_source::{to_hex_string, CompiledTable};

use super::format::{format_array, pad, INDENT};

/// ширина колонки с началом блока
const STARTS_WIDTH: usize = 7;

/// таблицы блоков: начала диапазонов, блок каждого диапазона и новые константы
pub fn render(compiled: &CompiledTable, since: &str) -> String
{
    let resolved = &compiled.identifiers.intervals;

    let starts = resolved.iter().map(|r| {
        let start = to_hex_string(r.interval.start);
        let range = r.interval.range_string();

        let comment = match r.identifier {
            // ширина как у "HHHH..HHHH; " при одинаковой длине начала и конца
            Identifier::Sentinel => format!("{}{}", " ".repeat(start.len() * 2 + 4), r.interval.label),
            Identifier::Named(_) => format!("{}; {}", range, r.interval.label),
        };

        format!("0x{},{}// {}", start, pad(start.len(), STARTS_WIDTH), comment)
    });

    let blocks = resolved.iter().map(|r| match &r.identifier {
        Identifier::Named(name) => format!("Some(UnicodeBlock::{}),", name),
        Identifier::Sentinel => "None,".to_owned(),
    });

    let constants: Vec<String> = compiled
        .identifiers
        .new_identifiers
        .iter()
        .map(|new| constant(&new.label, &new.identifier, since))
        .collect();

    format!(
        "// Generated from {}\n\n{}\n{}\nimpl UnicodeBlock\n{{\n{}}}\n",
        compiled.kind.file_name(),
        format_array(
            "first code points of the Unicode character blocks",
            "BLOCK_STARTS",
            "u32",
            starts,
        ),
        format_array(
            "Unicode character block of each range in BLOCK_STARTS, None for unassigned ranges",
            "BLOCKS",
            "Option<UnicodeBlock>",
            blocks,
        ),
        constants.join("\n"),
    )
}

/// объявление константы блока вместе с вариантами написания названия
fn constant(label: &str, identifier: &str, since: &str) -> String
{
    let (spaced, compact) = name_variants(label);

    let mut aliases: Vec<String> = vec![];

    for variant in [spaced, compact] {
        if variant != identifier && !aliases.contains(&variant) {
            aliases.push(variant);
        }
    }

    let aliases = aliases
        .iter()
        .map(|a| format!("\"{}\"", a))
        .collect::<Vec<String>>()
        .join(", ");

    format!(
        "{i}/// Constant for the \"{name}\" Unicode character block.\n\
         {i}///\n\
         {i}/// Since {since}.\n\
         {i}pub const {id}: Self = Self::new(\"{id}\", &[{aliases}]);\n",
        i = INDENT,
        name = display_name(label),
        since = since,
        id = identifier,
        aliases = aliases,
    )
}
