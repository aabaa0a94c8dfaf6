use crate::compile::CompiledTable;
use crate::identifier::Identifier;
use crate::parser::is_skipped;

/// псевдонимы значения свойства
/// источник - UCD, PropertyValueAliases.txt, строки вида `sc ; Latn ; Latin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValueAlias
{
    /// короткое название свойства (sc, blk, ...)
    pub property: String,
    /// короткое название значения
    pub short: String,
    /// полное название значения
    pub long: String,
    /// прочие названия
    pub others: Vec<String>,
}

/// псевдонимы значений указанного свойства в порядке следования в файле
pub fn parse_property_value_aliases(text: &str, property: &str) -> Vec<PropertyValueAlias>
{
    text.lines()
        .filter(|line| !is_skipped(line))
        .filter_map(|line| {
            let line = match line.split_once('#') {
                Some((line, _)) => line,
                None => line,
            };

            let mut fields = line.split(';').map(str::trim);

            let name = fields.next()?;
            if name != property {
                return None;
            }

            let short = fields.next()?.to_owned();
            let long = fields.next()?.to_owned();

            Some(PropertyValueAlias {
                property: name.to_owned(),
                short,
                long,
                others: fields.map(str::to_owned).collect(),
            })
        })
        .collect()
}

/// таблица псевдонимов письменностей: (короткое название прописными, идентификатор)
///
/// только для значений, встречающихся в таблице, включая заполнитель; отсортировано, без повторов
pub fn script_aliases(compiled: &CompiledTable, aliases: &[PropertyValueAlias]) -> Vec<(String, Identifier)>
{
    let mut result: Vec<(String, Identifier)> = compiled
        .identifiers
        .intervals
        .iter()
        .filter_map(|resolved| {
            aliases
                .iter()
                .find(|alias| alias.long == resolved.interval.label)
                .map(|alias| (alias.short.to_uppercase(), resolved.identifier.clone()))
        })
        .collect();

    result.sort_by(|a, b| a.0.cmp(&b.0));
    result.dedup();

    result
}
