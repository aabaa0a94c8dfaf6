use crate::identifier::{map_identifiers, IdentifierMap, KnownIdentifiers};
use crate::normalize::{normalize, NormalizedTable};
use crate::parser::{parse_records, ParseError};
use crate::property::PropertyKind;

/// таблица свойства, готовая к выводу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTable
{
    pub kind: PropertyKind,
    pub table: NormalizedTable,
    pub identifiers: IdentifierMap,
}

/// разбор файла свойства, нормализация диапазонов и сопоставление идентификаторов
///
/// ошибка разбора любой строки прерывает компиляцию целиком
pub fn compile<K>(text: &str, kind: PropertyKind, known: &K) -> Result<CompiledTable, ParseError>
where
    K: KnownIdentifiers + ?Sized,
{
    let _span = tracing::info_span!("compile", file = kind.file_name()).entered();

    let records = parse_records(text)?;
    let table = normalize(records, kind.sentinel_label());
    let identifiers = map_identifiers(&table, kind, known);

    Ok(CompiledTable {
        kind,
        table,
        identifiers,
    })
}
