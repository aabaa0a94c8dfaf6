use std::collections::{BTreeSet, HashSet};

use crate::interval::Interval;
use crate::normalize::NormalizedTable;
use crate::property::PropertyKind;

/// источник сведений об уже объявленных идентификаторах
///
/// идентификатор, о котором известно, не попадает в список новых констант
pub trait KnownIdentifiers
{
    fn is_known(&self, identifier: &str) -> bool;
}

/// ничего не объявлено, все идентификаторы - новые
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKnownIdentifiers;

impl KnownIdentifiers for NoKnownIdentifiers
{
    #[inline]
    fn is_known(&self, _: &str) -> bool
    {
        false
    }
}

impl<F> KnownIdentifiers for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn is_known(&self, identifier: &str) -> bool
    {
        self(identifier)
    }
}

impl KnownIdentifiers for HashSet<String>
{
    #[inline]
    fn is_known(&self, identifier: &str) -> bool
    {
        self.contains(identifier)
    }
}

impl KnownIdentifiers for BTreeSet<String>
{
    #[inline]
    fn is_known(&self, identifier: &str) -> bool
    {
        self.contains(identifier)
    }
}

impl KnownIdentifiers for [&str]
{
    #[inline]
    fn is_known(&self, identifier: &str) -> bool
    {
        self.iter().any(|known| *known == identifier)
    }
}

/// идентификатор диапазона в итоговой таблице
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier
{
    /// заполнитель пропусков; выводится отдельно и не пересекается ни с одним названием
    Sentinel,
    /// константа, полученная из значения свойства
    Named(String),
}

impl Identifier
{
    pub fn is_sentinel(&self) -> bool
    {
        matches!(self, Self::Sentinel)
    }
}

/// диапазон итоговой таблицы вместе с идентификатором
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterval
{
    pub interval: Interval,
    pub identifier: Identifier,
}

/// новая константа, которую требуется объявить
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentifier
{
    pub label: String,
    pub identifier: String,
}

/// результат сопоставления: вся таблица и список новых констант
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierMap
{
    pub intervals: Vec<ResolvedInterval>,
    pub new_identifiers: Vec<NewIdentifier>,
}

/// допустимое имя константы: прописные буквы, пробелы и дефисы заменены на подчеркивания
pub fn legalize(label: &str) -> String
{
    label
        .to_uppercase()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c,
        })
        .collect()
}

/// идентификатор значения свойства с учетом исторических названий
pub fn identifier_for(kind: PropertyKind, label: &str) -> String
{
    let identifier = legalize(label);

    match kind.compatibility_override(&identifier) {
        Some(legacy) => legacy.to_owned(),
        None => identifier,
    }
}

/// название для документации: Old_Italic -> Old Italic
pub fn display_name(label: &str) -> String
{
    label.replace('_', " ")
}

/// варианты написания названия, по которым константу можно найти:
/// прописными с пробелами и прописными без пробелов
pub fn name_variants(label: &str) -> (String, String)
{
    let spaced = display_name(label).to_uppercase();
    let compact = spaced.replace(' ', "");

    (spaced, compact)
}

/// сопоставить каждому диапазону идентификатор и составить список новых констант
///
/// новые константы идут в порядке первого появления, известные константы пропускаются,
/// из нескольких значений с одинаковым идентификатором остается первое
pub fn map_identifiers<K>(table: &NormalizedTable, kind: PropertyKind, known: &K) -> IdentifierMap
where
    K: KnownIdentifiers + ?Sized,
{
    let mut intervals = Vec::with_capacity(table.len());
    let mut new_identifiers = vec![];
    let mut seen: HashSet<String> = HashSet::new();

    for interval in table.intervals() {
        if table.is_sentinel(interval) {
            intervals.push(ResolvedInterval {
                interval: interval.clone(),
                identifier: Identifier::Sentinel,
            });
            continue;
        }

        let identifier = identifier_for(kind, &interval.label);

        if seen.insert(identifier.clone()) {
            match known.is_known(&identifier) {
                true => tracing::trace!(%identifier, "already known"),
                false => new_identifiers.push(NewIdentifier {
                    label: interval.label.clone(),
                    identifier: identifier.clone(),
                }),
            }
        }

        intervals.push(ResolvedInterval {
            interval: interval.clone(),
            identifier: Identifier::Named(identifier),
        });
    }

    tracing::info!(
        kind = kind.file_name(),
        distinct = seen.len(),
        new = new_identifiers.len(),
        "mapped identifiers"
    );

    IdentifierMap {
        intervals,
        new_identifiers,
    }
}
