use unicode_tables_source::CompiledTable;

/// информация о подготовленной таблице
pub fn print(compiled: &CompiledTable)
{
    let intervals = &compiled.identifiers.intervals;
    let sentinels = intervals.iter().filter(|r| r.identifier.is_sentinel()).count();
    let unassigned: u32 = intervals
        .iter()
        .filter(|r| r.identifier.is_sentinel())
        .map(|r| r.interval.len())
        .sum();

    tracing::info!(
        file = compiled.kind.file_name(),
        intervals = intervals.len(),
        sentinels,
        unassigned_code_points = unassigned,
        new_identifiers = compiled.identifiers.new_identifiers.len(),
        "table stats"
    );

    for new in compiled.identifiers.new_identifiers.iter() {
        tracing::debug!(label = %new.label, identifier = %new.identifier, "new identifier");
    }
}
