use unicode_tables_source::{NormalizedTable, MAX_CODE_POINT};

/// таблица покрывает всё пространство кодпоинтов, диапазоны идут подряд,
/// соседние диапазоны различаются значениями
pub fn assert_normalized(table: &NormalizedTable)
{
    let intervals = table.intervals();

    assert!(!intervals.is_empty());
    assert_eq!(intervals.first().unwrap().start, 0);
    assert_eq!(intervals.last().unwrap().end, MAX_CODE_POINT);

    for interval in intervals {
        assert!(interval.start <= interval.end, "{:?}", interval);
    }

    for pair in intervals.windows(2) {
        assert_eq!(pair[0].end + 1, pair[1].start, "{:?}", pair);
        assert_ne!(pair[0].label, pair[1].label, "{:?}", pair);
    }
}
