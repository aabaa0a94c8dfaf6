use crate::interval::{to_hex_string, Interval, MAX_CODE_POINT};

/// упорядоченное покрытие всего пространства кодпоинтов 0 ..= U+10FFFF:
/// диапазоны идут подряд, без пропусков и пересечений, соседние диапазоны
/// всегда имеют разные значения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable
{
    intervals: Vec<Interval>,
    sentinel: String,
}

impl NormalizedTable
{
    pub fn intervals(&self) -> &[Interval]
    {
        &self.intervals
    }

    /// заполнитель пропусков
    pub fn sentinel(&self) -> &str
    {
        &self.sentinel
    }

    /// является ли диапазон заполнителем?
    #[inline]
    pub fn is_sentinel(&self, interval: &Interval) -> bool
    {
        interval.label == self.sentinel
    }

    /// диапазон, содержащий кодпоинт (бинарный поиск по началам)
    pub fn lookup(&self, code: u32) -> Option<&Interval>
    {
        let index = self.intervals.partition_point(|i| i.start <= code);

        match index {
            0 => None,
            _ => Some(&self.intervals[index - 1]).filter(|i| i.contains(code)),
        }
    }

    /// число диапазонов; таблица никогда не бывает пустой
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize
    {
        self.intervals.len()
    }
}

/// состояние прохода по отсортированным диапазонам
struct Accumulator<'a>
{
    result: Vec<Interval>,
    /// первый кодпоинт, ещё не покрытый результатом (lastEnd + 1)
    next: u32,
    sentinel: &'a str,
    gaps: usize,
}

impl<'a> Accumulator<'a>
{
    fn new(sentinel: &'a str, capacity: usize) -> Self
    {
        Self {
            result: Vec::with_capacity(capacity),
            next: 0,
            sentinel,
            gaps: 0,
        }
    }

    /// добавить диапазон, склеив его с предыдущим при совпадении значений
    fn push(&mut self, interval: Interval)
    {
        if let Some(last) = self.result.last_mut() {
            if last.label == interval.label {
                last.end = interval.end;
                return;
            }
        }

        self.result.push(interval);
    }

    /// заполнить пропуск next ..= end
    fn fill(&mut self, end: u32)
    {
        tracing::debug!(
            start = %to_hex_string(self.next),
            end = %to_hex_string(end),
            "synthesized gap"
        );

        self.gaps += 1;
        self.push(Interval::new(self.next, end, self.sentinel));
    }

    fn step(mut self, interval: Interval) -> Self
    {
        if interval.start > self.next {
            self.fill(interval.start - 1);
        }

        // end <= U+10FFFF, переполнения нет
        self.next = interval.end + 1;
        self.push(interval);

        self
    }

    fn finish(mut self) -> (Vec<Interval>, usize)
    {
        if self.next <= MAX_CODE_POINT {
            self.fill(MAX_CODE_POINT);
        }

        (self.result, self.gaps)
    }
}

/// сортировка, заполнение пропусков и склейка соседних диапазонов с одинаковыми значениями
///
/// входные диапазоны не должны пересекаться: пересечения не проверяются и не исправляются
pub fn normalize(mut intervals: Vec<Interval>, sentinel: &str) -> NormalizedTable
{
    let records = intervals.len();

    intervals.sort_by_key(|i| i.start);

    let (intervals, gaps) = intervals
        .into_iter()
        .fold(Accumulator::new(sentinel, records * 2 + 1), Accumulator::step)
        .finish();

    tracing::info!(
        records,
        intervals = intervals.len(),
        gaps,
        sentinel,
        "normalized intervals"
    );

    NormalizedTable {
        intervals,
        sentinel: sentinel.to_owned(),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn lookup()
    {
        let table = normalize(
            vec![
                Interval::new(0x41, 0x5A, "Latin"),
                Interval::new(0x370, 0x3FF, "Greek"),
            ],
            "Unknown",
        );

        assert_eq!(table.lookup(0x0).unwrap().label, "Unknown");
        assert_eq!(table.lookup(0x41).unwrap().label, "Latin");
        assert_eq!(table.lookup(0x5B).unwrap().label, "Unknown");
        assert_eq!(table.lookup(0x3FF).unwrap().label, "Greek");
        assert_eq!(table.lookup(MAX_CODE_POINT).unwrap().label, "Unknown");
        assert!(table.lookup(MAX_CODE_POINT + 1).is_none());
    }

    #[test]
    fn overlapping_input_does_not_panic()
    {
        let table = normalize(
            vec![
                Interval::new(0x00, 0x7F, "Basic Latin"),
                Interval::new(0x40, 0x4F, "Overlap"),
            ],
            "unassigned",
        );

        assert_eq!(table.intervals().last().unwrap().end, MAX_CODE_POINT);
    }
}
