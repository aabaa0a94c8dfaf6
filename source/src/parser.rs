use core::fmt;

use crate::interval::{Interval, MAX_CODE_POINT};

/// ошибка разбора строки файла свойств
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError
{
    /// номер строки в файле (с единицы), если известен
    pub line_number: Option<usize>,
    /// строка целиком
    pub line: String,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind
{
    /// некорректное шестнадцатеричное число (текст поля)
    InvalidHex(String),
    /// нет поля со значением свойства
    MissingLabel,
    /// значение за пределами U+10FFFF
    CodePointOutOfRange(u32),
    /// начало диапазона больше конца
    InvertedRange { start: u32, end: u32 },
}

impl ParseError
{
    fn new(line: &str, kind: ParseErrorKind) -> Self
    {
        Self {
            line_number: None,
            line: line.to_owned(),
            kind,
        }
    }

    /// указать номер строки
    pub fn at_line(mut self, line_number: usize) -> Self
    {
        self.line_number = Some(line_number);
        self
    }
}

impl fmt::Display for ParseErrorKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::InvalidHex(text) => write!(f, "invalid hex code point: {text:?}"),
            Self::MissingLabel => f.write_str("missing property value"),
            Self::CodePointOutOfRange(code) => {
                write!(f, "code point 0x{code:X} is above U+{MAX_CODE_POINT:X}")
            }
            Self::InvertedRange { start, end } => {
                write!(f, "range start 0x{start:X} is greater than end 0x{end:X}")
            }
        }
    }
}

impl fmt::Display for ParseError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.line_number {
            Some(number) => write!(f, "line {}: {}: {:?}", number, self.kind, self.line),
            None => write!(f, "{}: {:?}", self.kind, self.line),
        }
    }
}

impl std::error::Error for ParseError {}

/// пропускаемая строка: пустая или комментарий
#[inline]
pub fn is_skipped(line: &str) -> bool
{
    line.trim().is_empty() || line.starts_with('#')
}

/// разбор записи вида `HHHH[..HHHH]; Label[ # comment]`
///
/// пустые строки и комментарии сюда попадать не должны, см. [`parse_records`]
pub fn parse_record(line: &str) -> Result<Interval, ParseError>
{
    // комментарий в конце строки нас не интересует
    let record = match line.split_once('#') {
        Some((record, _)) => record,
        None => line,
    };

    let (codes, label) = match record.split_once(';') {
        Some((codes, label)) => (codes, label.trim()),
        None => return Err(ParseError::new(line, ParseErrorKind::MissingLabel)),
    };

    if label.is_empty() {
        return Err(ParseError::new(line, ParseErrorKind::MissingLabel));
    }

    let (start, end) = match codes.split_once("..") {
        Some((start, end)) => (parse_code(line, start)?, parse_code(line, end)?),
        None => {
            let code = parse_code(line, codes)?;
            (code, code)
        }
    };

    if start > end {
        return Err(ParseError::new(
            line,
            ParseErrorKind::InvertedRange { start, end },
        ));
    }

    Ok(Interval {
        start,
        end,
        label: label.to_owned(),
    })
}

/// разбор всех записей файла; первая же ошибка прерывает разбор
pub fn parse_records(text: &str) -> Result<Vec<Interval>, ParseError>
{
    let mut intervals = vec![];

    for (i, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }

        let interval = parse_record(line).map_err(|e| e.at_line(i + 1))?;

        intervals.push(interval);
    }

    tracing::debug!(records = intervals.len(), "parsed range records");

    Ok(intervals)
}

/// кодпоинт в шестнадцатеричной записи, пробелы вокруг допустимы
///
/// только цифры: from_str_radix пропускает знак `+`
fn parse_code(line: &str, hex: &str) -> Result<u32, ParseError>
{
    let hex = hex.trim();
    let invalid = || ParseError::new(line, ParseErrorKind::InvalidHex(hex.to_owned()));

    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let code = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

    if code > MAX_CODE_POINT {
        return Err(ParseError::new(
            line,
            ParseErrorKind::CodePointOutOfRange(code),
        ));
    }

    Ok(code)
}
