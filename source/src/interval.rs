/// последний кодпоинт Unicode
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// непрерывный диапазон кодпоинтов с общим значением свойства
/// границы включительные: start ..= end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval
{
    /// первый кодпоинт диапазона
    pub start: u32,
    /// последний кодпоинт диапазона
    pub end: u32,
    /// значение свойства в том виде, в каком оно записано в UCD (например, "Greek and Coptic")
    pub label: String,
}

impl Interval
{
    pub fn new(start: u32, end: u32, label: &str) -> Self
    {
        Self {
            start,
            end,
            label: label.to_owned(),
        }
    }

    /// содержит ли диапазон кодпоинт?
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        (self.start ..= self.end).contains(&code)
    }

    /// диапазон из одного кодпоинта?
    #[inline]
    pub fn is_single(&self) -> bool
    {
        self.start == self.end
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn len(&self) -> u32
    {
        self.end - self.start + 1
    }

    /// диапазон в формате UCD: 0041..005A или 0041
    pub fn range_string(&self) -> String
    {
        match self.is_single() {
            true => to_hex_string(self.start),
            false => format!("{}..{}", to_hex_string(self.start), to_hex_string(self.end)),
        }
    }
}

/// кодпоинт в шестнадцатеричном виде, как в файлах UCD:
/// не меньше 4 цифр, для дополнительных плоскостей - 5 или 6
#[inline]
pub fn to_hex_string(code: u32) -> String
{
    format!("{:04X}", code)
}
