use std::collections::HashMap;

lazy_static! {
    /// исторические названия констант блоков, которые нельзя менять
    static ref BLOCK_OVERRIDES: HashMap<&'static str, &'static str> = HashMap::from([
        ("GREEK_AND_COPTIC", "GREEK"),
        ("CYRILLIC_SUPPLEMENT", "CYRILLIC_SUPPLEMENTARY"),
        (
            "COMBINING_DIACRITICAL_MARKS_FOR_SYMBOLS",
            "COMBINING_MARKS_FOR_SYMBOLS"
        ),
    ]);

    static ref NO_OVERRIDES: HashMap<&'static str, &'static str> = HashMap::new();
}

/// свойство, таблицу диапазонов которого мы составляем
///
/// формат исходных файлов одинаков, различаются только заполнитель пропусков
/// и таблица совместимости названий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind
{
    /// блоки, UCD: Blocks.txt
    Block,
    /// письменности, UCD: Scripts.txt
    Script,
}

impl PropertyKind
{
    /// файл UCD, из которого берутся диапазоны
    pub fn file_name(&self) -> &'static str
    {
        match self {
            Self::Block => "Blocks.txt",
            Self::Script => "Scripts.txt",
        }
    }

    /// значение, которым заполняются не упомянутые в файле диапазоны
    pub fn sentinel_label(&self) -> &'static str
    {
        match self {
            Self::Block => "unassigned",
            Self::Script => "Unknown",
        }
    }

    /// короткое название свойства в PropertyValueAliases.txt
    pub fn alias_property(&self) -> &'static str
    {
        match self {
            Self::Block => "blk",
            Self::Script => "sc",
        }
    }

    /// замена идентификатора на исторически сложившийся, если она есть
    pub fn compatibility_override(&self, identifier: &str) -> Option<&'static str>
    {
        let overrides: &HashMap<&'static str, &'static str> = match self {
            Self::Block => &*BLOCK_OVERRIDES,
            Self::Script => &*NO_OVERRIDES,
        };

        overrides.get(identifier).copied()
    }
}
