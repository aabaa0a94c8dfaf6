/// отступ строк внутри массивов и блоков
pub const INDENT: &str = "    ";

/// выравнивание пробелами: дополнить строку длины `used` до `width`, но не меньше одного пробела
pub fn pad(used: usize, width: usize) -> String
{
    " ".repeat(width.saturating_sub(used).max(1))
}

/// представить набор строк в виде константного массива
pub fn format_array<I>(doc: &str, name: &str, item_type: &str, rows: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut output = String::new();

    if !doc.is_empty() {
        output.push_str(format!("/// {}\n", doc).as_str());
    }

    output.push_str(format!("pub const {}: &[{}] = &[\n", name, item_type).as_str());

    for row in rows {
        output.push_str(INDENT);
        output.push_str(row.as_str());
        output.push('\n');
    }

    output.push_str("];\n");

    output
}
