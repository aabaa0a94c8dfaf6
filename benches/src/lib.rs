use std::fmt::Write;

/// фрагменты UCD из тестов
pub const BLOCKS: &str = include_str!("./../../source/tests/data/Blocks.txt");
pub const SCRIPTS: &str = include_str!("./../../source/tests/data/Scripts.txt");

/// синтетический файл в формате Scripts.txt: `records` записей, сгруппированных по письменностям,
/// с пропусками между диапазонами, как в настоящем файле
pub fn synthetic_scripts(records: u32, scripts: u32) -> String
{
    let mut output = String::new();

    for script in 0 .. scripts {
        let _ = writeln!(output, "# ================================================\n");

        for record in (script .. records).step_by(scripts as usize) {
            let start = record * 0x20;
            let end = start + 0x1A;

            let _ = writeln!(
                output,
                "{:04X}..{:04X}    ; Script_{} # Lo  [27] SYNTHETIC",
                start, end, script
            );
        }
    }

    output
}
