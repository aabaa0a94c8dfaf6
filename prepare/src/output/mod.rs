use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod blocks;
pub mod format;
pub mod scripts;
pub mod stats;
pub mod time_zones;

/// файл с таблицами блоков
pub const BLOCKS_FILE: &str = "blocks.rs.txt";
/// файл с таблицами письменностей
pub const SCRIPTS_FILE: &str = "scripts.rs.txt";
/// файл с короткими идентификаторами часовых поясов
pub const TIME_ZONES_FILE: &str = "time_zones.rs.txt";

/// записать подготовленный текст в каталог с результатами
pub fn write(out_dir: &Path, name: &str, text: &str) -> anyhow::Result<PathBuf>
{
    let path = out_dir.join(name);

    fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(file = %path.display(), bytes = text.len(), "written");

    Ok(path)
}
