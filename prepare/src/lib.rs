use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use unicode_tables_source::{compile, parse_property_value_aliases, short_time_zone_ids, PropertyKind};

use crate::config::{load_known_identifiers, Config};

pub mod config;
pub mod logging;
pub mod output;

/// подготовить все таблицы и записать их в каталог с результатами
///
/// файлы пишутся только после того, как собраны все таблицы
pub fn run(config: &Config) -> anyhow::Result<Vec<PathBuf>>
{
    let mut tables = vec![
        (output::BLOCKS_FILE, blocks(config)?),
        (output::SCRIPTS_FILE, scripts(config)?),
    ];

    if let Some(path) = &config.timezones {
        tables.push((output::TIME_ZONES_FILE, time_zones(path)?));
    }

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;

    tables
        .iter()
        .map(|(name, text)| output::write(&config.out_dir, name, text))
        .collect()
}

/// блоки: Blocks.txt
pub fn blocks(config: &Config) -> anyhow::Result<String>
{
    let kind = PropertyKind::Block;
    let path = config.ucd_file(kind.file_name());

    let text = read(&path)?;
    let known = load_known_identifiers(config.known_blocks.as_deref())?;

    let compiled = compile(&text, kind, &known)
        .with_context(|| format!("failed to compile {}", path.display()))?;

    output::stats::print(&compiled);

    Ok(output::blocks::render(&compiled, &config.since))
}

/// письменности: Scripts.txt и псевдонимы из PropertyValueAliases.txt
pub fn scripts(config: &Config) -> anyhow::Result<String>
{
    let kind = PropertyKind::Script;
    let path = config.ucd_file(kind.file_name());

    let text = read(&path)?;
    let known = load_known_identifiers(config.known_scripts.as_deref())?;

    let compiled = compile(&text, kind, &known)
        .with_context(|| format!("failed to compile {}", path.display()))?;

    output::stats::print(&compiled);

    let aliases_path = config.ucd_file("PropertyValueAliases.txt");

    let aliases = match aliases_path.exists() {
        true => parse_property_value_aliases(&read(&aliases_path)?, kind.alias_property()),
        false => {
            tracing::warn!(file = %aliases_path.display(), "no property value aliases, alias table will be empty");
            vec![]
        }
    };

    Ok(output::scripts::render(&compiled, &aliases, &config.since))
}

/// короткие идентификаторы часовых поясов: CLDR timezone.xml
pub fn time_zones(path: &Path) -> anyhow::Result<String>
{
    let text = read(path)?;
    let ids = short_time_zone_ids(&text);

    Ok(output::time_zones::render(&ids))
}

fn read(path: &Path) -> anyhow::Result<String>
{
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
