use core::fmt;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// каталог для результатов по умолчанию
pub const DEFAULT_OUT_DIR: &str = "./out";
/// версия, указываемая в документации новых констант, если не задана
pub const DEFAULT_SINCE: &str = "XX";

pub const USAGE: &str = "\
usage: prepare <ucd-dir> [--out <dir>] [--since <version>]
               [--known-blocks <file>] [--known-scripts <file>]
               [--timezones <timezone.xml>]";

/// параметры запуска
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config
{
    /// каталог UCD: Blocks.txt, Scripts.txt, PropertyValueAliases.txt
    pub ucd_dir: PathBuf,
    /// каталог для результатов
    pub out_dir: PathBuf,
    /// версия для документации новых констант
    pub since: String,
    /// уже объявленные константы блоков, по одной в строке
    pub known_blocks: Option<PathBuf>,
    /// уже объявленные варианты письменностей, по одному в строке
    pub known_scripts: Option<PathBuf>,
    /// CLDR bcp47/timezone.xml
    pub timezones: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError
{
    /// не указан каталог UCD
    MissingUcdDir,
    /// у параметра нет значения
    MissingValue(String),
    /// неизвестный параметр
    UnknownArgument(String),
}

impl fmt::Display for ConfigError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::MissingUcdDir => f.write_str("missing UCD directory"),
            Self::MissingValue(flag) => write!(f, "missing value for {flag}"),
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config
{
    /// разбор аргументов командной строки (без имени программы)
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut ucd_dir = None;
        let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);
        let mut since = DEFAULT_SINCE.to_owned();
        let mut known_blocks = None;
        let mut known_scripts = None;
        let mut timezones = None;

        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| args.next().ok_or(ConfigError::MissingValue(flag.to_owned()));

            match arg.as_str() {
                "--out" => out_dir = PathBuf::from(value("--out")?),
                "--since" => since = value("--since")?,
                "--known-blocks" => known_blocks = Some(PathBuf::from(value("--known-blocks")?)),
                "--known-scripts" => known_scripts = Some(PathBuf::from(value("--known-scripts")?)),
                "--timezones" => timezones = Some(PathBuf::from(value("--timezones")?)),
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownArgument(flag.to_owned()))
                }
                _ if ucd_dir.is_none() => ucd_dir = Some(PathBuf::from(arg)),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(Self {
            ucd_dir: ucd_dir.ok_or(ConfigError::MissingUcdDir)?,
            out_dir,
            since,
            known_blocks,
            known_scripts,
            timezones,
        })
    }

    /// путь к файлу UCD
    pub fn ucd_file(&self, name: &str) -> PathBuf
    {
        self.ucd_dir.join(name)
    }
}

/// список уже объявленных идентификаторов; без файла - пустой
pub fn load_known_identifiers(path: Option<&Path>) -> anyhow::Result<HashSet<String>>
{
    let path = match path {
        Some(path) => path,
        None => return Ok(HashSet::new()),
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read known identifiers from {}", path.display()))?;

    let known: HashSet<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect();

    tracing::debug!(file = %path.display(), count = known.len(), "loaded known identifiers");

    Ok(known)
}
