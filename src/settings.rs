//! Typed view of a resolved configuration for the conversion logic

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::options::OptionValue;
use crate::resolve::ResolvedConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("option '{0}' is missing from the resolved configuration")]
    Missing(&'static str),

    #[error("option '{name}' has unexpected value '{value}'")]
    Unexpected { name: &'static str, value: String },
}

/// How posts are grouped into dated folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFolders {
    Year,
    YearMonth,
    None,
}

impl FromStr for DateFolders {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(DateFolders::Year),
            "year-month" => Ok(DateFolders::YearMonth),
            "none" => Ok(DateFolders::None),
            other => Err(other.to_string()),
        }
    }
}

/// Which images get downloaded alongside the posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaveImages {
    Attached,
    Scraped,
    All,
    None,
}

impl FromStr for SaveImages {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attached" => Ok(SaveImages::Attached),
            "scraped" => Ok(SaveImages::Scraped),
            "all" => Ok(SaveImages::All),
            "none" => Ok(SaveImages::None),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSettings {
    pub input: PathBuf,
    pub post_folders: bool,
    pub prefix_date: bool,
    pub date_folders: DateFolders,
    pub save_images: SaveImages,
}

impl TryFrom<&ResolvedConfig> for ExportSettings {
    type Error = SettingsError;

    fn try_from(config: &ResolvedConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            input: path(config, "input")?,
            post_folders: flag(config, "post-folders")?,
            prefix_date: flag(config, "prefix-date")?,
            date_folders: parsed(config, "date-folders")?,
            save_images: parsed(config, "save-images")?,
        })
    }
}

fn value<'c>(
    config: &'c ResolvedConfig,
    name: &'static str,
) -> Result<&'c OptionValue, SettingsError> {
    config.get(name).ok_or(SettingsError::Missing(name))
}

fn unexpected(name: &'static str, value: &OptionValue) -> SettingsError {
    SettingsError::Unexpected {
        name,
        value: value.to_string(),
    }
}

fn flag(config: &ResolvedConfig, name: &'static str) -> Result<bool, SettingsError> {
    let v = value(config, name)?;
    v.as_bool().ok_or_else(|| unexpected(name, v))
}

fn path(config: &ResolvedConfig, name: &'static str) -> Result<PathBuf, SettingsError> {
    let v = value(config, name)?;
    v.as_path().cloned().ok_or_else(|| unexpected(name, v))
}

fn parsed<T: FromStr>(config: &ResolvedConfig, name: &'static str) -> Result<T, SettingsError> {
    let v = value(config, name)?;
    v.as_text()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| unexpected(name, v))
}
