use std::fmt;
use std::str::FromStr;

use crate::errors::FilemergeError;

/// Output compression codecs understood by the generated scripts.
///
/// Parsing is case-insensitive and only accepts the four short names below;
/// anything else is an [`FilemergeError::UnsupportedCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Gzip,
    Bzip,
    Lzo,
    Snappy,
}

impl Codec {
    /// Fully-qualified codec class consumed by the batch engine.
    pub fn class_name(self) -> &'static str {
        match self {
            Codec::Gzip => "org.apache.hadoop.io.compress.GzipCodec",
            Codec::Bzip => "org.apache.hadoop.io.compress.BZip2Codec",
            Codec::Lzo => "com.hadoop.compression.lzo.LzopCodec",
            Codec::Snappy => "org.apache.hadoop.io.compress.SnappyCodec",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Codec::Gzip => "gzip",
            Codec::Bzip => "bzip",
            Codec::Lzo => "lzo",
            Codec::Snappy => "snappy",
        }
    }
}

impl FromStr for Codec {
    type Err = FilemergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gzip" => Ok(Codec::Gzip),
            "bzip" => Ok(Codec::Bzip),
            "lzo" => Ok(Codec::Lzo),
            "snappy" => Ok(Codec::Snappy),
            _ => Err(FilemergeError::UnsupportedCodec(s.to_string())),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which strategy enumerates the partitions of a run.
///
/// The textual names match the CLI selector flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    ByCalendarDate,
    ByDirectory,
    ByFileList,
    ByTrailingWindow,
    ByFixedLookback,
}

impl SelectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMode::ByCalendarDate => "year",
            SelectionMode::ByDirectory => "directory",
            SelectionMode::ByFileList => "file",
            SelectionMode::ByTrailingWindow => "window",
            SelectionMode::ByFixedLookback => "lookback",
        }
    }
}

impl FromStr for SelectionMode {
    type Err = FilemergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(SelectionMode::ByCalendarDate),
            "directory" => Ok(SelectionMode::ByDirectory),
            "file" => Ok(SelectionMode::ByFileList),
            "window" => Ok(SelectionMode::ByTrailingWindow),
            "lookback" => Ok(SelectionMode::ByFixedLookback),
            _ => Err(FilemergeError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
