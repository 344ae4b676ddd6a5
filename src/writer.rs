//! Serialization of an index, term by term in ascending order.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use rustc_serialize::json::{Json, ToJson};

use crate::config::Config;
use crate::index::Index;
use crate::{Error, Result};

/// The layout of a written index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// One `<list> term` ... `</list>` block per term, with the term's documents and
    /// counts wrapped a fixed number of documents to a line.
    Text,
    /// A single JSON object mapping each term to its ranked postings.
    Json,
}

impl Default for Format {
    fn default() -> Format {
        Format::Text
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Format> {
        match &*s.to_lowercase() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(Error::InvalidArgument("format must be one of: text, json")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Format::Text => fmt.write_str("text"),
            Format::Json => fmt.write_str("json"),
        }
    }
}

/// Writes `index` to `out` in the format chosen by `config`.
pub fn write_index<W: Write>(index: &Index, config: &Config, out: &mut W) -> io::Result<()> {
    match config.format {
        Format::Text => write_text(index, config.per_line, out),
        Format::Json => write_json(index, out),
    }
}

fn write_text<W: Write>(index: &Index, per_line: usize, out: &mut W) -> io::Result<()> {
    for entry in index.entries() {
        writeln!(out, "<list> {}", entry.term())?;
        for line in &entry.documents().iter().chunks(per_line.max(1)) {
            writeln!(out, "{}", line.format(" "))?;
        }
        writeln!(out, "</list>")?;
    }
    Ok(())
}

fn write_json<W: Write>(index: &Index, out: &mut W) -> io::Result<()> {
    let object = index.entries()
                      .map(|entry| (entry.term().to_string(), entry.documents().to_json()))
                      .collect();
    writeln!(out, "{}", Json::Object(object).pretty())
}

/// Fails with `AlreadyExists` if `path` exists and may not be overwritten.
pub fn check_output(path: &Path, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(Error::AlreadyExists(path.to_path_buf()));
    }
    Ok(())
}

/// Writes `index` to a file at `path`, honoring the overwrite setting of `config`.
pub fn write_to_path(index: &Index, config: &Config, path: &Path) -> Result<()> {
    check_output(path, config.overwrite)?;
    let file = File::create(path).map_err(|err| Error::io(path, err))?;
    let mut out = BufWriter::new(file);
    write_index(index, config, &mut out)
        .and_then(|()| out.flush())
        .map_err(|err| Error::io(path, err))
}
