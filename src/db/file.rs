use crate::db::errors::{DError, DResult};
use crate::skiplist::{InsertStatus, SkipList};
use crate::utils::random::RandomGenerator;
use slog::{debug, warn, Logger};
use std::fmt::Display;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

fn has_line_break(s: &str) -> bool {
    s.contains(|c: char| c == '\n' || c == '\r')
}

/// Check that `key{delimiter}value` reads back as the same pair.
fn check_record(key: &str, value: &str, delimiter: &str) -> DResult<()> {
    let reason = if key.is_empty() {
        "empty key"
    } else if value.is_empty() {
        "empty value"
    } else if key.contains(delimiter) {
        "key contains the delimiter"
    } else if has_line_break(key) {
        "key contains a line break"
    } else if has_line_break(value) {
        "value contains a line break"
    } else {
        return Ok(());
    };
    Err(DError::InvalidRecord(
        format!("{}{}{}", key, delimiter, value),
        reason,
    ))
}

/// Dump format, one entry per line in ascending key order:
/// {key}{delimiter}{value}\n
/// Keys must not contain the delimiter, values may. Neither side may be
/// empty or contain a line break, such entries fail with `InvalidRecord`.
pub fn dump_to<K, V, R, W>(list: &SkipList<K, V, R>, w: &mut W, delimiter: &str) -> DResult<usize>
where
    K: Ord + Display,
    V: Display,
    R: RandomGenerator,
    W: Write,
{
    let mut written = 0;
    for (k, v) in list.iter() {
        let (key, value) = (k.to_string(), v.to_string());
        check_record(&key, &value, delimiter)?;
        writeln!(w, "{}{}{}", key, delimiter, value)?;
        written += 1;
    }
    w.flush()?;
    Ok(written)
}

/// Split a dump line at the first delimiter.
/// Returns `None` if the delimiter is missing or either side is empty.
pub fn parse_record<'a>(line: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let pos = line.find(delimiter)?;
    let key = &line[..pos];
    let value = &line[pos + delimiter.len()..];
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn decode_record<K: FromStr, V: FromStr>(line: &str, delimiter: &str) -> Option<(K, V)> {
    let (k, v) = parse_record(line, delimiter)?;
    Some((k.parse().ok()?, v.parse().ok()?))
}

/// Feed every decodable line of `reader` through `SkipList::insert`.
/// Blank lines are ignored. Keys already present keep their value.
/// Returns how many entries were actually inserted.
pub fn load_from<K, V, R, B>(
    list: &mut SkipList<K, V, R>,
    reader: B,
    delimiter: &str,
    skip_invalid: bool,
    logger: &Logger,
) -> DResult<usize>
where
    K: Ord + FromStr,
    V: FromStr,
    R: RandomGenerator,
    B: BufRead,
{
    let mut inserted = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        match decode_record::<K, V>(line, delimiter) {
            Some((k, v)) => match list.insert(k, v) {
                InsertStatus::Inserted => inserted += 1,
                InsertStatus::AlreadyExists => {
                    debug!(logger, "duplicate key ignored"; "line" => i + 1);
                }
            },
            None if skip_invalid => {
                warn!(logger, "skip invalid record"; "line" => i + 1, "record" => line);
            }
            None => return Err(DError::CorruptedRecord(i + 1, line.to_string())),
        }
    }
    Ok(inserted)
}

pub fn dump_file<K, V, R, P>(list: &SkipList<K, V, R>, path: P, delimiter: &str) -> DResult<usize>
where
    K: Ord + Display,
    V: Display,
    R: RandomGenerator,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let mut w = BufWriter::new(fs::File::create(path)?);
    dump_to(list, &mut w, delimiter)
}

pub fn load_file<K, V, R, P>(
    list: &mut SkipList<K, V, R>,
    path: P,
    delimiter: &str,
    skip_invalid: bool,
    logger: &Logger,
) -> DResult<usize>
where
    K: Ord + FromStr,
    V: FromStr,
    R: RandomGenerator,
    P: AsRef<Path>,
{
    let f = fs::File::open(path.as_ref())?;
    load_from(list, BufReader::new(f), delimiter, skip_invalid, logger)
}
