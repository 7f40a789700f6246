use crate::skiplist::K_MAX_HEIGHT;
use slog::{o, Discard, Logger};

/// Levels above this are never useful: 2^32 entries would not fit in memory anyway.
pub const MAX_LEVEL_LIMIT: usize = 32;

/// Where `Store::dump` writes and `Store::load` reads by default.
pub const DEFAULT_DUMP_PATH: &str = "store/dumpFile";

#[derive(Clone)]
pub struct Options {
    /// Upper bound of node levels.
    /// Roughly log2 of the number of entries you expect to hold.
    /// Default: `K_MAX_HEIGHT` (12)
    pub max_level: usize,
    /// Seed of the level generator. Fixing it makes the shape of the list
    /// reproducible, which is handy in tests.
    /// Default: None, seeded from the OS.
    pub seed: Option<u64>,
    /// Dump file path.
    /// Default: `store/dumpFile`
    pub dump_path: String,
    /// Separates key and value on each dump line.
    /// Default: ":"
    pub delimiter: String,
    /// If true, lines of a dump file that cannot be decoded are logged and
    /// skipped. If false, loading stops at the first one with `CorruptedRecord`.
    /// Default: true
    pub skip_invalid_records: bool,
    /// Default: None, replaced by a discarding logger on open.
    pub info_log: Option<Logger>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_level: K_MAX_HEIGHT,
            seed: None,
            dump_path: DEFAULT_DUMP_PATH.to_string(),
            delimiter: ":".to_string(),
            skip_invalid_records: true,
            info_log: None,
        }
    }
}

impl Options {
    pub fn new_with_seed(seed: u64) -> Self {
        Options {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// The configured logger, or one that drops every record.
    pub fn logger(&self) -> Logger {
        match self.info_log {
            Some(ref l) => l.clone(),
            None => Logger::root(Discard, o!()),
        }
    }
}

fn clip_to_range<T>(v: &mut T, min: T, max: T)
where
    T: PartialOrd,
{
    if *v > max {
        *v = max;
    } else if *v < min {
        *v = min;
    }
}

pub(crate) fn sanitize_options(src_opt: Options) -> Options {
    let mut opt = src_opt;
    clip_to_range(&mut opt.max_level, 1, MAX_LEVEL_LIMIT);
    if opt.delimiter.is_empty() {
        opt.delimiter = ":".to_string();
    }
    if opt.info_log.is_none() {
        opt.info_log = Some(opt.logger());
    }
    opt
}
