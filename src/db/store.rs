use crate::db::errors::DResult;
use crate::db::file::{dump_file, load_file};
use crate::db::options::{sanitize_options, Options};
use crate::skiplist::{InsertStatus, SkipList};
use crate::utils::random::Random;
use slog::{debug, info, Logger};
use std::borrow::Borrow;
use std::fmt::Display;
use std::str::FromStr;

pub type Table<K, V> = SkipList<K, V, Random>;

/// A skip list bound to its options: level limit, seed, dump file and logger.
pub struct Store<K, V> {
    table: Table<K, V>,
    options: Options,
    logger: Logger,
}

impl<K, V> Store<K, V>
where
    K: Ord,
{
    pub fn open(raw_options: Options) -> Self {
        let options = sanitize_options(raw_options);
        let logger = options.logger();
        let rnd = match options.seed {
            Some(seed) => Random::new(seed),
            None => Random::from_entropy(),
        };
        debug!(logger, "open store"; "max_level" => options.max_level, "dump_path" => &options.dump_path);
        Store {
            table: SkipList::new(options.max_level, rnd),
            options,
            logger,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn table(&self) -> &Table<K, V> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table<K, V> {
        &mut self.table
    }

    pub fn insert(&mut self, key: K, value: V) -> InsertStatus {
        let status = self.table.insert(key, value);
        debug!(self.logger, "insert"; "status" => ?status, "size" => self.table.size());
        status
    }

    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.table.search(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.table.get(key)
    }

    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.table.delete(key);
        debug!(self.logger, "delete"; "removed" => removed, "size" => self.table.size());
        removed
    }

    pub fn size(&self) -> usize {
        self.table.size()
    }
}

impl<K, V> Store<K, V>
where
    K: Ord + Display + FromStr,
    V: Display + FromStr,
{
    /// Write every entry to `options.dump_path`.
    pub fn dump(&self) -> DResult<usize> {
        let n = dump_file(&self.table, &self.options.dump_path, &self.options.delimiter)?;
        info!(self.logger, "dump finished"; "entries" => n, "path" => &self.options.dump_path);
        Ok(n)
    }

    /// Insert every entry found in `options.dump_path`.
    pub fn load(&mut self) -> DResult<usize> {
        let n = load_file(
            &mut self.table,
            &self.options.dump_path,
            &self.options.delimiter,
            self.options.skip_invalid_records,
            &self.logger,
        )?;
        info!(self.logger, "load finished"; "inserted" => n, "size" => self.table.size(), "path" => &self.options.dump_path);
        Ok(n)
    }
}
