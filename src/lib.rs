#![allow(clippy::module_inception)]
#[macro_use]
extern crate quick_error;

pub use crate::db::{
    dump_file, dump_to, load_file, load_from, parse_record, DError, DResult, Options, Store,
    Table, DEFAULT_DUMP_PATH, MAX_LEVEL_LIMIT,
};
pub use crate::skiplist::{InsertStatus, SkipList, SkipListIter, K_MAX_HEIGHT};
pub use crate::utils::random::{Random, RandomGenerator};

mod db;
mod skiplist;
mod utils;

pub fn version_info() -> String {
    let fallback = "Unknown env";
    format!(
        "\nRelease Version:   {}\
         \nGit Commit Hash:   {}\
         \nGit Commit Branch: {}",
        option_env!("SKIPKV_RELEASE").unwrap_or(fallback),
        option_env!("GIT_COMMIT").unwrap_or(fallback),
        option_env!("GIT_BRANCH").unwrap_or(fallback),
    )
}
