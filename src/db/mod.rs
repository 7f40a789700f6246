pub use crate::db::errors::{DError, DResult};
pub use crate::db::file::{dump_file, dump_to, load_file, load_from, parse_record};
pub use crate::db::options::{Options, DEFAULT_DUMP_PATH, MAX_LEVEL_LIMIT};
pub use crate::db::store::{Store, Table};

#[macro_use]
mod errors;
mod file;
mod options;
mod store;
