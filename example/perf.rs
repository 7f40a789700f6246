use log::info;
use skipkv::{InsertStatus, Random, RandomGenerator, SkipList};
use std::time::Instant;

const MAX_LEVEL: usize = 18;
const TEST_COUNT: usize = 100_000;

// RUST_LOG=info cargo run --release --example perf
fn main() {
    env_logger::init();
    info!("{}", skipkv::version_info());

    let mut list: SkipList<u32, String, Random> =
        SkipList::new(MAX_LEVEL, Random::new(0xdead_beef));
    let mut keys = Random::new(301);

    let start = Instant::now();
    let mut inserted = 0;
    for _ in 0..TEST_COUNT {
        let key = keys.next() % TEST_COUNT as u32;
        if list.insert(key, "a".to_string()) == InsertStatus::Inserted {
            inserted += 1;
        }
    }
    info!(
        "insert {} keys ({} new) elapsed: {:?}, level: {}",
        TEST_COUNT,
        inserted,
        start.elapsed(),
        list.level()
    );

    let start = Instant::now();
    let mut found = 0;
    for _ in 0..TEST_COUNT {
        if list.search(&(keys.next() % TEST_COUNT as u32)) {
            found += 1;
        }
    }
    info!(
        "search {} keys ({} found) elapsed: {:?}",
        TEST_COUNT,
        found,
        start.elapsed()
    );

    let start = Instant::now();
    let mut deleted = 0;
    for _ in 0..TEST_COUNT {
        if list.delete(&(keys.next() % TEST_COUNT as u32)) {
            deleted += 1;
        }
    }
    info!(
        "delete {} keys ({} removed) elapsed: {:?}, size: {}",
        TEST_COUNT,
        deleted,
        start.elapsed(),
        list.size()
    );
}
