use skipkv::{InsertStatus, Options, Store};

fn main() {
    let mut opt = Options::new_with_seed(0xdead_beef);
    opt.max_level = 6;
    opt.dump_path = "example_store/dumpFile".to_string();
    let mut store: Store<u32, String> = Store::open(opt);

    for (k, v) in [
        (1, "Remember Red, hope is a good thing."),
        (3, "Maybe the best of things."),
        (7, "And no good thing ever dies."),
        (8, "Get busy living,"),
        (9, "or get busy dying."),
        (19, "Hope is a dangerous thing."),
    ] {
        assert_eq!(store.insert(k, v.to_string()), InsertStatus::Inserted);
    }
    assert_eq!(
        store.insert(19, "Hope can drive a man insane.".to_string()),
        InsertStatus::AlreadyExists
    );
    println!("skip list size: {}", store.size());
    print!("{}", store.table());

    store.dump().unwrap();

    assert!(store.search(&9));
    assert!(!store.search(&18));
    store.delete(&3);
    store.delete(&7);
    println!("skip list size: {}", store.size());
    print!("{}", store.table());

    let mut restored: Store<u32, String> = Store::open(store.options().clone());
    let n = restored.load().unwrap();
    println!("loaded {} entries from {}", n, restored.options().dump_path);
}
