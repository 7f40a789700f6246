use std::result;

quick_error! {
    #[derive(Debug)]
    pub enum DError {
        // Following is for From other errors.
        Io(err: std::io::Error) {
            from()
            cause(err)
            display("Io {}", err)
        }
        // A dump line that cannot be turned back into a key/value pair.
        CorruptedRecord(line: usize, record: String) {
            display("corrupted record at line {}: {:?}", line, record)
        }
        // An entry whose text form would not survive a dump.
        InvalidRecord(record: String, reason: &'static str) {
            display("cannot dump record {:?}: {}", record, reason)
        }
    }
}

pub type DResult<T> = result::Result<T, DError>;
