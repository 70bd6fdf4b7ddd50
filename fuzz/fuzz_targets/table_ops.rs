#![no_main]

use chaintable::HashTable;
use libfuzzer_sys::fuzz_target;

// Each input line is one operation: "i <key> <value>", "g <key>",
// "r <key>", or "z" (resize). The table must stay retrievable and never
// panic regardless of input.
fuzz_target!(|data: &[u8]| {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };

    let mut table = match HashTable::new(2) {
        Ok(table) => table,
        Err(_) => return,
    };
    let mut resizes = 0;

    for line in text.lines() {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("i") => {
                if let (Some(key), Some(value)) = (words.next(), words.next()) {
                    table.insert(key, value);
                    assert_eq!(table.retrieve(key), Some(value));
                }
            }
            Some("g") => {
                if let Some(key) = words.next() {
                    let _ = table.retrieve(key);
                }
            }
            Some("r") => {
                if let Some(key) = words.next() {
                    table.remove(key);
                    assert_eq!(table.retrieve(key), None);
                }
            }
            Some("z") if resizes < 16 => {
                let old_capacity = table.capacity();
                table = table.resize();
                assert_eq!(table.capacity(), old_capacity * 2);
                resizes += 1;
            }
            _ => {}
        }
    }
});
