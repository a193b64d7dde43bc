#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Every decoded record must satisfy the entity's own invariants
        if let Ok(records) = librarian::infrastructure::repositories::decode_store(content) {
            for (id, record) in records {
                assert_eq!(id, record.id());
                assert!(!record.book().title().trim().is_empty());
            }
        }
    }
});
