#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(id) = input.parse::<librarian::BookId>() {
            // Display output parses back to the same id
            assert_eq!(id.to_string().parse::<librarian::BookId>().ok(), Some(id));
        }
    }
});
