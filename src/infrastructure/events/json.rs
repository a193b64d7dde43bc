//! JSON Event Dispatcher
//!
//! Writes book events as NDJSON, one object per line.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::BookRecord;
use crate::domain::ports::{BookEvent, EventDispatcher};
use crate::domain::value_objects::BookState;

/// Event dispatcher that outputs NDJSON events to a writer (stdout by default)
pub struct JsonEventDispatcher {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventDispatcher {
    /// Create a new JSON dispatcher writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON dispatcher writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Flat JSON view of a record, shared by every event line
pub fn record_json(record: &BookRecord) -> serde_json::Value {
    let mut value = serde_json::json!({
        "book_id": record.id().to_string(),
        "title": record.book().title(),
        "isbn": record.book().isbn(),
    });
    match record.state() {
        BookState::Available => {
            value["state"] = "available".into();
        }
        BookState::Borrowed { by, on } => {
            value["state"] = "borrowed".into();
            value["borrowed_by"] = by.as_str().into();
            value["borrowed_on"] = on.to_rfc3339().into();
        }
    }
    value
}

impl EventDispatcher for JsonEventDispatcher {
    fn dispatch(&self, event: BookEvent) {
        let json = match &event {
            BookEvent::BookAdded { id, book_record } => {
                serde_json::json!({
                    "event": event.name(),
                    "event_id": id.to_string(),
                    "record": record_json(book_record),
                })
            }

            BookEvent::BookBorrowed {
                id,
                book_record,
                borrower,
            } => {
                serde_json::json!({
                    "event": event.name(),
                    "event_id": id.to_string(),
                    "record": record_json(book_record),
                    "borrower": borrower.as_str(),
                })
            }

            BookEvent::BookReturned { id, book_record } => {
                serde_json::json!({
                    "event": event.name(),
                    "event_id": id.to_string(),
                    "record": record_json(book_record),
                })
            }
        };

        self.write_event(json);
    }
}
