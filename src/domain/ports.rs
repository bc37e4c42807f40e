use crate::utils::error::Result;

/// Backing storage for the record book. The whole book is read and written as one document.
pub trait RecordStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, contents: &str) -> Result<()>;
    /// Human-readable location, used in log lines.
    fn location(&self) -> String;
}

pub trait ConfigProvider {
    fn record_book_path(&self) -> &str;
    fn log_filter(&self) -> Option<&str>;
}
