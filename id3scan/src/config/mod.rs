//! Various configuration options to control id3scan

mod scan_options;

pub use scan_options::ScanOptions;
