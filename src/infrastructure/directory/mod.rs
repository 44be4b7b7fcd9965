// Upstream directory adapters

pub mod http_directory_source;

pub use http_directory_source::HttpDirectorySource;
