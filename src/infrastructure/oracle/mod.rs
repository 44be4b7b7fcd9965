// Existence oracle adapters

pub mod http_existence_oracle;

pub use http_existence_oracle::HttpExistenceOracle;
