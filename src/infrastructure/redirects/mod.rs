//! Legacy redirect table storage.

mod csv_loader;

pub use csv_loader::{LoadedMappings, MappingLoadError, load_mappings, read_mappings};
