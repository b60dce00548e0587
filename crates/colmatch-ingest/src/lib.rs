pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod store;

pub use csv_table::{dataset_name_for, read_csv_dataset, read_csv_dataset_from_reader};
pub use discovery::{expand_sources, list_csv_files, load_sources};
pub use error::{IngestError, Result};
pub use store::DatasetStore;
