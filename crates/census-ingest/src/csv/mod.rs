//! CSV reading utilities.

mod reader;

pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, decode_text, read_dataset,
    read_dataset_from_str,
};
