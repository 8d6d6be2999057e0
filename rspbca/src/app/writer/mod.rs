mod output_file;
mod writer_ops;

pub use output_file::OutputFile;
pub use writer_ops::{create_dirs, create_writer, write_records, write_rows};
