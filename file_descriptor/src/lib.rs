pub mod file_kind;
pub mod file_size;
pub mod selected_file;
