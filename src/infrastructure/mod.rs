pub mod audio;
pub mod observability;
pub mod text_processing;
