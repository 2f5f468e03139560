pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{ConvertError, ConvertResult};
pub use validation::{
    resolve_font,
    validate_byte_range,
    validate_input_path,
    validate_positive,
};
pub use formats::{InputFormat, format_from_extension};
pub use fs::{
    display_name,
    ensure_dir,
    get_file_size,
    webp_output_path,
};
