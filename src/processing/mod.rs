pub mod libvips;

pub use self::libvips::Converter;
