pub mod image_io;

pub use image_io::{encode_png, load_photo, load_photo_from_memory, load_template, save_png};
