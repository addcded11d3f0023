pub mod converter;
pub mod image_loader;
pub mod resizer;
pub mod workbook;

pub use converter::{ConvertReport, Converter};
pub use image_loader::{load_image, to_pixels};
pub use resizer::{resize_to_width, target_size};
pub use workbook::WorkbookWriter;
