pub mod image_store;
pub mod label_extractor;
pub mod label_parser;
pub mod preprocess;

pub use image_store::NamedImage;
pub use label_extractor::{parse_filename, resolve_pixel, GroupLabels, LabelExtractor};
pub use label_parser::{LabelParser, LabelReport};
pub use preprocess::{PreprocessReport, Preprocessor};
