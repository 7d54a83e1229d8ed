mod convert;
mod table;


pub use convert::{ConvertError, SyllableMapper};
