mod document;
mod raster;
mod words;

pub use document::{MupdfDocument, MupdfLoader};
