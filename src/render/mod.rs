//! Drawing pipeline: pages are recorded as device-space draw ops on a
//! [`Canvas`], then replayed onto a pixmap by the raster backend.

pub mod canvas;
pub mod color;
pub mod grid;
pub mod page;
pub mod raster;
pub mod stroke_order;
pub mod text;

pub use canvas::{Canvas, DrawOp, TextAlign, TextStyle};
pub use grid::{draw_cell, CellPattern};
pub use page::PageRenderer;
pub use raster::{encode_png, page_pixel_size, rasterize, FontStore};
