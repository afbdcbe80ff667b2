//! Layout engine: unit conversion, shared page geometry, pagination, and the
//! interactive overlay mapper.

pub mod geometry;
pub mod overlay;
pub mod paginate;
pub mod units;

pub use geometry::{PageGeometry, Rect};
pub use overlay::{hit_regions, HitRegion};
pub use paginate::paginate;
pub use units::{mm_to_px, page_height_px, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PAGE_WIDTH_PX};
