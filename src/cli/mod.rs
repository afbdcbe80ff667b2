pub mod args;

pub use args::{parse_color, parse_font_spec, parse_margins, Args, FontWeight, GridStyle};
