use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::render::color::parse_hex_rgb;

#[derive(Parser, Debug)]
#[command(name = "copybook")]
#[command(
    author,
    version,
    about = "Generate printable Chinese handwriting practice sheets as PNG pages"
)]
pub struct Args {
    /// Input text file containing the characters to practice
    #[arg(required_unless_present = "text")]
    pub input: Option<PathBuf>,

    /// Characters to practice, given directly instead of an input file
    #[arg(short, long)]
    pub text: Option<String>,

    /// Output directory for rendered pages (page-1.png, page-2.png, ...)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Grid style for the practice cells
    #[arg(short = 'g', long, value_enum, default_value = "tian")]
    pub grid: GridStyle,

    /// Grid cell size in mm
    #[arg(long, default_value_t = 17.0)]
    pub grid_size: f32,

    /// Row spacing in mm
    #[arg(long, default_value_t = 2.0)]
    pub row_spacing: f32,

    /// Page margins in mm: a single value or "top,right,bottom,left"
    #[arg(long, default_value = "10")]
    pub margins: String,

    /// Hide the pinyin row above each practice row
    #[arg(long)]
    pub no_pinyin: bool,

    /// Hide the stroke-order row above each practice row
    #[arg(long)]
    pub no_stroke: bool,

    /// Render the head cell in the trace color instead of full ink
    #[arg(long)]
    pub no_highlight_first: bool,

    /// Insert one blank practice row after each character's row
    #[arg(long)]
    pub empty_row: bool,

    /// Leave an empty cell between repeated trace cells
    #[arg(long)]
    pub empty_col: bool,

    /// Hide the page-number footer
    #[arg(long)]
    pub no_page_numbers: bool,

    /// Number of trace cells after the head cell
    #[arg(long, default_value_t = 2)]
    pub trace_count: usize,

    /// Trace color as #rrggbb
    #[arg(long, default_value = "#97a3b6")]
    pub trace_color: String,

    /// Grid line color as #rrggbb
    #[arg(long, default_value = "#677489")]
    pub line_color: String,

    /// Font family for the practice glyphs
    #[arg(long, default_value = "楷体")]
    pub font_family: String,

    /// Font weight for the practice glyphs
    #[arg(long, value_enum, default_value = "normal")]
    pub font_weight: FontWeight,

    /// Glyph size as a percentage of the cell width (0-100)
    #[arg(long, default_value_t = 75.0)]
    pub font_size: f32,

    /// Glyph baseline shift as a percentage of the cell height (-100 to 100)
    #[arg(long, default_value_t = 0.0)]
    pub vertical_offset: f32,

    /// Register a font file, FAMILY=PATH (repeatable)
    #[arg(long = "font", value_name = "FAMILY=PATH")]
    pub fonts: Vec<String>,

    /// Directory of hanzi-writer stroke data files (one <char>.json per character)
    #[arg(long)]
    pub strokes_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Practice cell grid style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum GridStyle {
    /// 田字格: one horizontal and one vertical center guideline
    #[default]
    Tian,
    /// 米字格: tian plus both diagonals
    Mi,
    /// 回宫格: a centered inset rectangle
    Hui,
    /// Border only, no internal guidelines
    None,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Parse a margin spec: either "10" (all four sides) or "10,8,10,8"
/// as top,right,bottom,left in mm.
pub fn parse_margins(spec: &str) -> Result<[f32; 4], ConfigError> {
    let parts: Vec<f32> = spec
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| ConfigError::InvalidMargins(spec.to_string()))?;

    match parts.as_slice() {
        [all] => Ok([*all; 4]),
        [top, right, bottom, left] => Ok([*top, *right, *bottom, *left]),
        _ => Err(ConfigError::InvalidMargins(spec.to_string())),
    }
}

/// Parse a `#rrggbb` color spec into an RGB triple.
pub fn parse_color(spec: &str) -> Result<(f32, f32, f32), ConfigError> {
    parse_hex_rgb(spec).ok_or_else(|| ConfigError::InvalidColor(spec.to_string()))
}

/// Parse a `FAMILY=PATH` font registration spec.
pub fn parse_font_spec(spec: &str) -> Result<(String, PathBuf), ConfigError> {
    match spec.split_once('=') {
        Some((family, path)) if !family.is_empty() && !path.is_empty() => {
            Ok((family.to_string(), PathBuf::from(path)))
        }
        _ => Err(ConfigError::InvalidFontSpec(spec.to_string())),
    }
}
