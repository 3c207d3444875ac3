pub mod aggregate;
pub mod exec;
pub mod output;
pub mod render;

pub use aggregate::{aggregate, level, start_date, Grid, COLUMNS, DEFAULT_MAX_LEVEL, ROWS};
pub use exec::exec;
pub use output::{calendar_output, output_calendar, output_json};
pub use render::{Border, ColorMode, Frame, Padding, Palette, Renderer, Theme};
