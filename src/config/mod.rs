//! Engine configuration: week layout, grid geometry, timing rules, palette.

mod settings;

pub use settings::{
    Config, GridConfig, PaletteConfig, StartOfWeek, TimingConfig, WeekConfig,
};
