pub mod atomic_write;
pub mod chart_export;
pub mod export_error;
pub mod export_plugin;

pub use chart_export::{chart_labels, export_all, export_chart, export_path};
pub use export_error::ExportError;
pub use export_plugin::{ExportChartEvent, ExportOutcome, ExportPlugin, ExportStatus};
