//! Pipeline configuration.

mod settings;

pub use settings::PipelineSettings;
