pub mod dictionary;
pub mod error;
pub mod language;
pub mod matcher;
pub mod normalize;
pub mod result;
pub mod similarity;
pub mod translate;
pub mod types;

pub use hol_config::engine::EngineConfig;
