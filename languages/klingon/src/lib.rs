pub mod dictionary;
pub mod processor;

pub use dictionary::KlingonDictionary;
pub use processor::KlingonProcessor;
