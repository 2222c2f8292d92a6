pub mod gemini;

pub use gemini::GeminiBriefingProvider;
