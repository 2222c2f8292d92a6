//! Browser adapters for the agenda-core ports.

pub mod llm;
