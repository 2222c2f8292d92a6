//! View layer. Every panel renders from an `AppState` snapshot and hands
//! back at most one `ViewCommand`; only the app applies it.

pub mod state;
pub mod forms;
pub mod panels;
pub mod theme;

#[cfg(test)]
mod tests;
