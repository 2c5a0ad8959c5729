//! Interactive terminal app for scour
pub mod app;
pub mod editor;
pub mod spanlist;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;

#[cfg(test)]
pub mod tests;
