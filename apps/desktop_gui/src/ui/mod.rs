//! UI layer for the showcase: app shell, panels, images, and theme.

pub mod app;
pub mod images;
pub mod panels;
pub mod theme;

pub use app::ShowcaseApp;
