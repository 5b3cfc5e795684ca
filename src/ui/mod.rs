//! UI rendering module for the shopfront client
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod help_overlay;
pub mod product_detail;
pub mod storefront;

pub use help_overlay::render as render_help_overlay;
pub use product_detail::render as render_product_detail;
pub use storefront::render as render_storefront;
