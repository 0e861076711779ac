//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`browser`] - Directory listing, breadcrumbs and page layout
//! - [`player`] - Video player with auto-hiding controls
//! - [`hooks`] - Listing API hooks with stale-response protection
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod hooks;
pub mod icons;
pub mod player;
pub mod router;

pub use router::AppRouter;
