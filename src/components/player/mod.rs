//! Video player UI.
//!
//! [`VideoPage`] mounts one `<video>` element and a [`PlayerController`]
//! driving it. The page stays mounted across auto-advance; only the source
//! and the address change.
//!
//! [`PlayerController`]: crate::core::PlayerController

mod controls;
mod handle;
mod sibling_panel;
mod speed_menu;
mod surface;
mod video;

pub use video::VideoPage;
