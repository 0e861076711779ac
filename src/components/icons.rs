//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::EntryKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronRight as ChevronRight, LuFastForward as Speed, LuFileText as FileText,
        LuFolder as Folder, LuGalleryVerticalEnd as Siblings, LuHouse as Home,
        LuImage as FileImage, LuPause as Pause, LuPlay as Play, LuScan as Fullscreen,
        LuVideo as FileVideo, LuVolume2 as Unmuted, LuVolumeX as Muted, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsCollectionPlay as Siblings,
        BsFastForwardFill as Speed, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkText as FileText,
        BsFolderFill as Folder, BsFullscreen as Fullscreen, BsHouseFill as Home,
        BsPauseFill as Pause, BsPlayFill as Play, BsVolumeMuteFill as Muted,
        BsVolumeUpFill as Unmuted, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(PLAY, Play);
themed_icon!(PAUSE, Pause);
themed_icon!(MUTED, Muted);
themed_icon!(UNMUTED, Unmuted);
themed_icon!(SPEED, Speed);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(SIBLINGS, Siblings);
themed_icon!(CLOSE, Close);

/// Icon for a listing entry.
pub fn for_entry(kind: EntryKind) -> Icon {
    match kind {
        EntryKind::Dir => FOLDER,
        EntryKind::Video => FILE_VIDEO,
        EntryKind::Image => FILE_IMAGE,
        EntryKind::Text => FILE_TEXT,
    }
}
