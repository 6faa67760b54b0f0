//! Bundled retro fonts and font styling.
//!
//! Display surfaces that can select fonts (GUI toolkits, web views) use
//! [`FontStyle`] to pick the bundled bitmap-style family. Registration only
//! records which families have been announced to the host; loading font
//! files is left to the host.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::error::{Result, RetroTextError};

/// Point size used when none is given.
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

// =============================================================================
// RetroFont
// =============================================================================

/// Fonts bundled with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RetroFont {
    #[default]
    KongText,
}

impl RetroFont {
    pub const ALL: [RetroFont; 1] = [RetroFont::KongText];

    /// Family name the host registers the font under.
    pub const fn family_name(self) -> &'static str {
        match self {
            RetroFont::KongText => "KongText",
        }
    }

    /// File name of the bundled TrueType font.
    pub const fn file_name(self) -> &'static str {
        match self {
            RetroFont::KongText => "KongText.ttf",
        }
    }
}

// =============================================================================
// FontStyle
// =============================================================================

/// A font family at a given point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub font: RetroFont,
    pub size: f32,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            font: RetroFont::default(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontStyle {
    /// Style using `font` at the default size.
    pub fn new(font: RetroFont) -> Self {
        Self {
            font,
            size: DEFAULT_FONT_SIZE,
        }
    }

    /// Return a copy at a different size.
    pub fn with_size(self, size: f32) -> Result<Self> {
        retro_font(self.font, size)
    }
}

/// Style text with a bundled font at `size` points.
pub fn retro_font(font: RetroFont, size: f32) -> Result<FontStyle> {
    if !size.is_finite() || size <= 0.0 {
        return Err(RetroTextError::InvalidFontSize(size));
    }
    Ok(FontStyle { font, size })
}

// =============================================================================
// Registration
// =============================================================================

thread_local! {
    static REGISTERED_FONTS: RefCell<BTreeSet<RetroFont>> = const { RefCell::new(BTreeSet::new()) };
}

/// Register every bundled font. Safe to call more than once.
pub fn register_fonts() {
    REGISTERED_FONTS.with(|fonts| {
        let mut fonts = fonts.borrow_mut();
        for font in RetroFont::ALL {
            if fonts.insert(font) {
                log::debug!("registered font {} ({})", font.family_name(), font.file_name());
            }
        }
    });
}

pub fn is_font_registered(font: RetroFont) -> bool {
    REGISTERED_FONTS.with(|fonts| fonts.borrow().contains(&font))
}

/// Registered fonts in declaration order.
pub fn registered_fonts() -> Vec<RetroFont> {
    REGISTERED_FONTS.with(|fonts| fonts.borrow().iter().copied().collect())
}

/// Forget all registrations (for testing).
pub fn reset_font_registry() {
    REGISTERED_FONTS.with(|fonts| fonts.borrow_mut().clear());
}
