//! Viewport width classes and the responsive visible-count mapping.

use serde::Deserialize;

/// Discrete bucket of viewport width controlling how many items fit per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Narrower than the `small` breakpoint.
    Mobile,
    /// `small` up to `medium`.
    Small,
    /// `medium` up to `large`.
    Medium,
    /// `large` up to `extra_large`.
    Large,
    /// At or beyond `extra_large`.
    ExtraLarge,
}

impl ViewportClass {
    /// Number of items shown per page for this class. Always at least 1.
    pub fn visible_count(self) -> usize {
        match self {
            ViewportClass::Mobile | ViewportClass::Small => 2,
            ViewportClass::Medium => 3,
            ViewportClass::Large => 4,
            ViewportClass::ExtraLarge => 6,
        }
    }

    /// Short label for status display.
    pub fn label(self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Small => "sm",
            ViewportClass::Medium => "md",
            ViewportClass::Large => "lg",
            ViewportClass::ExtraLarge => "xl",
        }
    }
}

/// Lower width bounds (in pixels) of each non-mobile class.
///
/// A width below `small` is [`ViewportClass::Mobile`]. Defaults follow the
/// usual 640/768/1024/1280 breakpoint scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Breakpoints {
    /// Start of [`ViewportClass::Small`].
    pub small: u32,
    /// Start of [`ViewportClass::Medium`].
    pub medium: u32,
    /// Start of [`ViewportClass::Large`].
    pub large: u32,
    /// Start of [`ViewportClass::ExtraLarge`].
    pub extra_large: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 640,
            medium: 768,
            large: 1024,
            extra_large: 1280,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width. Pure function of `width_px`.
    pub fn classify(&self, width_px: u32) -> ViewportClass {
        if width_px >= self.extra_large {
            ViewportClass::ExtraLarge
        } else if width_px >= self.large {
            ViewportClass::Large
        } else if width_px >= self.medium {
            ViewportClass::Medium
        } else if width_px >= self.small {
            ViewportClass::Small
        } else {
            ViewportClass::Mobile
        }
    }

    /// Items per page at `width_px`.
    pub fn visible_count(&self, width_px: u32) -> usize {
        self.classify(width_px).visible_count()
    }

    /// Whether the thresholds are strictly ascending.
    pub fn is_ascending(&self) -> bool {
        self.small < self.medium && self.medium < self.large && self.large < self.extra_large
    }
}
