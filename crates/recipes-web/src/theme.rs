//! Ocean Professional theme tokens
//!
//! Blue and amber accents on white surfaces over a soft gray background,
//! rounded corners and subtle shadows.

pub mod colors {
    pub const PRIMARY: &str = "#2563EB";
    pub const SECONDARY: &str = "#F59E0B";
    pub const ERROR: &str = "#EF4444";
    pub const ERROR_TEXT: &str = "#991B1B";
    pub const BG: &str = "#f9fafb";
    pub const SURFACE: &str = "#ffffff";
    pub const TEXT: &str = "#111827";
    pub const MUTED: &str = "#6B7280";
    pub const BORDER: &str = "#E5E7EB";
    pub const FOCUS: &str = "rgba(37, 99, 235, 0.35)";
}

pub mod radius {
    pub const SM: &str = "8px";
    pub const MD: &str = "12px";
    pub const LG: &str = "16px";
    pub const XL: &str = "20px";
}

pub mod shadow {
    pub const SM: &str = "0 1px 2px rgba(0,0,0,0.04)";
    pub const MD: &str = "0 6px 12px rgba(0,0,0,0.08)";
    pub const LG: &str = "0 12px 24px rgba(0,0,0,0.10)";
}

pub const TRANSITION: &str = "all 200ms ease";

/// Placeholder shown where a recipe has no image
pub const IMAGE_PLACEHOLDER: &str = "linear-gradient(135deg, #2563EB11, #F59E0B11)";
