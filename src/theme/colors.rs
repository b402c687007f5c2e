//! Color constants for the Heartseal palette.
//!
//! Warm paper and rose ink, with gold reserved for the certificate.

// === PAPER (Backgrounds) ===
pub const BLUSH: &str = "#fff1f2";
pub const PAPER: &str = "#fffaf5";
pub const PARCHMENT: &str = "#fdf6e3";

// === ROSE (Actions, Hearts) ===
pub const ROSE: &str = "#e11d48";
pub const ROSE_DEEP: &str = "#9f1239";
pub const ROSE_SOFT: &str = "#fecdd3";
pub const ROSE_GLOW: &str = "rgba(225, 29, 72, 0.25)";

// === GOLD (Certificate, Seal) ===
pub const GOLD: &str = "#b8860b";
pub const GOLD_SOFT: &str = "rgba(184, 134, 11, 0.35)";

// === INK (Text) ===
pub const INK: &str = "#1f2937";
pub const INK_SOFT: &str = "#6b7280";
pub const INK_FAINT: &str = "#9ca3af";

/// Every palette entry paired with its CSS custom property name.
pub const PALETTE: &[(&str, &str)] = &[
    ("--blush", BLUSH),
    ("--paper", PAPER),
    ("--parchment", PARCHMENT),
    ("--rose", ROSE),
    ("--rose-deep", ROSE_DEEP),
    ("--rose-soft", ROSE_SOFT),
    ("--rose-glow", ROSE_GLOW),
    ("--gold", GOLD),
    ("--gold-soft", GOLD_SOFT),
    ("--ink", INK),
    ("--ink-soft", INK_SOFT),
    ("--ink-faint", INK_FAINT),
];
