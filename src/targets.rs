//! The fixed table of icons produced from the source logo.

use crate::error::IconError;
use std::collections::HashSet;

/// One output icon: exact pixel dimensions plus the file it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub width: u32,
    pub height: u32,
    pub filename: &'static str,
}

impl IconTarget {
    pub const fn square(size: u32, filename: &'static str) -> Self {
        Self {
            width: size,
            height: size,
            filename,
        }
    }

    /// `WIDTHxHEIGHT`, as printed in progress lines.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Sizes required by installable web app manifests, processed in order.
pub const PWA_ICONS: &[IconTarget] = &[
    IconTarget::square(192, "icon-192.png"),
    IconTarget::square(512, "icon-512.png"),
];

/// Reject tables that could never produce a coherent set of files.
pub fn validate(targets: &[IconTarget]) -> Result<(), IconError> {
    if targets.is_empty() {
        return Err(IconError::InvalidTarget("no targets configured".into()));
    }

    let mut seen = HashSet::new();
    for target in targets {
        if target.width == 0 || target.height == 0 {
            return Err(IconError::InvalidTarget(format!(
                "{} has a zero dimension ({})",
                target.filename,
                target.dimensions()
            )));
        }
        if !seen.insert(target.filename) {
            return Err(IconError::InvalidTarget(format!(
                "{} is listed more than once",
                target.filename
            )));
        }
    }

    Ok(())
}
