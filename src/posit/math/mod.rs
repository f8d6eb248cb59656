use super::*;

/// Square root.
mod sqrt;
