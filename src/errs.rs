// Copyright (c) Stratalist Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

/// Construction-time contract violations. Once a list exists, every operation
/// either succeeds or is a documented no-op, so this is the crate's only
/// error surface.
#[derive(Error, Debug, PartialEq)]
pub enum ListError {
    #[error("max level must be at least 1, got {0}")]
    InvalidMaxLevel(usize),
    #[error("probability must be within (0, 1), got {0}")]
    InvalidProbability(f64),
}
