// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where [`crate::GridViewport::reset_to_fit`] places the fitted grid.
///
/// Both modes choose the same scale; they differ only in the offset target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Align the grid's top-left corner with the panel origin.
    ///
    /// Offset targets are reset to zero.
    #[default]
    AlignMin,
    /// Center the fitted grid within the panel.
    ///
    /// Along the axis that limits the fit the grid fills the panel exactly;
    /// along the other axis the leftover space is split evenly.
    Center,
}
