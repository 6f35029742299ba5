// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color tags for vertices and edges.
//!
//! A color is a semantic label, not display data: the renderer decides which
//! terminal attributes a `Color::Red` vertex or edge gets. An uncolored element
//! carries `None` wherever an `Option<Color>` appears.
//!
//! # Examples
//!
//! ```
//! use hypercube::geometry::Color;
//!
//! let color: Color = "Magenta".parse().unwrap();
//! assert_eq!(color, Color::Magenta);
//! assert_eq!(color.to_string(), "magenta");
//! ```

use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The palette available for annotating a cube.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    EnumCountMacro,
    EnumIter,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Black,
    Magenta,
    Cyan,
}
