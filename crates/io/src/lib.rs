#![forbid(unsafe_code)]
//! Reading and writing LAS/LAZ files as [`railcloud_core::PointCloud`]s.
//!
//! Every call opens its own reader or writer and releases it before
//! returning, including on error.

pub mod bounds;
pub mod classify;
pub mod error;
pub mod header;
pub mod las;

pub use bounds::{BoundsMode, RawBounds};
pub use classify::{classify, PointClass, GRAY_COLOR_VALUE, MAX_COLOR_VALUE};
pub use error::{Error, Result};
pub use header::LasHeader;
pub use self::las::{read_las, read_las_bounded, read_las_header, write_las, ALL_POINTS};
