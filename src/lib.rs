#![forbid(unsafe_code)]
//! LAS/LAZ point clouds for cable detection pipelines.
//!
//! Re-exports the point cloud container from `railcloud-core` and the file
//! adapter from `railcloud-io`.

pub use railcloud_core::{Aabb, HasIntensity, HasPosition, PointCloud, PointXYZ, PointXYZI};
pub use railcloud_io::{
    classify, read_las, read_las_bounded, read_las_header, write_las, BoundsMode, Error,
    LasHeader, PointClass, RawBounds, Result, ALL_POINTS,
};
