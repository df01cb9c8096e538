use std::path::Path;

use log::debug;
use railcloud_core::{HasIntensity, HasPosition, PointCloud, PointXYZ};

use crate::bounds::RawBounds;
use crate::classify::classify;
use crate::error::{Error, Result};
use crate::header::LasHeader;

/// Passed as `max_points` to read every point in the file.
pub const ALL_POINTS: u64 = u64::MAX;

/// Reads the transform and record layout of a LAS/LAZ file.
pub fn read_las_header(path: impl AsRef<Path>) -> Result<LasHeader> {
    let (_reader, header) = open_reader_and_header(path.as_ref())?;
    Ok(header)
}

/// Reads the first `min(point count, max_points)` points in file order.
pub fn read_las(
    path: impl AsRef<Path>,
    max_points: u64,
) -> Result<(PointCloud<PointXYZ>, LasHeader)> {
    let (mut reader, header) = open_reader_and_header(path.as_ref())?;

    let total = reader.header().number_of_points();
    let size = total.min(max_points);
    debug!("Number of points: {}", total);
    debug!("Number of points to read: {}", size);

    ensure_records_fit(path.as_ref(), &reader, &header, size)?;
    let mut cloud = usize::try_from(size)
        .ok()
        .and_then(|len| PointCloud::try_filled(len).ok())
        .ok_or(Error::Allocation { count: size })?;

    debug!("Started reading input");
    let mut read = 0u64;
    for (index, point_result) in reader.points().take(size as usize).enumerate() {
        let point = point_result.map_err(|source| Error::MalformedRecord {
            index: index as u64,
            source,
        })?;
        // The LAS reader has already applied this file's scale and offset.
        cloud[index] = PointXYZ::new(point.x, point.y, point.z);
        read += 1;
    }
    if read < size {
        return Err(Error::UnexpectedEof {
            expected: size,
            read,
        });
    }
    debug!("Finished reading input");

    Ok((cloud, header))
}

/// Reads points whose stored X/Y fall inside `bounds`.
///
/// Only the first `min(point count, max_points)` records are considered;
/// records past the cap are never read, whether or not they would match.
pub fn read_las_bounded(
    path: impl AsRef<Path>,
    bounds: &RawBounds,
    max_points: u64,
) -> Result<(PointCloud<PointXYZ>, LasHeader)> {
    let (mut reader, header) = open_reader_and_header(path.as_ref())?;

    let total = reader.header().number_of_points();
    let size = total.min(max_points);
    debug!("Number of points: {}", total);
    debug!("Number of points to read: {}", size);

    let mut cloud = PointCloud::new();

    debug!("Started reading input");
    let mut read = 0u64;
    for (index, point_result) in reader.points().take(size as usize).enumerate() {
        let point = point_result.map_err(|source| Error::MalformedRecord {
            index: index as u64,
            source,
        })?;
        read += 1;

        let real = [point.x, point.y, point.z];
        let raw = header.to_raw(real)?;
        if bounds.contains(raw[0], raw[1]) {
            cloud.push(PointXYZ::new(real[0], real[1], real[2]));
        }
    }
    if read < size {
        return Err(Error::UnexpectedEof {
            expected: size,
            read,
        });
    }
    debug!(
        "Finished reading input, {} of {} points inside bounds",
        cloud.len(),
        size
    );

    Ok((cloud, header))
}

/// Writes `cloud` to `path`, classifying and coloring each point by intensity.
///
/// `header` is the template for the new file; its scale and offset are used
/// to quantize every coordinate. Bounds and point counts in the written
/// header are accumulated from the points themselves. Intensity is not
/// stored. Color is only written when the point format has RGB fields.
///
/// A `.laz` extension produces a compressed file.
pub fn write_las<T: HasPosition + HasIntensity>(
    path: impl AsRef<Path>,
    header: &LasHeader,
    cloud: &PointCloud<T>,
) -> Result<()> {
    let path = path.as_ref();
    let las_header = header.to_las_header()?;
    let format = *las_header.point_format();

    debug!("Opening LAS writer for {}", path.display());
    let mut writer =
        las::Writer::from_path(path, las_header).map_err(|source| Error::open(path, source))?;

    let mut record = blank_record(&format);

    debug!("Started writing output");
    for point in cloud {
        let raw = header.to_raw(point.position())?;
        let [x, y, z] = header.to_real(raw);
        record.x = x;
        record.y = y;
        record.z = z;

        let (class, color) = classify(point.intensity());
        record.classification = class.into();
        if format.has_color {
            record.color = Some(color);
        }

        writer.write_point(record.clone()).map_err(Error::Write)?;
    }
    writer.close().map_err(Error::Write)?;
    debug!("Finished writing output, {} points", cloud.len());

    Ok(())
}

/// Opens a reader and copies the fields of [`LasHeader`] out of it.
///
/// The reader is released when the returned handle is dropped.
fn open_reader_and_header(path: &Path) -> Result<(las::Reader, LasHeader)> {
    debug!("Opening LAS reader for {}", path.display());
    let reader = las::Reader::from_path(path).map_err(|source| Error::open(path, source))?;
    let header = LasHeader::from_las(reader.header())?;
    Ok((reader, header))
}

/// Fails when an uncompressed file is too short to hold `count` records.
///
/// Compressed files are not checked: their length does not bound the number
/// of records they decode to.
fn ensure_records_fit(
    path: &Path,
    reader: &las::Reader,
    header: &LasHeader,
    count: u64,
) -> Result<()> {
    let compressed = reader.header().point_format().is_compressed
        || path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("laz"));
    if compressed {
        return Ok(());
    }
    let file_len = std::fs::metadata(path)?.len();
    let available = file_len / u64::from(header.point_record_length.max(1));
    if count > available {
        return Err(Error::PointCountMismatch {
            claimed: count,
            available,
        });
    }
    Ok(())
}

/// A point carrying exactly the optional fields `format` requires.
fn blank_record(format: &las::point::Format) -> las::Point {
    las::Point {
        gps_time: format.has_gps_time.then_some(0.0),
        color: format.has_color.then_some(crate::classify::GRAY),
        nir: format.has_nir.then_some(0),
        extra_bytes: vec![0; usize::from(format.extra_bytes)],
        ..Default::default()
    }
}
