use railcloud_core::{PointCloud, PointXYZ, PointXYZI};
use railcloud_io::{
    read_las, read_las_bounded, write_las, BoundsMode, LasHeader, RawBounds, ALL_POINTS,
};

fn temp_las() -> tempfile::NamedTempFile {
    tempfile::Builder::new().suffix(".las").tempfile().unwrap()
}

/// A 10 m stretch of track: ground points on a 1 m grid at z = 0 and a
/// catenary wire at z ≈ 6.
fn track_scene() -> PointCloud<PointXYZ> {
    let mut cloud = PointCloud::new();
    for i in 0..10 {
        for j in 0..4 {
            cloud.push(PointXYZ::new(i as f64, j as f64, 0.0));
        }
    }
    for i in 0..20 {
        let x = i as f64 * 0.5;
        cloud.push(PointXYZ::new(x, 1.5, 6.0 - 0.01 * (x - 5.0).powi(2)));
    }
    cloud
}

/// End-to-end: read → select region → mark wire → write → read back
#[test]
fn pipeline_read_filter_classify_write() {
    let header = LasHeader {
        scale: [0.01, 0.01, 0.01],
        offset: [0.0, 0.0, 0.0],
        point_format: 3,
        point_record_length: 34,
    };

    // Step 1: materialize the scene as an unclassified source file
    let source = temp_las();
    let scene: PointCloud<PointXYZI> = track_scene()
        .iter()
        .map(|p| PointXYZI::new(p.x, p.y, p.z, 0.0))
        .collect();
    write_las(source.path(), &header, &scene).unwrap();

    // Step 2: read the first half of the stretch (raw x in [0, 450])
    let bounds = RawBounds::new(0, 450, 0, 300);
    let (region, read_header) = read_las_bounded(source.path(), &bounds, ALL_POINTS).unwrap();
    assert_eq!(read_header, header);
    // 5 columns x 4 rows of ground plus wire samples at x = 0.0..4.5
    assert_eq!(region.len(), 20 + 10);

    // Step 3: anything above 3 m is wire
    let marked: PointCloud<PointXYZI> = region
        .iter()
        .map(|p| PointXYZI::new(p.x, p.y, p.z, if p.z > 3.0 { 1.0 } else { 0.0 }))
        .collect();

    // Step 4: write and read back
    let output = temp_las();
    write_las(output.path(), &read_header, &marked).unwrap();
    let (loaded, _) = read_las(output.path(), ALL_POINTS).unwrap();
    assert_eq!(loaded.len(), marked.len());

    let mut reader = las::Reader::from_path(output.path()).unwrap();
    let wire = reader
        .points()
        .map(|p| p.unwrap())
        .filter(|p| p.classification == las::point::Classification::WireConductor)
        .count();
    assert_eq!(wire, 10);
}

#[test]
fn pipeline_legacy_and_strict_bounds_differ() {
    let header = LasHeader::default();
    let source = temp_las();
    // x grows while y stays small: strict excludes large x, legacy does not
    let cloud: PointCloud<PointXYZI> = (0..10)
        .map(|i| PointXYZI::new(i as f64, 0.01, 0.0, 0.0))
        .collect();
    write_las(source.path(), &header, &cloud).unwrap();

    let strict = RawBounds::new(0, 300, 0, 10);
    let legacy = strict.with_mode(BoundsMode::Legacy);

    let (strict_cloud, _) = read_las_bounded(source.path(), &strict, ALL_POINTS).unwrap();
    let (legacy_cloud, _) = read_las_bounded(source.path(), &legacy, ALL_POINTS).unwrap();
    assert_eq!(strict_cloud.len(), 4);
    assert_eq!(legacy_cloud.len(), 10);
}
