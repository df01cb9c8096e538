use railcloud::{
    read_las, read_las_bounded, write_las, LasHeader, PointCloud, PointXYZI, RawBounds, ALL_POINTS,
};

fn main() -> railcloud::Result<()> {
    // A synthetic span: 200 ground points and a wire 6 m above them
    let n = 200;
    let mut cloud = PointCloud::with_capacity(2 * n);
    for i in 0..n {
        let x = i as f64 * 0.05;
        cloud.push(PointXYZI::new(x, (i % 7) as f64 * 0.3, 0.0, 0.0));
        cloud.push(PointXYZI::new(x, 1.0, 6.0, 0.8));
    }
    println!("Synthetic cloud: {} points", cloud.len());

    let header = LasHeader {
        point_format: 2,
        point_record_length: 26,
        ..LasHeader::default()
    };
    let path = std::env::temp_dir().join("railcloud_roundtrip.las");
    write_las(&path, &header, &cloud)?;
    println!("Wrote {}", path.display());

    let (all, read_header) = read_las(&path, ALL_POINTS)?;
    println!("Read back {} points, scale {:?}", all.len(), read_header.scale);

    // Raw units are centimetres with the default scale
    let bounds = RawBounds::new(0, 500, 0, 200);
    let (region, _) = read_las_bounded(&path, &bounds, ALL_POINTS)?;
    let aabb = region.aabb();
    println!(
        "Bounded read kept {} points: min={:?}, max={:?}",
        region.len(),
        aabb.min,
        aabb.max
    );

    let _ = std::fs::remove_file(&path);
    Ok(())
}
