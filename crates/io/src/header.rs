use las::point::Format;
use las::{Builder, Transform, Vector};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const AXES: [char; 3] = ['x', 'y', 'z'];

/// The part of a LAS header needed to interpret and produce point records.
///
/// `scale` and `offset` define the affine map between the integer
/// coordinates stored in a record and real-world coordinates:
/// `real = raw * scale + offset`. `point_format` and `point_record_length`
/// describe the record layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LasHeader {
    pub scale: [f64; 3],
    pub offset: [f64; 3],
    pub point_format: u8,
    pub point_record_length: u16,
}

impl Default for LasHeader {
    fn default() -> Self {
        Self {
            scale: [0.01; 3],
            offset: [0.0; 3],
            point_format: 0,
            point_record_length: 20,
        }
    }
}

impl LasHeader {
    /// Copies the transform and record layout out of an opened file's header.
    pub fn from_las(header: &las::Header) -> Result<Self> {
        let transforms = header.transforms();
        let format = header.point_format();
        Ok(Self {
            scale: [transforms.x.scale, transforms.y.scale, transforms.z.scale],
            offset: [transforms.x.offset, transforms.y.offset, transforms.z.offset],
            point_format: format.to_u8()?,
            point_record_length: format.len(),
        })
    }

    pub fn to_real(&self, raw: [i32; 3]) -> [f64; 3] {
        [
            f64::from(raw[0]) * self.scale[0] + self.offset[0],
            f64::from(raw[1]) * self.scale[1] + self.offset[1],
            f64::from(raw[2]) * self.scale[2] + self.offset[2],
        ]
    }

    /// Quantizes real coordinates to the nearest stored integer.
    pub fn to_raw(&self, real: [f64; 3]) -> Result<[i32; 3]> {
        let mut raw = [0i32; 3];
        for axis in 0..3 {
            let value = ((real[axis] - self.offset[axis]) / self.scale[axis]).round();
            if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
                return Err(Error::CoordinateOutOfRange {
                    axis: AXES[axis],
                    value: real[axis],
                });
            }
            raw[axis] = value as i32;
        }
        Ok(raw)
    }

    /// Snaps real coordinates onto the grid this header can represent.
    pub fn quantize(&self, real: [f64; 3]) -> Result<[f64; 3]> {
        Ok(self.to_real(self.to_raw(real)?))
    }

    /// The record format described by this header, including any extra bytes
    /// implied by a record length longer than the format's base length.
    pub fn format(&self) -> Result<Format> {
        let mut format = Format::new(self.point_format)?;
        let base_len = format.len();
        if self.point_record_length < base_len {
            return Err(Error::InvalidHeader(format!(
                "record length {} is shorter than the {} bytes of point format {}",
                self.point_record_length, base_len, self.point_format
            )));
        }
        format.extra_bytes = self.point_record_length - base_len;
        Ok(format)
    }

    /// Builds the header template a writer is opened with.
    ///
    /// Legacy formats are written as LAS 1.2, extended formats as LAS 1.4.
    pub fn to_las_header(&self) -> Result<las::Header> {
        if self.scale.iter().any(|s| !s.is_normal()) {
            return Err(Error::InvalidHeader(format!(
                "scale factors must be non-zero and finite, got {:?}",
                self.scale
            )));
        }
        let format = self.format()?;
        if format.has_waveform {
            return Err(Error::InvalidHeader(format!(
                "writing waveform point format {} is not supported",
                self.point_format
            )));
        }

        let version = if format.is_extended { (1, 4) } else { (1, 2) };
        let mut builder = Builder::from(version);
        builder.point_format = format;
        builder.transforms = Vector {
            x: Transform {
                scale: self.scale[0],
                offset: self.offset[0],
            },
            y: Transform {
                scale: self.scale[1],
                offset: self.offset[1],
            },
            z: Transform {
                scale: self.scale[2],
                offset: self.offset[2],
            },
        };
        builder
            .into_header()
            .map_err(|e| Error::InvalidHeader(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn utm_header() -> LasHeader {
        LasHeader {
            scale: [0.001, 0.001, 0.01],
            offset: [650_000.0, 5_270_000.0, 100.0],
            point_format: 3,
            point_record_length: 34,
        }
    }

    #[test]
    fn to_real_applies_scale_then_offset() {
        let header = utm_header();
        let real = header.to_real([1500, -2000, 25]);
        assert!((real[0] - 650_001.5).abs() < 1e-9);
        assert!((real[1] - 5_269_998.0).abs() < 1e-9);
        assert!((real[2] - 100.25).abs() < 1e-9);
    }

    #[test]
    fn to_raw_inverts_to_real() {
        let header = utm_header();
        let raw = [123_456, -98_765, 4321];
        assert_eq!(header.to_raw(header.to_real(raw)).unwrap(), raw);
    }

    #[test]
    fn to_raw_rounds_to_nearest() {
        let header = LasHeader::default();
        assert_eq!(header.to_raw([0.014, 0.016, -0.016]).unwrap(), [1, 2, -2]);
    }

    #[test]
    fn to_raw_rejects_overflow() {
        let header = LasHeader::default();
        let err = header.to_raw([0.0, 1e12, 0.0]).unwrap_err();
        assert!(matches!(err, Error::CoordinateOutOfRange { axis: 'y', .. }));
    }

    #[test]
    fn to_raw_rejects_nan() {
        let header = LasHeader::default();
        assert!(header.to_raw([f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn format_carries_extra_bytes() {
        let header = LasHeader {
            point_record_length: 40,
            ..utm_header()
        };
        let format = header.format().unwrap();
        assert_eq!(format.extra_bytes, 6);
        assert_eq!(format.len(), 40);
    }

    #[test]
    fn short_record_length_is_invalid() {
        let header = LasHeader {
            point_record_length: 10,
            ..utm_header()
        };
        assert!(matches!(header.format(), Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn unknown_point_format_is_rejected() {
        let header = LasHeader {
            point_format: 42,
            ..utm_header()
        };
        assert!(header.to_las_header().is_err());
    }

    #[test]
    fn zero_scale_is_rejected() {
        let header = LasHeader {
            scale: [0.01, 0.0, 0.01],
            ..utm_header()
        };
        assert!(matches!(header.to_las_header(), Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn las_header_roundtrips_fields() {
        let header = utm_header();
        let las_header = header.to_las_header().unwrap();
        assert_eq!(LasHeader::from_las(&las_header).unwrap(), header);
    }

    #[test]
    fn extended_formats_get_las_1_4() {
        let header = LasHeader {
            point_format: 7,
            point_record_length: 36,
            ..utm_header()
        };
        let las_header = header.to_las_header().unwrap();
        assert_eq!(las_header.version(), las::Version::new(1, 4));
        assert_eq!(LasHeader::from_las(&las_header).unwrap(), header);
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "scale: [0.01, 0.01, 0.01]\noffset: [10.0, 20.0, 0.0]\npoint_format: 2\npoint_record_length: 26\n";
        let header: LasHeader = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(header.offset, [10.0, 20.0, 0.0]);
        assert_eq!(header.point_format, 2);
    }

    proptest! {
        #[test]
        fn quantize_stays_within_half_a_scale_unit(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            z in -1000.0f64..1000.0,
        ) {
            let header = LasHeader::default();
            let q = header.quantize([x, y, z]).unwrap();
            for (axis, v) in [x, y, z].iter().enumerate() {
                prop_assert!((q[axis] - v).abs() <= header.scale[axis] * 0.5 + 1e-9);
            }
        }
    }
}
