//! Pixel → absolute-coordinate normalisation.
//!
//! Absolute mouse records do not carry pixels.  They carry a position in a
//! fixed 0..=65535 range that the OS maps back onto whichever display area
//! the record targets: the primary monitor, or the bounding box of all
//! monitors when [`MouseFlags::VIRTUAL_DESK`](crate::record::MouseFlags::VIRTUAL_DESK)
//! is set.
//!
//! The last pixel of each axis maps to 65535, so the divisor is `extent - 1`.
//! A display narrower than two pixels would divide by zero; that is reported
//! as [`NormalizeError::DegenerateDisplay`] and treated by callers as a broken
//! environment rather than bad user input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the absolute coordinate range.
pub const ABSOLUTE_MAX: i32 = 65_535;

/// Which display area absolute coordinates are relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenSpace {
    /// The primary monitor; its top-left pixel is (0, 0).
    #[default]
    Primary,
    /// The bounding rectangle of every attached monitor.  Its origin can be
    /// negative when a monitor sits left of or above the primary one.
    VirtualDesktop,
}

/// Pixel rectangle of a [`ScreenSpace`] as reported by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: i32,
    pub height: i32,
}

impl DisplayGeometry {
    /// Geometry of a display whose top-left pixel is (0, 0).
    pub const fn sized(width: i32, height: i32) -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error(
        "display geometry {width}x{height} is degenerate; both extents must be at least 2 pixels"
    )]
    DegenerateDisplay { width: i32, height: i32 },
}

/// Maps a pixel position inside `geometry` onto the 0..=65535 absolute range,
/// rounding to the nearest unit.
///
/// Positions outside the rectangle are not clamped; the OS clamps them.
/// Results beyond the `i32` range saturate.
///
/// # Errors
///
/// Returns [`NormalizeError::DegenerateDisplay`] if either extent is below 2.
pub fn normalize(
    x: i32,
    y: i32,
    geometry: &DisplayGeometry,
) -> Result<(i32, i32), NormalizeError> {
    if geometry.width < 2 || geometry.height < 2 {
        return Err(NormalizeError::DegenerateDisplay {
            width: geometry.width,
            height: geometry.height,
        });
    }
    Ok((
        scale_axis(f64::from(x) - f64::from(geometry.origin_x), geometry.width),
        scale_axis(f64::from(y) - f64::from(geometry.origin_y), geometry.height),
    ))
}

fn scale_axis(offset: f64, extent: i32) -> i32 {
    let scaled = offset * f64::from(ABSOLUTE_MAX) / f64::from(extent - 1);
    // `as` saturates at the i32 bounds.
    scaled.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HD: DisplayGeometry = DisplayGeometry::sized(1920, 1080);

    #[test]
    fn test_origin_maps_to_zero() {
        assert_eq!(normalize(0, 0, &FULL_HD), Ok((0, 0)));
    }

    #[test]
    fn test_last_pixel_maps_to_max() {
        assert_eq!(normalize(1919, 1079, &FULL_HD), Ok((ABSOLUTE_MAX, ABSOLUTE_MAX)));
    }

    #[test]
    fn test_centre_rounds_to_nearest() {
        // 960 * 65535 / 1919 = 32784.58, 540 * 65535 / 1079 = 32797.87
        assert_eq!(normalize(960, 540, &FULL_HD), Ok((32_785, 32_798)));
    }

    #[test]
    fn test_virtual_desktop_origin_is_subtracted() {
        // Arrange – a second 1920x1080 monitor to the left of the primary.
        let geometry = DisplayGeometry {
            origin_x: -1920,
            origin_y: 0,
            width: 3840,
            height: 1080,
        };

        // Act
        let left_edge = normalize(-1920, 0, &geometry).unwrap();
        let right_edge = normalize(1919, 1079, &geometry).unwrap();

        // Assert
        assert_eq!(left_edge, (0, 0));
        assert_eq!(right_edge, (ABSOLUTE_MAX, ABSOLUTE_MAX));
    }

    #[test]
    fn test_offset_beyond_i32_range_saturates() {
        // Arrange
        let left_of_primary = DisplayGeometry {
            origin_x: -1920,
            origin_y: 0,
            width: 3840,
            height: 1080,
        };
        let right_of_primary = DisplayGeometry {
            origin_x: 1920,
            origin_y: 100,
            width: 3840,
            height: 1080,
        };

        // Act
        let far_right = normalize(i32::MAX, 0, &left_of_primary);
        let far_left = normalize(i32::MIN, i32::MIN, &right_of_primary);

        // Assert
        assert_eq!(far_right, Ok((i32::MAX, 0)));
        assert_eq!(far_left, Ok((i32::MIN, i32::MIN)));
    }

    #[test]
    fn test_degenerate_display_is_rejected() {
        for (w, h) in [(1, 1080), (1920, 1), (0, 0), (-5, 100)] {
            assert_eq!(
                normalize(0, 0, &DisplayGeometry::sized(w, h)),
                Err(NormalizeError::DegenerateDisplay { width: w, height: h })
            );
        }
    }

    #[test]
    fn test_two_pixel_display_is_accepted() {
        assert_eq!(
            normalize(1, 1, &DisplayGeometry::sized(2, 2)),
            Ok((ABSOLUTE_MAX, ABSOLUTE_MAX))
        );
    }
}
