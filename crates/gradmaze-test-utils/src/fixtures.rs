//! Reusable observation fixtures.
//!
//! - [`uniform_observation`]: every channel set to one value.
//! - [`observation_with_mean`]: half black, half `2 * mean`, for an exact mean.
//! - [`ramp_observation`]: brightness rising left to right.

use gradmaze_core::{ObsShape, Observation, RGB_CHANNELS};

/// Frame with every channel of every pixel set to `value`.
///
/// # Panics
///
/// Panics if `shape` has a zero dimension.
pub fn uniform_observation(shape: ObsShape, value: u8) -> Observation {
    Observation::filled(shape, value).expect("fixture shape must be non-empty")
}

/// Frame whose mean intensity is exactly `mean`.
///
/// The first half of the buffer is black and the second half is
/// `2 * mean`. Requires an even element count and `mean <= 127`.
///
/// # Panics
///
/// Panics if the element count is odd or `mean > 127`.
pub fn observation_with_mean(shape: ObsShape, mean: u8) -> Observation {
    let len = shape.len();
    assert!(len % 2 == 0, "element count {len} must be even");
    assert!(mean <= 127, "mean {mean} must be at most 127");
    let mut data = vec![0u8; len];
    data[len / 2..].fill(mean * 2);
    Observation::new(shape, data).expect("fixture shape must be non-empty")
}

/// Frame whose columns brighten linearly from 0 (left) to 255 (right).
///
/// # Panics
///
/// Panics if `shape` has a zero dimension.
pub fn ramp_observation(shape: ObsShape) -> Observation {
    let width = shape.width as usize;
    let mut data = Vec::with_capacity(shape.len());
    for _row in 0..shape.height {
        for col in 0..width {
            let v = if width > 1 {
                (col * 255 / (width - 1)) as u8
            } else {
                255
            };
            data.extend_from_slice(&[v; RGB_CHANNELS]);
        }
    }
    Observation::new(shape, data).expect("fixture shape must be non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_fixture_is_exact() {
        let obs = observation_with_mean(ObsShape::new(60, 80), 50);
        assert_eq!(obs.mean_intensity(), 50.0);
    }

    #[test]
    fn ramp_spans_full_range() {
        let obs = ramp_observation(ObsShape::new(2, 4));
        assert_eq!(obs.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(obs.pixel(1, 3), Some([255, 255, 255]));
    }
}
