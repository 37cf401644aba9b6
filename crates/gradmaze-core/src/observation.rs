//! First-person RGB observations.

use std::fmt;

use crate::error::EngineError;

/// Number of colour channels in every observation.
pub const RGB_CHANNELS: usize = 3;

/// Image dimensions of an observation (`height × width × 3`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObsShape {
    /// Rows of pixels.
    pub height: u32,
    /// Columns of pixels.
    pub width: u32,
}

impl ObsShape {
    /// Create a shape.
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Number of `u8` elements in a buffer of this shape.
    pub fn len(&self) -> usize {
        self.height as usize * self.width as usize * RGB_CHANNELS
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Shape as `[height, width, channels]`.
    pub fn dims(&self) -> [usize; 3] {
        [self.height as usize, self.width as usize, RGB_CHANNELS]
    }
}

impl fmt::Display for ObsShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, RGB_CHANNELS)
    }
}

/// A rendered RGB frame, row-major, channels interleaved.
///
/// Never empty: construction rejects zero dimensions and buffers whose
/// length does not match the shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    shape: ObsShape,
    data: Vec<u8>,
}

impl Observation {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RenderFailed`] if the shape is empty or the
    /// buffer length is not `height * width * 3`.
    pub fn new(shape: ObsShape, data: Vec<u8>) -> Result<Self, EngineError> {
        if shape.is_empty() {
            return Err(EngineError::RenderFailed {
                reason: format!("observation shape {shape} is empty"),
            });
        }
        if data.len() != shape.len() {
            return Err(EngineError::RenderFailed {
                reason: format!(
                    "buffer of {} bytes does not match shape {shape} ({} bytes)",
                    data.len(),
                    shape.len()
                ),
            });
        }
        Ok(Self { shape, data })
    }

    /// A frame with every channel of every pixel set to `value`.
    pub fn filled(shape: ObsShape, value: u8) -> Result<Self, EngineError> {
        Self::new(shape, vec![value; shape.len()])
    }

    /// Image dimensions.
    pub fn shape(&self) -> ObsShape {
        self.shape
    }

    /// Raw pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable pixel buffer. The length is fixed by the shape.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the observation and return its pixel buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGB value of the pixel at (`row`, `col`), or `None` if out of bounds.
    pub fn pixel(&self, row: u32, col: u32) -> Option<[u8; RGB_CHANNELS]> {
        if row >= self.shape.height || col >= self.shape.width {
            return None;
        }
        let base = (row as usize * self.shape.width as usize + col as usize) * RGB_CHANNELS;
        Some([self.data[base], self.data[base + 1], self.data[base + 2]])
    }

    /// Arithmetic mean over every channel value, at the native `0..=255` scale.
    pub fn mean_intensity(&self) -> f64 {
        let sum: u64 = self.data.iter().map(|&v| u64::from(v)).sum();
        sum as f64 / self.data.len() as f64
    }
}
