use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        row: usize,
        col: usize,
        resolution: Resolution,
    },
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "resolution needs {} bytes but buffer has {}",
                    resolution_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                row,
                col,
                resolution,
            } => {
                write!(
                    f,
                    "pixel at row:{}, col:{} outside of {} image",
                    row, col, resolution
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB bytes, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let resolution_size = resolution_to_buffer_size(resolution);

        if resolution_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, PixelBufferError> {
        if row >= self.resolution.height || col >= self.resolution.width {
            return Err(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                resolution: self.resolution,
            });
        }

        Ok((row * self.resolution.width + col) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, row: usize, col: usize) -> Result<Colour, PixelBufferError> {
        let index = self.index(row, col)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index(row, col)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(Resolution::new(10, 10));

        assert_eq!(buffer.buffer_size(), 300);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_checks_length() {
        let ok = PixelBuffer::from_data(Resolution::new(2, 1), vec![1, 2, 3, 4, 5, 6]);
        let bad = PixelBuffer::from_data(Resolution::new(2, 2), vec![1, 2, 3]);

        assert!(ok.is_ok());
        assert_eq!(
            bad,
            Err(PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 3
            })
        );
    }

    #[test]
    fn test_set_and_read_pixel() {
        let mut buffer = PixelBuffer::new(Resolution::new(3, 2));
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(1, 2, red).unwrap();

        assert_eq!(buffer.pixel(1, 2), Ok(red));
        assert_eq!(&buffer.buffer()[15..18], &[255, 0, 0]);
        assert_eq!(buffer.pixel(0, 0), Ok(Colour::BLACK));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(Resolution::new(3, 2));

        let result = buffer.set_pixel(2, 0, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                row: 2,
                col: 0,
                resolution: Resolution::new(3, 2)
            })
        );
    }
}
