//! Strip hardware seam
//!
//! The renderer is generic over [`StripDriver`]. [`SmartLedsStrip`] adapts
//! any `smart_leds` writer (e.g. an RMT-backed WS2812 adapter) to it.

use core::fmt::Debug;

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;

/// Abstract LED strip
///
/// Implement this trait to support different hardware platforms.
/// Pixel writes are buffered until [`flush`](Self::flush).
pub trait StripDriver {
    type Error: Debug;

    /// Number of addressable pixels
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buffer a pixel color; out of range indices are ignored
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Push buffered pixels to the strip
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// [`StripDriver`] over a `smart_leds` writer with an `N` pixel buffer
pub struct SmartLedsStrip<W, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
}

impl<W, const N: usize> SmartLedsStrip<W, N> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }

    /// Colors that the next flush will send
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> StripDriver for SmartLedsStrip<W, N>
where
    W: SmartLedsWrite,
    W::Error: Debug,
    Rgb: Into<W::Color>,
{
    type Error = W::Error;

    fn len(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.write(self.pixels.iter().copied())
    }
}

/// Exclusive ownership of the strip that turns it off when released
///
/// [`release`](Self::release) runs at most once, either explicitly or when
/// the guard is dropped, including during unwinding.
pub struct StripGuard<D: StripDriver> {
    driver: D,
    off: Rgb,
    released: bool,
}

impl<D: StripDriver> StripGuard<D> {
    pub const fn new(driver: D, off: Rgb) -> Self {
        Self {
            driver,
            off,
            released: false,
        }
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the driver, re-arming the release
    pub const fn driver_mut(&mut self) -> &mut D {
        self.released = false;
        &mut self.driver
    }

    pub const fn is_released(&self) -> bool {
        self.released
    }

    /// Fill the strip with the off color and flush
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        info!("strip: turning off");
        for index in 0..self.driver.len() {
            self.driver.set_pixel(index, self.off);
        }
        if let Err(err) = self.driver.flush() {
            error!("strip: failed to turn off: {:?}", err);
        }
    }
}

impl<D: StripDriver> Drop for StripGuard<D> {
    fn drop(&mut self) {
        self.release();
    }
}
