//! Pixel buffer drawing primitives
//!
//! `Frame` borrows the softbuffer buffer for one paint pass. Coordinates are
//! physical pixels; anything outside the buffer or the clip is dropped.

use super::geometry::Rect;

/// Blend `fg` over `bg` (both 0xAARRGGBB) with the given coverage.
///
/// The result is always opaque.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let mix = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        ((b + (f - b) * alpha).round() as u32).min(0xFF) << shift
    };
    0xFF00_0000 | mix(16) | mix(8) | mix(0)
}

/// Half-open pixel span `x0..x1` × `y0..y1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl Span {
    fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
}

pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<Span>,
}

impl<'a> Frame<'a> {
    /// Wrap a row-major buffer. A short buffer shrinks the usable height.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width == 0 {
            0
        } else {
            height.min(buffer.len() / width)
        };
        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Restrict subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = Some(self.bounds(rect));
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Rect → pixel span clamped to the buffer (ignores the clip)
    fn bounds(&self, rect: Rect) -> Span {
        let to_px = |v: f32, max: usize| (v.max(0.0).round() as usize).min(max);
        Span {
            x0: to_px(rect.x, self.width),
            y0: to_px(rect.y, self.height),
            x1: to_px(rect.x + rect.width, self.width),
            y1: to_px(rect.y + rect.height, self.height),
        }
    }

    /// Rect → pixel span clamped to the buffer and the clip
    fn visible(&self, rect: Rect) -> Span {
        let span = self.bounds(rect);
        match self.clip {
            Some(clip) => Span {
                x0: span.x0.max(clip.x0),
                y0: span.y0.max(clip.y0),
                x1: span.x1.min(clip.x1),
                y1: span.y1.min(clip.y1),
            },
            None => span,
        }
    }

    pub fn clear(&mut self, color: u32) {
        let len = self.width * self.height;
        self.buffer[..len].fill(color);
    }

    /// Opaque fill
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let span = self.visible(rect);
        if span.is_empty() {
            return;
        }
        for y in span.y0..span.y1 {
            let row = y * self.width;
            self.buffer[row + span.x0..row + span.x1].fill(color);
        }
    }

    /// Fill using the color's own alpha byte as coverage
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let span = self.visible(rect);
        for y in span.y0..span.y1 {
            let row = y * self.width;
            for px in &mut self.buffer[row + span.x0..row + span.x1] {
                *px = blend_colors(*px, color, alpha);
            }
        }
    }

    /// Outline `rect` with a border `thickness` pixels wide, drawn inside it
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: u32) {
        let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0);
        if t <= 0.0 {
            return;
        }
        let inner_height = rect.height - 2.0 * t;
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), color);
        self.fill_rect(
            Rect::new(rect.x, rect.y + rect.height - t, rect.width, t),
            color,
        );
        self.fill_rect(Rect::new(rect.x, rect.y + t, t, inner_height), color);
        self.fill_rect(
            Rect::new(rect.x + rect.width - t, rect.y + t, t, inner_height),
            color,
        );
    }

    /// Read one pixel; 0 outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }
}
