//! Texture bake stage: rasterises a drawing snapshot into an RGBA8 buffer.
//!
//! The buffer is cropped exactly to the snapshot bounds, so its aspect ratio
//! matches the plane the builder sizes from the same bounds. Strokes are drawn
//! as round-capped capsules with one pixel of anti-aliasing, composited
//! source-over onto a transparent background.

use crate::constants::{PLACEHOLDER_COLOR, PLACEHOLDER_TEXTURE_EDGE};
use crate::drawing::{DrawingSnapshot, Stroke};
use glam::Vec2;

/// Rasterised drawing owned by the plane's material.
#[derive(Clone, Debug, PartialEq)]
pub struct BakedTexture {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    placeholder: bool,
}

impl BakedTexture {
    /// Stand-in used when a drawing cannot be rasterised.
    pub fn placeholder() -> Self {
        let edge = PLACEHOLDER_TEXTURE_EDGE;
        Self {
            width: edge,
            height: edge,
            pixels: vec![PLACEHOLDER_COLOR; (edge * edge) as usize],
            placeholder: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Row-major pixels, top row first.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Tightly packed RGBA8 bytes, ready for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Rasterise `snapshot` at `scale` pixels per drawing unit, cropped to its
/// bounds. The longest edge is capped at `max_edge` by a uniform downscale.
///
/// Degenerate bounds or a non-positive scale yield
/// [`BakedTexture::placeholder`] instead of failing.
pub fn bake(snapshot: &DrawingSnapshot, scale: f32, max_edge: u32) -> BakedTexture {
    let bounds = snapshot.bounds();
    if bounds.is_degenerate() || !(scale.is_finite() && scale > 0.0) || max_edge == 0 {
        log::warn!(
            "[bake] cannot rasterise bounds {:?} at scale {}; using placeholder",
            bounds,
            scale
        );
        return BakedTexture::placeholder();
    }

    let mut px_per_unit = scale;
    let mut w_px = bounds.width() * px_per_unit;
    let mut h_px = bounds.height() * px_per_unit;
    if !(w_px.is_finite() && h_px.is_finite()) {
        log::warn!("[bake] bounds overflow at scale {}; using placeholder", scale);
        return BakedTexture::placeholder();
    }
    let longest = w_px.max(h_px);
    if longest > max_edge as f32 {
        let shrink = max_edge as f32 / longest;
        px_per_unit *= shrink;
        w_px *= shrink;
        h_px *= shrink;
        log::debug!("[bake] downscaled by {:.4} to fit {}px", shrink, max_edge);
    }
    let width = (w_px.ceil() as u32).clamp(1, max_edge);
    let height = (h_px.ceil() as u32).clamp(1, max_edge);

    let mut canvas = Canvas::new(width, height);
    for stroke in snapshot.strokes() {
        canvas.draw_stroke(stroke, bounds.origin, px_per_unit);
    }
    log::debug!(
        "[bake] {} strokes -> {}x{} texture",
        snapshot.strokes().len(),
        width,
        height
    );

    BakedTexture {
        width,
        height,
        pixels: canvas.pixels,
        placeholder: false,
    }
}

struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    // Per-stroke coverage so overlapping segments of one stroke blend once.
    coverage: Vec<f32>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        let n = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; n],
            coverage: vec![0.0; n],
        }
    }

    fn draw_stroke(&mut self, stroke: &Stroke, origin: Vec2, px_per_unit: f32) {
        let pts: Vec<(Vec2, f32)> = stroke
            .points
            .iter()
            .filter(|p| p.position.is_finite() && p.width.is_finite())
            .map(|p| {
                let pos = (p.position - origin) * px_per_unit;
                // Hairlines still cover about one pixel.
                let radius = (p.width * px_per_unit * 0.5).max(0.5);
                (pos, radius)
            })
            .collect();
        if pts.is_empty() || stroke.color[3] == 0 {
            return;
        }

        let Some((x0, y0, x1, y1)) = self.stroke_box(&pts) else {
            return;
        };
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            self.coverage[row + x0 as usize..row + x1 as usize].fill(0.0);
        }

        if pts.len() == 1 {
            let (p, r) = pts[0];
            self.stamp_capsule(p, r, p, r);
        } else {
            for seg in pts.windows(2) {
                let (a, ra) = seg[0];
                let (b, rb) = seg[1];
                self.stamp_capsule(a, ra, b, rb);
            }
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let idx = (y * self.width + x) as usize;
                let cov = self.coverage[idx];
                if cov > 0.0 {
                    self.pixels[idx] = blend_over(self.pixels[idx], stroke.color, cov);
                }
            }
        }
    }

    /// Pixel box touched by the stroke, clipped to the canvas, half-open.
    fn stroke_box(&self, pts: &[(Vec2, f32)]) -> Option<(u32, u32, u32, u32)> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for &(p, r) in pts {
            min = min.min(p - Vec2::splat(r + 1.0));
            max = max.max(p + Vec2::splat(r + 1.0));
        }
        self.clip_box(min, max)
    }

    fn clip_box(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(self.width as f32);
        let y1 = max.y.ceil().min(self.height as f32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn stamp_capsule(&mut self, a: Vec2, ra: f32, b: Vec2, rb: f32) {
        let r_max = ra.max(rb);
        let pad = Vec2::splat(r_max + 1.0);
        let Some((x0, y0, x1, y1)) = self.clip_box(a.min(b) - pad, a.max(b) + pad) else {
            return;
        };
        let ab = b - a;
        let len_sq = ab.length_squared();
        for y in y0..y1 {
            for x in x0..x1 {
                let c = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len_sq > 0.0 {
                    ((c - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let d = c.distance(a + ab * t);
                let r = ra + (rb - ra) * t;
                let cov = (r + 0.5 - d).clamp(0.0, 1.0);
                let idx = (y * self.width + x) as usize;
                if cov > self.coverage[idx] {
                    self.coverage[idx] = cov;
                }
            }
        }
    }
}

/// Straight-alpha source-over with the source alpha scaled by `coverage`.
fn blend_over(dst: [u8; 4], src: [u8; 4], coverage: f32) -> [u8; 4] {
    let sa = src[3] as f32 / 255.0 * coverage;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = src[i] as f32;
        let dc = dst[i] as f32;
        out[i] = ((sc * sa + dc * da * (1.0 - sa)) / out_a).round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}
