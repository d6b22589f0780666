//! Software framebuffer: convex polygons, discs and digit labels in 0RGB.

use crate::math::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_u32(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0) as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0) as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }
}

const GLYPH_WIDTH: usize = 5;
const GLYPH_HEIGHT: usize = 7;
const GLYPH_SCALE: usize = 4;

// Rows top to bottom, high bit is the leftmost column.
static DIGITS: [[u8; GLYPH_HEIGHT]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

pub struct Canvas {
    width: usize,
    height: usize,
    color: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.color[y * self.width + x])
        } else {
            None
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.color.fill(color.to_u32());
    }

    /// Fills a convex polygon of either winding by fanning it into triangles.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        for i in 1..points.len() - 1 {
            self.fill_triangle(points[0], points[i], points[i + 1], color);
        }
    }

    fn fill_triangle(&mut self, v0: Vec2, v1: Vec2, v2: Vec2, color: Color) {
        let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as i32;
        let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(self.width as f32 - 1.0) as i32;
        let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as i32;
        let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(self.height as f32 - 1.0) as i32;
        if min_x > max_x || min_y > max_y {
            return;
        }
        if edge(v0, v1, v2).abs() < 1e-4 {
            return;
        }
        let packed = color.to_u32();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(v1, v2, p);
                let w1 = edge(v2, v0, p);
                let w2 = edge(v0, v1, p);
                if (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0) || (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0) {
                    self.color[y as usize * self.width + x as usize] = packed;
                }
            }
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let min_x = (center.x - radius).floor().max(0.0) as i32;
        let max_x = (center.x + radius).ceil().min(self.width as f32 - 1.0) as i32;
        let min_y = (center.y - radius).floor().max(0.0) as i32;
        let max_y = (center.y + radius).ceil().min(self.height as f32 - 1.0) as i32;
        let packed = color.to_u32();
        let r2 = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.color[y as usize * self.width + x as usize] = packed;
                }
            }
        }
    }

    /// Draws `text` with its top-left corner at `origin`. Only digits have
    /// glyphs; other characters advance the cursor without ink.
    pub fn draw_label(&mut self, origin: Vec2, text: &str, color: Color) {
        let packed = color.to_u32();
        let advance = (GLYPH_WIDTH + 1) * GLYPH_SCALE;
        let mut cursor_x = origin.x.round() as i64;
        let top = origin.y.round() as i64;
        for ch in text.chars() {
            if let Some(glyph) = ch.to_digit(10).map(|d| &DIGITS[d as usize]) {
                for (row, bits) in glyph.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (0x10 >> col) == 0 {
                            continue;
                        }
                        let x0 = cursor_x + (col * GLYPH_SCALE) as i64;
                        let y0 = top + (row * GLYPH_SCALE) as i64;
                        self.fill_block(x0, y0, GLYPH_SCALE as i64, packed);
                    }
                }
            }
            cursor_x += advance as i64;
        }
    }

    fn fill_block(&mut self, x0: i64, y0: i64, size: i64, packed: u32) {
        for y in y0.max(0)..(y0 + size).min(self.height as i64) {
            for x in x0.max(0)..(x0 + size).min(self.width as i64) {
                self.color[y as usize * self.width + x as usize] = packed;
            }
        }
    }
}

fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}
