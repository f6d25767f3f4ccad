/// How a surface came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOrigin {
    Decoded,
    VideoFrame,
    Placeholder,
}

/// An RGBA8 raster ready for texture upload.
#[derive(Debug, Clone)]
pub struct SurfaceData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// A settled media resolution: the raster plus how it was obtained.
#[derive(Debug, Clone)]
pub struct ResolvedSurface {
    pub data: SurfaceData,
    pub origin: SurfaceOrigin,
}

/// Gradient palette used when real media cannot be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    Image,
    Video,
    External,
}

impl PlaceholderStyle {
    fn stops(self) -> [[u8; 3]; 3] {
        match self {
            PlaceholderStyle::Image => [[0x1a, 0x1a, 0x1a], [0x2d, 0x1b, 0x1b], [0x1b, 0x1b, 0x2d]],
            PlaceholderStyle::Video => [[0xff, 0x00, 0x00], [0xcc, 0x00, 0x00], [0x99, 0x00, 0x00]],
            PlaceholderStyle::External => {
                [[0x83, 0x3a, 0xb4], [0xfd, 0x1d, 0x1d], [0xf7, 0x77, 0x37]]
            }
        }
    }
}

/// Deterministic placeholder raster: a diagonal three-stop gradient with a
/// sparse white dot grid. The wasm layer stamps the item title on top; this
/// raster alone is still a valid surface.
pub fn placeholder_surface(style: PlaceholderStyle, width: u32, height: u32) -> SurfaceData {
    let stops = style.stops();
    let w = width.max(1);
    let h = height.max(1);
    let mut pixels = vec![0u8; (w * h * 4) as usize];
    for y in 0..h {
        for x in 0..w {
            let t = 0.5 * (x as f32 / (w - 1).max(1) as f32 + y as f32 / (h - 1).max(1) as f32);
            let mut px = gradient_at(&stops, t);
            if dot_at(x, y) {
                for c in &mut px {
                    *c = (*c as f32 + (255.0 - *c as f32) * 0.1).round() as u8;
                }
            }
            let o = ((y * w + x) * 4) as usize;
            pixels[o] = px[0];
            pixels[o + 1] = px[1];
            pixels[o + 2] = px[2];
            pixels[o + 3] = 0xff;
        }
    }
    SurfaceData {
        width: w,
        height: h,
        pixels,
    }
}

#[inline]
fn gradient_at(stops: &[[u8; 3]; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let (a, b, f) = if t < 0.5 {
        (stops[0], stops[1], t * 2.0)
    } else {
        (stops[1], stops[2], (t - 0.5) * 2.0)
    };
    [
        lerp_u8(a[0], b[0], f),
        lerp_u8(a[1], b[1], f),
        lerp_u8(a[2], b[2], f),
    ]
}

#[inline]
fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

// One 10x10 dot per 20px cell, on cells whose grid coordinates sum to a
// multiple of 40.
#[inline]
fn dot_at(x: u32, y: u32) -> bool {
    let gx = x / 20 * 20;
    let gy = y / 20 * 20;
    (gx + gy) % 40 == 0 && x % 20 < 10 && y % 20 < 10
}
