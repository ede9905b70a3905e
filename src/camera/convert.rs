// SPDX-License-Identifier: MPL-2.0
//! Pixel format conversion into the RGBA layout Iced renders.
//!
//! Webcams commonly deliver packed YUYV (YUV 4:2:2); conversion uses the
//! BT.601 coefficients. RGB24 only needs an alpha channel appended.

/// Converts packed YUYV 4:2:2 data into RGBA.
///
/// Each four-byte group `[Y0, U, Y1, V]` yields two pixels sharing the same
/// chroma. Trailing bytes that do not form a full group are dropped.
pub fn yuyv_to_rgba(yuyv: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(yuyv.len() * 2);
    for chunk in yuyv.chunks_exact(4) {
        let y0 = chunk[0] as f32;
        let u = chunk[1] as f32 - 128.0;
        let y1 = chunk[2] as f32;
        let v = chunk[3] as f32 - 128.0;

        for y in [y0, y1] {
            let r = y + 1.402 * v;
            let g = y - 0.344 * u - 0.714 * v;
            let b = y + 1.772 * u;
            rgba.push(r.clamp(0.0, 255.0) as u8);
            rgba.push(g.clamp(0.0, 255.0) as u8);
            rgba.push(b.clamp(0.0, 255.0) as u8);
            rgba.push(255);
        }
    }
    rgba
}

/// Converts packed RGB24 data into RGBA by appending an opaque alpha byte.
pub fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    for chunk in rgb.chunks_exact(3) {
        rgba.extend_from_slice(chunk);
        rgba.push(255);
    }
    rgba
}
