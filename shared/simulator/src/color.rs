use nalgebra::{vector, Vector4};

pub fn from_u24(c: u32) -> Vector4<f32> {
    let extract_color = |k: i64| -> f32 { (((c >> (k * 8)) & 0xff) as f32) / 255.0 };
    vector![extract_color(2), extract_color(1), extract_color(0), 1.0]
}
