use ndarray::ArrayView1;

use super::IMAGE_SIDE;

/// Draws a normalized image as framed text, two characters per pixel.
///
/// Pixels above 0.5 are drawn solid and pixels above 0.1 shaded. Works on any view, so a
/// column of a batch can be passed as is.
pub fn render(image: ArrayView1<f32>) -> String {
    let rows = image.len().div_ceil(IMAGE_SIDE);
    let border = "──".repeat(IMAGE_SIDE);
    let mut out = format!("┌{border}┐\n");

    for y in 0..rows {
        out.push('│');
        for x in 0..IMAGE_SIDE {
            let shade = match image.get(y * IMAGE_SIDE + x) {
                Some(&p) if p > 0.5 => "██",
                Some(&p) if p > 0.1 => "░░",
                _ => "  ",
            };
            out.push_str(shade);
        }
        out.push_str("│\n");
    }

    out.push_str(&format!("└{border}┘"));
    out
}
