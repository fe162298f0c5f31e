//! Brightness to character mapping.

/// Precomputed sRGB gamma correction lookup table.
/// Formula: output = (input/255)^(1/2.2) * 255
#[rustfmt::skip]
const GAMMA_LUT: [u8; 256] = [
    0, 21, 28, 34, 39, 43, 46, 50, 53, 56, 59, 61, 64, 66, 68, 70,
    72, 74, 76, 78, 80, 82, 84, 85, 87, 89, 90, 92, 93, 95, 96, 98,
    99, 101, 102, 103, 105, 106, 107, 109, 110, 111, 112, 114, 115, 116, 117, 118,
    119, 120, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 135,
    136, 137, 138, 139, 140, 141, 142, 143, 144, 144, 145, 146, 147, 148, 149, 150,
    150, 151, 152, 153, 154, 155, 155, 156, 157, 158, 159, 159, 160, 161, 162, 162,
    163, 164, 165, 165, 166, 167, 168, 168, 169, 170, 171, 171, 172, 173, 173, 174,
    175, 175, 176, 177, 177, 178, 179, 179, 180, 181, 181, 182, 183, 183, 184, 185,
    185, 186, 186, 187, 188, 188, 189, 190, 190, 191, 191, 192, 193, 193, 194, 194,
    195, 196, 196, 197, 197, 198, 199, 199, 200, 200, 201, 201, 202, 203, 203, 204,
    204, 205, 205, 206, 207, 207, 208, 208, 209, 209, 210, 210, 211, 212, 212, 213,
    213, 214, 214, 215, 215, 216, 216, 217, 217, 218, 218, 219, 220, 220, 221, 221,
    222, 222, 223, 223, 224, 224, 225, 225, 226, 226, 227, 227, 228, 228, 229, 229,
    230, 230, 231, 231, 232, 232, 233, 233, 234, 234, 234, 235, 235, 236, 236, 237,
    237, 238, 238, 239, 239, 240, 240, 241, 241, 241, 242, 242, 243, 243, 244, 244,
    245, 245, 246, 246, 246, 247, 247, 248, 248, 249, 249, 250, 250, 250, 251, 255,
];

#[inline]
pub fn gamma_correct(linear: u8) -> u8 {
    GAMMA_LUT[linear as usize]
}

#[inline]
fn level(b: u8, levels: usize) -> usize {
    (b as usize * (levels - 1)) / 255
}

/// Map brightness values (0-255) onto `charset`, darkest first, after gamma
/// correction so shadows in photographs keep their detail.
pub fn map_to_chars_gamma(brightness: &[u8], charset: &[char], invert: bool) -> Vec<char> {
    if charset.is_empty() {
        return vec![' '; brightness.len()];
    }

    brightness
        .iter()
        .map(|&b| {
            let b = if invert { 255 - b } else { b };
            charset[level(gamma_correct(b), charset.len())]
        })
        .collect()
}

/// Gamma-corrected mapping with Floyd-Steinberg error diffusion.
///
/// Smooths gradients at the cost of some noise in flat areas.
pub fn map_to_chars_dithered(
    brightness: &[u8],
    width: u16,
    height: u16,
    charset: &[char],
    invert: bool,
) -> Vec<char> {
    if charset.is_empty() || width == 0 || height == 0 {
        return vec![' '; brightness.len()];
    }

    let w = width as usize;
    let h = height as usize;
    let levels = charset.len();

    let mut buffer: Vec<i16> = brightness
        .iter()
        .map(|&b| {
            let b = if invert { 255 - b } else { b };
            gamma_correct(b) as i16
        })
        .collect();
    buffer.resize(w * h, 0);

    let mut result = vec![' '; w * h];

    //       [*] 7/16
    // 3/16 5/16 1/16
    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old_val = buffer[idx].clamp(0, 255) as u8;
            let char_idx = level(old_val, levels);
            result[idx] = charset[char_idx];

            let new_val = (char_idx * 255 / (levels - 1)) as i16;
            let error = buffer[idx] - new_val;

            if x + 1 < w {
                buffer[idx + 1] += error * 7 / 16;
            }
            if y + 1 < h && x > 0 {
                buffer[idx + w - 1] += error * 3 / 16;
            }
            if y + 1 < h {
                buffer[idx + w] += error * 5 / 16;
            }
            if y + 1 < h && x + 1 < w {
                buffer[idx + w + 1] += error / 16;
            }
        }
    }

    result
}
