use mupdf::{Colorspace, Matrix, Page, Pixmap};

/// Rasterize at `zoom` and repack as tightly packed RGB8
pub(crate) fn render_rgb(page: &Page, zoom: f32) -> Result<(u32, u32, Vec<u8>), String> {
    let matrix = Matrix::new_scale(zoom, zoom);
    let rgb = Colorspace::device_rgb();
    let pixmap = page
        .to_pixmap(&matrix, &rgb, false, false)
        .map_err(|e| e.to_string())?;

    let pixels = pixmap_to_rgb(&pixmap)?;
    Ok((pixmap.width() as u32, pixmap.height() as u32, pixels))
}

fn pixmap_to_rgb(pixmap: &Pixmap) -> Result<Vec<u8>, String> {
    pack_rgb(
        pixmap.samples(),
        pixmap.width() as usize,
        pixmap.height() as usize,
        pixmap.stride() as usize,
        pixmap.n() as usize,
    )
}

/// Drop row padding and any channels past the first three
fn pack_rgb(
    samples: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    n: usize,
) -> Result<Vec<u8>, String> {
    if n < 3 {
        return Err(format!("Unsupported pixmap format: {n} channels"));
    }

    let row_bytes = width * n;
    let expected_min = stride.saturating_mul(height);
    if samples.len() < expected_min || row_bytes > stride {
        return Err("Pixmap buffer size mismatch".to_string());
    }

    let mut out = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        let row_start = y * stride;
        let row = &samples[row_start..row_start + row_bytes];
        if n == 3 {
            out.extend_from_slice(row);
        } else {
            for px in row.chunks_exact(n) {
                out.extend_from_slice(&px[..3]);
            }
        }
    }

    Ok(out)
}
