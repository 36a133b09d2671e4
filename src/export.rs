use std::path::{Path, PathBuf};

use eframe::egui::{ColorImage, Pos2, Rect, vec2};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

/// Exported chart size in pixels.
pub const EXPORT_WIDTH: u32 = 1200;
pub const EXPORT_HEIGHT: u32 = 800;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("screenshot contained no pixels")]
    EmptyCapture,

    #[error("cannot write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Append `.png` unless the path already ends with it (any case).
pub fn png_path(path: &Path) -> PathBuf {
    let has_png = path
        .to_str()
        .is_some_and(|s| s.to_ascii_lowercase().ends_with(".png"));
    if has_png {
        path.to_path_buf()
    } else {
        let mut s = path.as_os_str().to_os_string();
        s.push(".png");
        PathBuf::from(s)
    }
}

/// Crop a window screenshot to `chart_rect` (in points).
///
/// The rect may come from a later frame than the screenshot, so it is
/// clipped to the image first.
pub fn crop_to_chart(
    screenshot: &ColorImage,
    chart_rect: Rect,
    pixels_per_point: f32,
) -> Result<ColorImage, ExportError> {
    let [w, h] = screenshot.size;
    if w == 0 || h == 0 || pixels_per_point <= 0.0 {
        return Err(ExportError::EmptyCapture);
    }
    let bounds = Rect::from_min_size(Pos2::ZERO, vec2(w as f32, h as f32) / pixels_per_point);
    let clipped = chart_rect.intersect(bounds);

    let px_w = (clipped.width() * pixels_per_point) as usize;
    let px_h = (clipped.height() * pixels_per_point) as usize;
    if !clipped.is_positive() || px_w == 0 || px_h == 0 {
        return Err(ExportError::EmptyCapture);
    }

    // Rounding in `region` can still reach one pixel past the edge.
    let max_x = (w.saturating_sub(1)) as f32 / pixels_per_point;
    let max_y = (h.saturating_sub(1)) as f32 / pixels_per_point;
    let safe = Rect::from_min_max(
        clipped.min,
        Pos2::new(clipped.max.x.min(max_x), clipped.max.y.min(max_y)),
    );
    if !safe.is_positive() {
        return Err(ExportError::EmptyCapture);
    }
    Ok(screenshot.region(&safe, Some(pixels_per_point)))
}

/// Resize `capture` to the fixed export size and write it as PNG.
pub fn save_png(capture: &ColorImage, path: &Path) -> Result<PathBuf, ExportError> {
    let [w, h] = capture.size;
    if w == 0 || h == 0 {
        return Err(ExportError::EmptyCapture);
    }

    let raw: Vec<u8> = capture.pixels.iter().flat_map(|c| c.to_array()).collect();
    let img = RgbaImage::from_raw(w as u32, h as u32, raw).ok_or(ExportError::EmptyCapture)?;
    let scaled = imageops::resize(&img, EXPORT_WIDTH, EXPORT_HEIGHT, FilterType::Triangle);

    let path = png_path(path);
    scaled.save_with_format(&path, ImageFormat::Png)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    #[test]
    fn appends_png_suffix() {
        assert_eq!(png_path(Path::new("chart")), PathBuf::from("chart.png"));
        assert_eq!(png_path(Path::new("chart.jpg")), PathBuf::from("chart.jpg.png"));
    }

    #[test]
    fn keeps_existing_suffix_any_case() {
        assert_eq!(png_path(Path::new("a/chart.png")), PathBuf::from("a/chart.png"));
        assert_eq!(png_path(Path::new("CHART.PNG")), PathBuf::from("CHART.PNG"));
    }

    #[test]
    fn writes_fixed_resolution() {
        let tmp = tempfile::TempDir::new().unwrap();
        let capture = ColorImage::new([30, 20], Color32::WHITE);
        let out = save_png(&capture, &tmp.path().join("chart")).unwrap();
        assert_eq!(out.extension().and_then(|e| e.to_str()), Some("png"));

        let written = image::open(&out).unwrap();
        assert_eq!(written.width(), EXPORT_WIDTH);
        assert_eq!(written.height(), EXPORT_HEIGHT);
    }

    #[test]
    fn crop_larger_than_screenshot_is_clipped() {
        let shot = ColorImage::new([800, 600], Color32::WHITE);
        let rect = Rect::from_min_max(Pos2::new(10.0, 10.0), Pos2::new(900.0, 700.0));
        let cropped = crop_to_chart(&shot, rect, 1.0).unwrap();
        assert!(cropped.size[0] <= 790 && cropped.size[0] > 0);
        assert!(cropped.size[1] <= 590 && cropped.size[1] > 0);
    }

    #[test]
    fn crop_at_high_dpi_stays_in_bounds() {
        let shot = ColorImage::new([1600, 1200], Color32::WHITE);
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(2000.0, 2000.0));
        let cropped = crop_to_chart(&shot, rect, 2.0).unwrap();
        assert!(cropped.size[0] <= 1600);
        assert!(cropped.size[1] <= 1200);
    }

    #[test]
    fn crop_outside_screenshot_is_an_error() {
        let shot = ColorImage::new([100, 100], Color32::WHITE);
        let rect = Rect::from_min_max(Pos2::new(200.0, 200.0), Pos2::new(300.0, 300.0));
        assert!(matches!(
            crop_to_chart(&shot, rect, 1.0),
            Err(ExportError::EmptyCapture)
        ));
    }

    #[test]
    fn empty_capture_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let capture = ColorImage::new([0, 0], Color32::WHITE);
        assert!(matches!(
            save_png(&capture, &tmp.path().join("x.png")),
            Err(ExportError::EmptyCapture)
        ));
    }
}
