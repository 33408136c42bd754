use crate::core::data::canvas::Canvas;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_window::ViewWindow;

/// Maps a canvas pixel onto the complex plane.
///
/// Pixel `y` grows downwards while the imaginary part shrinks, so row 0 sits
/// on the window's top edge. Pixels outside the canvas extrapolate linearly.
#[inline]
#[must_use]
pub fn pixel_to_plane_point(pixel: Point, canvas: Canvas, window: ViewWindow) -> Complex {
    let canvas_width = canvas.width_px() as f64;
    let top_left = window.top_left();

    let real = top_left.real + (pixel.x as f64 / canvas_width) * window.width();
    let imag = top_left.imag - (pixel.y as f64 / canvas_width) * window.width();

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(250).unwrap()
    }

    #[test]
    fn test_top_left_pixel_is_window_corner() {
        let result = pixel_to_plane_point(Point { x: 0, y: 0 }, canvas(), ViewWindow::default());

        assert_eq!(result, Complex::new(-2.0, 2.0));
    }

    #[test]
    fn test_center_pixel_is_origin_for_default_window() {
        let result =
            pixel_to_plane_point(Point { x: 125, y: 125 }, canvas(), ViewWindow::default());

        assert_eq!(result, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_imaginary_part_decreases_downwards() {
        let upper = pixel_to_plane_point(Point { x: 10, y: 10 }, canvas(), ViewWindow::default());
        let lower = pixel_to_plane_point(Point { x: 10, y: 20 }, canvas(), ViewWindow::default());

        assert_eq!(upper.real, lower.real);
        assert!(lower.imag < upper.imag);
    }

    #[test]
    fn test_last_pixel_stops_one_step_short_of_far_edge() {
        let result =
            pixel_to_plane_point(Point { x: 249, y: 249 }, canvas(), ViewWindow::default());

        assert!((result.real - (2.0 - 4.0 / 250.0)).abs() < 1e-12);
        assert!((result.imag - (-2.0 + 4.0 / 250.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zoomed_window() {
        let window = ViewWindow::new(Complex::new(-1.0, 0.5), 0.5).unwrap();
        let canvas = Canvas::new(100).unwrap();
        let result = pixel_to_plane_point(Point { x: 50, y: 100 }, canvas, window);

        assert_eq!(result, Complex::new(-0.75, 0.0));
    }
}
