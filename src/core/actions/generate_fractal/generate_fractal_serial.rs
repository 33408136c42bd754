use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Computes every canvas pixel on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    algorithm
        .canvas()
        .pixels()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas::Canvas;
    use crate::core::data::point::Point;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubAlgorithm {
        canvas: Canvas,
        fail_at: Option<Point>,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = i32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if self.fail_at == Some(pixel) {
                return Err(StubError {});
            }
            Ok(pixel.y * 10 + pixel.x)
        }

        fn canvas(&self) -> Canvas {
            self.canvas
        }
    }

    #[test]
    fn test_serial_output_is_row_major() {
        let algorithm = StubAlgorithm {
            canvas: Canvas::new(3).unwrap(),
            fail_at: None,
        };

        let result = generate_fractal_serial(&algorithm).unwrap();

        assert_eq!(result, vec![0, 1, 2, 10, 11, 12, 20, 21, 22]);
    }

    #[test]
    fn test_serial_propagates_failure() {
        let algorithm = StubAlgorithm {
            canvas: Canvas::new(3).unwrap(),
            fail_at: Some(Point { x: 1, y: 2 }),
        };

        assert_eq!(generate_fractal_serial(&algorithm), Err(StubError {}));
    }
}
