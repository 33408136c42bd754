use crate::core::bindings::dimension_binding::DimensionBinding;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_context::PixelContext;

/// The four bindings that build `z0` and `c` for every pixel.
///
/// The default reproduces the Mandelbrot set: `z0 = 0` and `c` is the
/// plane point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DimensionBindingSet {
    pub z0_real: DimensionBinding,
    pub z0_imag: DimensionBinding,
    pub c_real: DimensionBinding,
    pub c_imag: DimensionBinding,
}

impl DimensionBindingSet {
    #[must_use]
    pub const fn mandelbrot() -> Self {
        Self {
            z0_real: DimensionBinding::Constant(0.0),
            z0_imag: DimensionBinding::Constant(0.0),
            c_real: DimensionBinding::PlaneX,
            c_imag: DimensionBinding::PlaneY,
        }
    }

    /// Julia set for a fixed `c`: `z0` is the plane point.
    #[must_use]
    pub const fn julia(c: Complex) -> Self {
        Self {
            z0_real: DimensionBinding::PlaneX,
            z0_imag: DimensionBinding::PlaneY,
            c_real: DimensionBinding::Constant(c.real),
            c_imag: DimensionBinding::Constant(c.imag),
        }
    }

    #[inline]
    #[must_use]
    pub fn resolve_z0(&self, ctx: &PixelContext) -> Complex {
        Complex::new(self.z0_real.resolve(ctx), self.z0_imag.resolve(ctx))
    }

    #[inline]
    #[must_use]
    pub fn resolve_c(&self, ctx: &PixelContext) -> Complex {
        Complex::new(self.c_real.resolve(ctx), self.c_imag.resolve(ctx))
    }

    #[must_use]
    pub fn uses_time(&self) -> bool {
        [self.z0_real, self.z0_imag, self.c_real, self.c_imag]
            .contains(&DimensionBinding::Time)
    }
}

impl Default for DimensionBindingSet {
    fn default() -> Self {
        Self::mandelbrot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> PixelContext {
        PixelContext {
            plane_x: 0.25,
            plane_y: -0.5,
            time: 2.0,
        }
    }

    #[test]
    fn test_default_is_mandelbrot() {
        let bindings = DimensionBindingSet::default();

        assert_eq!(bindings.z0_real, DimensionBinding::Constant(0.0));
        assert_eq!(bindings.z0_imag, DimensionBinding::Constant(0.0));
        assert_eq!(bindings.c_real, DimensionBinding::PlaneX);
        assert_eq!(bindings.c_imag, DimensionBinding::PlaneY);
    }

    #[test]
    fn test_mandelbrot_resolves_c_to_plane_point() {
        let bindings = DimensionBindingSet::mandelbrot();

        assert_eq!(bindings.resolve_z0(&ctx()), Complex::ZERO);
        assert_eq!(bindings.resolve_c(&ctx()), Complex::new(0.25, -0.5));
    }

    #[test]
    fn test_julia_resolves_z0_to_plane_point() {
        let bindings = DimensionBindingSet::julia(Complex::new(-0.7, 0.27));

        assert_eq!(bindings.resolve_z0(&ctx()), Complex::new(0.25, -0.5));
        assert_eq!(bindings.resolve_c(&ctx()), Complex::new(-0.7, 0.27));
    }

    #[test]
    fn test_time_binding_feeds_component() {
        let bindings = DimensionBindingSet {
            c_imag: DimensionBinding::Time,
            ..DimensionBindingSet::mandelbrot()
        };

        assert!(bindings.uses_time());
        assert!(!DimensionBindingSet::mandelbrot().uses_time());
        assert_eq!(bindings.resolve_c(&ctx()), Complex::new(0.25, 2.0));
    }
}
