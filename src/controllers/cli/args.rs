use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::controllers::explorer_config::{DEFAULT_ZOOM_FACTOR, ExplorerConfig};
use crate::core::bindings::binding_set::DimensionBindingSet;
use crate::core::bindings::dimension_binding::DimensionBinding;
use crate::core::data::canvas::{Canvas, CanvasError, DEFAULT_CANVAS_WIDTH_PX};
use crate::core::data::complex::Complex;
use crate::core::data::frame_request::FrameRequest;
use crate::core::data::point::Point;
use crate::core::data::view_window::{
    DEFAULT_TOP_LEFT, DEFAULT_WIDTH, ViewWindow, ViewWindowError, validate_zoom_factor,
};
use crate::core::fractals::escape_time::max_steps::{DEFAULT_MAX_STEPS, MaxSteps, MaxStepsError};

pub const DEFAULT_OUTPUT_PATH: &str = "output/fractal.ppm";

#[derive(Debug)]
pub enum ConfigError {
    Canvas(CanvasError),
    MaxSteps(MaxStepsError),
    ViewWindow(ViewWindowError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "{}", err),
            Self::MaxSteps(err) => write!(f, "{}", err),
            Self::ViewWindow(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            Self::MaxSteps(err) => Some(err),
            Self::ViewWindow(err) => Some(err),
        }
    }
}

impl From<CanvasError> for ConfigError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

impl From<MaxStepsError> for ConfigError {
    fn from(err: MaxStepsError) -> Self {
        Self::MaxSteps(err)
    }
}

impl From<ViewWindowError> for ConfigError {
    fn from(err: ViewWindowError) -> Self {
        Self::ViewWindow(err)
    }
}

fn parse_zoom_factor(text: &str) -> Result<f64, String> {
    let zoom_factor: f64 = text.trim().parse().map_err(|_| format!("not a number: {:?}", text))?;

    validate_zoom_factor(zoom_factor).map_err(|err| err.to_string())
}

fn parse_click(text: &str) -> Result<Point, String> {
    let invalid = || format!("expected x,y pixel coordinates, got {:?}", text);
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;

    Ok(Point {
        x: x.trim().parse().map_err(|_| invalid())?,
        y: y.trim().parse().map_err(|_| invalid())?,
    })
}

/// Renders one escape-time frame and writes it as a PPM image.
///
/// Each binding takes `x`, `y`, `time` or a number.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "fractal_dimensions")]
#[command(about = "Escape-time fractal renderer with configurable dimension bindings")]
pub struct CliArgs {
    /// Canvas side in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH_PX)]
    pub canvas: u32,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub steps: u32,

    /// Value fed to `time` bindings
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Source of Re(z0)
    #[arg(long = "re-z0", default_value = "0", allow_hyphen_values = true)]
    pub re_z0: DimensionBinding,

    /// Source of Im(z0)
    #[arg(long = "im-z0", default_value = "0", allow_hyphen_values = true)]
    pub im_z0: DimensionBinding,

    /// Source of Re(c)
    #[arg(long = "re-c", default_value = "x", allow_hyphen_values = true)]
    pub re_c: DimensionBinding,

    /// Source of Im(c)
    #[arg(long = "im-c", default_value = "y", allow_hyphen_values = true)]
    pub im_c: DimensionBinding,

    /// Real part of the window's top-left corner
    #[arg(long, default_value_t = DEFAULT_TOP_LEFT.real, allow_negative_numbers = true)]
    pub top_left_re: f64,

    /// Imaginary part of the window's top-left corner
    #[arg(long, default_value_t = DEFAULT_TOP_LEFT.imag, allow_negative_numbers = true)]
    pub top_left_im: f64,

    /// Window width on the complex plane
    #[arg(long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: f64,

    /// Zoom applied by --click
    #[arg(long, default_value_t = DEFAULT_ZOOM_FACTOR, value_parser = parse_zoom_factor, allow_negative_numbers = true)]
    pub zoom: f64,

    /// Zoom once at this pixel before rendering
    #[arg(long, value_name = "X,Y", value_parser = parse_click)]
    pub click: Option<Point>,

    /// Output PPM path
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub out: PathBuf,
}

impl CliArgs {
    /// Session state described by the arguments, with `--click` not yet applied.
    pub fn explorer_config(&self) -> Result<ExplorerConfig, ConfigError> {
        let window = ViewWindow::new(Complex::new(self.top_left_re, self.top_left_im), self.width)?;

        Ok(ExplorerConfig {
            canvas: Canvas::new(self.canvas)?,
            request: FrameRequest {
                window,
                bindings: DimensionBindingSet {
                    z0_real: self.re_z0,
                    z0_imag: self.im_z0,
                    c_real: self.re_c,
                    c_imag: self.im_c,
                },
                time: self.time,
                max_steps: MaxSteps::new(self.steps)?,
            },
            zoom_factor: validate_zoom_factor(self.zoom)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("fractal_dimensions").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_gives_default_session() {
        let args = parse(&[]).unwrap();

        assert_eq!(args.explorer_config().unwrap(), ExplorerConfig::default());
        assert_eq!(args.click, None);
        assert_eq!(args.out, PathBuf::from("output/fractal.ppm"));
    }

    #[test]
    fn test_bindings_are_parsed() {
        let args = parse(&["--re-z0", "x", "--im-z0=y", "--re-c", "-0.7", "--im-c", "time"]).unwrap();
        let bindings = args.explorer_config().unwrap().request.bindings;

        assert_eq!(bindings.z0_real, DimensionBinding::PlaneX);
        assert_eq!(bindings.z0_imag, DimensionBinding::PlaneY);
        assert_eq!(bindings.c_real, DimensionBinding::Constant(-0.7));
        assert_eq!(bindings.c_imag, DimensionBinding::Time);
    }

    #[test]
    fn test_numbers_and_window() {
        let args = parse(&[
            "--canvas=100",
            "--steps=256",
            "--time=0.5",
            "--zoom=4",
            "--top-left-re",
            "-1",
            "--top-left-im=1",
            "--width=2",
            "--click=10,20",
            "--out=frame.ppm",
        ])
        .unwrap();
        let config = args.explorer_config().unwrap();

        assert_eq!(config.canvas.width_px(), 100);
        assert_eq!(config.request.max_steps.get(), 256);
        assert_eq!(config.request.time, 0.5);
        assert_eq!(config.zoom_factor, 4.0);
        assert_eq!(config.request.window.top_left(), Complex::new(-1.0, 1.0));
        assert_eq!(config.request.window.width(), 2.0);
        assert_eq!(args.click, Some(Point { x: 10, y: 20 }));
        assert_eq!(args.out, PathBuf::from("frame.ppm"));
    }

    #[test]
    fn test_malformed_arguments_are_rejected() {
        assert!(parse(&["--colour=red"]).is_err());
        assert!(parse(&["--steps=many"]).is_err());
        assert!(parse(&["--re-c=w"]).is_err());
        assert!(parse(&["--im-c=inf"]).is_err());
        assert!(parse(&["--click=3"]).is_err());
    }

    #[test]
    fn test_zoom_factor_must_be_finite_and_positive() {
        assert!(parse(&["--zoom=0"]).is_err());
        assert!(parse(&["--zoom=-1"]).is_err());
        assert!(parse(&["--zoom=NaN"]).is_err());
        assert_eq!(parse(&["--zoom=0.5"]).unwrap().zoom, 0.5);
    }

    #[test]
    fn test_zoom_factor_checked_when_building_session() {
        let args = CliArgs {
            zoom: 0.0,
            ..parse(&[]).unwrap()
        };

        assert!(matches!(
            args.explorer_config(),
            Err(ConfigError::ViewWindow(ViewWindowError::InvalidZoomFactor { .. }))
        ));
    }

    #[test]
    fn test_domain_errors_come_from_session() {
        assert!(matches!(
            parse(&["--steps=0"]).unwrap().explorer_config(),
            Err(ConfigError::MaxSteps(MaxStepsError::Zero))
        ));
        assert!(matches!(
            parse(&["--canvas=0"]).unwrap().explorer_config(),
            Err(ConfigError::Canvas(CanvasError::ZeroWidth))
        ));
        assert!(matches!(
            parse(&["--width=-1"]).unwrap().explorer_config(),
            Err(ConfigError::ViewWindow(ViewWindowError::InvalidWidth { .. }))
        ));
    }

    #[test]
    fn test_binding_error_names_the_argument() {
        let err = parse(&["--re-c=w"]).unwrap_err().to_string();

        assert!(err.contains("--re-c"), "{err}");
        assert!(err.contains("binding must be x, y, time or a number"), "{err}");
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;

        CliArgs::command().debug_assert();
    }
}
