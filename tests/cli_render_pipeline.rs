//! End-to-end checks of the command-line pipeline: arguments, zoom, render, PPM.

use clap::Parser;
use fractal_dimensions::{CliArgs, CliRenderController, Point, PpmFilePresenter, render_frame, run};

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("fractal_dimensions").chain(args.iter().copied())).unwrap()
}

#[test]
fn renders_julia_frame_to_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.ppm");
    let out = format!("--out={}", path.display());
    let args = parse(&[
        "--canvas=40",
        "--re-z0=x",
        "--im-z0=y",
        "--re-c=-0.7",
        "--im-c=0.27",
        out.as_str(),
    ]);
    let config = args.explorer_config().unwrap();

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    controller.generate(&config).unwrap();
    controller.write(&args.out).unwrap();

    let written = std::fs::read(&path).unwrap();
    let header = b"P6\n40 40\n255\n";
    assert!(written.starts_with(header));
    assert_eq!(written.len(), header.len() + 40 * 40 * 3);

    let grid = controller.grid().unwrap();
    assert_eq!(*grid, render_frame(config.canvas, &config.request));
}

#[test]
fn click_zooms_before_rendering() {
    let args = parse(&["--canvas=20", "--click=10,10", "--zoom=4"]);
    let mut config = args.explorer_config().unwrap();

    config.zoom_at_pixel(args.click.unwrap()).unwrap();

    assert_eq!(config.request.window.width(), 1.0);
    assert_eq!(args.click, Some(Point { x: 10, y: 10 }));

    // c = 0 stays at the centre of the zoomed window
    let grid = render_frame(config.canvas, &config.request);
    assert_eq!(grid.get(Point { x: 10, y: 10 }), Some(64));
}

#[test]
fn run_applies_click_and_writes_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoomed.ppm");
    let out = format!("--out={}", path.display());

    run(&parse(&["--canvas=16", "--click=8,8", out.as_str()]), PpmFilePresenter::new()).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"P6\n16 16\n255\n"));
}

#[test]
fn bad_binding_is_reported_with_its_flag() {
    let err = CliArgs::try_parse_from(["fractal_dimensions", "--im-c=inf"]).unwrap_err();

    assert!(err.to_string().contains("--im-c"));
}
