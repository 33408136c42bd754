use std::error::Error;

use crate::controllers::cli::args::CliArgs;
use crate::controllers::cli::render_controller::CliRenderController;
use crate::controllers::ports::file_presenter::FilePresenterPort;

/// Builds the session, applies `--click`, renders and presents the frame.
pub fn run<P: FilePresenterPort>(args: &CliArgs, presenter: P) -> Result<(), Box<dyn Error>> {
    let mut config = args.explorer_config()?;

    if let Some(pixel) = args.click {
        config.zoom_at_pixel(pixel)?;
    }

    let mut controller = CliRenderController::new(presenter);

    controller.generate(&config)?;
    controller.write(&args.out)?;

    Ok(())
}
