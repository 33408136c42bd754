use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::explorer_config::ExplorerConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::colour_mapping::teal::TealColourMap;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_buffer::PixelBuffer;

pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    grid: Option<EscapeGrid>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            grid: None,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &ExplorerConfig) -> Result<(), Box<dyn std::error::Error>> {
        let request = &config.request;
        let window = request.window;

        info!(
            canvas_width = config.canvas.width_px(),
            max_steps = request.max_steps.get(),
            time = request.time,
            top_left_real = window.top_left().real,
            top_left_imag = window.top_left().imag,
            width = window.width(),
            re_z0 = %request.bindings.z0_real,
            im_z0 = %request.bindings.z0_imag,
            re_c = %request.bindings.c_real,
            im_c = %request.bindings.c_imag,
            "rendering frame"
        );

        let start = Instant::now();
        let grid = render_frame(config.canvas, request);
        info!(duration = ?start.elapsed(), "frame computed");

        let colour_map = TealColourMap::new(request.max_steps);
        info!(colour_map = colour_map.display_name(), "colouring frame");

        self.buffer = Some(generate_pixel_buffer(&grid, &colour_map)?);
        self.grid = Some(grid);

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Option<&EscapeGrid> {
        self.grid.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!(path = %filepath.as_ref().display(), "saved frame");
        }

        Ok(())
    }
}
