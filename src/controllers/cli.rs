use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::controllers::config::RenderConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate::FractalGenerator;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::colour_maps::factory::styled_colour_map_factory;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_field::FractalField;
use crate::core::util::make_filename::make_filename;

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
    field: Option<FractalField>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        Self {
            presenter,
            config,
            field: None,
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&FractalField> {
        self.field.as_ref()
    }

    pub fn generate(&mut self) -> Result<&FractalField, Box<dyn Error>> {
        let config = &self.config;
        let resolution = config.size.resolution()?;
        let generator = FractalGenerator::new(config.fractal_name.clone(), config.rule.clone())
            .with_threshold(config.threshold);

        info!("Rendering {} ({})", config.name, generator.description());
        info!("Grid size: {}", resolution);
        info!("Iterations: {}", config.niters);
        info!("Threads: {}", rayon::current_num_threads());

        let start = Instant::now();
        let field = generator.generate(
            &config.name,
            config.region,
            config.niters,
            resolution,
            None,
        )?;
        info!("Duration: {:?}", start.elapsed());

        Ok(self.field.insert(field))
    }

    /// Colours the current field and writes it to `dir`, expanding the
    /// configured output template with [`make_filename`]. Returns the written
    /// path, or `None` before [`CliController::generate`] has run.
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<Option<PathBuf>, Box<dyn Error>> {
        let Some(field) = &self.field else {
            return Ok(None);
        };

        let buffer = self.render(field)?;
        let filename = make_filename(
            &self.config.output_template,
            field.name(),
            field.resolution(),
            self.config.size.density(),
        );
        let path = dir.as_ref().join(filename);

        self.presenter.present(&buffer, &path)?;
        info!("Saved to {}", path.display());

        Ok(Some(path))
    }

    fn render(&self, field: &FractalField) -> Result<PixelBuffer, Box<dyn Error>> {
        let plot = field.plottable(self.config.smoothed, self.config.scaled)?;
        let colour_map = styled_colour_map_factory(self.config.colour_map);

        Ok(generate_pixel_buffer(&plot, &colour_map)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::config::OutputSize;
    use crate::core::data::resolution::Resolution;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, Resolution)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.resolution()));
            Ok(())
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            name: "small".to_string(),
            niters: 30,
            size: OutputSize::Points(Resolution::new(24, 16)),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_is_a_no_op() {
        let presenter = RecordingPresenter::default();
        let controller = CliController::new(&presenter, small_config());

        assert_eq!(controller.write("out").unwrap(), None);
        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliController::new(&presenter, small_config());

        let field = controller.generate().unwrap();
        assert_eq!(field.resolution(), Resolution::new(24, 16));
        assert_eq!(field.desc(), "mandelbrot: z -> z^2 + c");

        let path = controller.write("out").unwrap();

        assert_eq!(path, Some(PathBuf::from("out").join("small_24x16.ppm")));
        assert_eq!(
            presenter.written.borrow().as_slice(),
            &[(PathBuf::from("out").join("small_24x16.ppm"), Resolution::new(24, 16))]
        );
    }

    #[test]
    fn test_physical_size_names_file_with_dpi() {
        let presenter = RecordingPresenter::default();
        let config = RenderConfig {
            name: "print".to_string(),
            niters: 10,
            size: OutputSize::Physical {
                width: 2.0,
                height: 1.5,
                density: 10.0,
            },
            ..RenderConfig::default()
        };
        let mut controller = CliController::new(&presenter, config);

        controller.generate().unwrap();
        let path = controller.write("out").unwrap();

        assert_eq!(path, Some(PathBuf::from("out").join("print_2x1.5_10dpi.ppm")));
    }

    #[test]
    fn test_output_template_comes_from_config() {
        let presenter = RecordingPresenter::default();
        let config = RenderConfig {
            output_template: ".pnm".to_string(),
            ..small_config()
        };
        let mut controller = CliController::new(&presenter, config);
        controller.generate().unwrap();

        assert_eq!(
            controller.write("out").unwrap(),
            Some(PathBuf::from("out").join("small_24x16.pnm"))
        );

        let named = RenderConfig {
            output_template: "cover.ppm".to_string(),
            ..small_config()
        };
        let mut controller = CliController::new(&presenter, named);
        controller.generate().unwrap();

        assert_eq!(
            controller.write("out").unwrap(),
            Some(PathBuf::from("out").join("cover.ppm"))
        );
    }

    #[test]
    fn test_generate_fails_for_empty_size() {
        let presenter = RecordingPresenter::default();
        let config = RenderConfig {
            size: OutputSize::Points(Resolution::new(0, 0)),
            ..small_config()
        };
        let mut controller = CliController::new(&presenter, config);

        assert!(controller.generate().is_err());
        assert!(controller.field().is_none());
    }
}
