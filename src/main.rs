use fractal_field::{CliController, PpmFilePresenter, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut controller = CliController::new(PpmFilePresenter::new(), RenderConfig::default());

    controller.generate()?;
    controller.write("output")?;

    Ok(())
}
