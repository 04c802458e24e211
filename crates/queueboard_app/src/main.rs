mod app;
mod effects;
mod logging;
mod page;
mod persist;
mod settings;

fn main() -> anyhow::Result<()> {
    logging::initialize();
    let settings = settings::Settings::from_env();
    app::run(settings)
}
