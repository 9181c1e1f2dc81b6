mod app;
mod config;
mod events;
mod keymap;
mod logging;
mod prompt;
mod test_utils;
mod ui;

fn main() -> anyhow::Result<()> {
    logging::init();
    app::run()?;
    Ok(())
}
