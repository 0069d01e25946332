use mandelterm::{
    ExplorerConfig, ExplorerController, TerminalFrameSink, TerminalKeySource, TerminalSession,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let session = TerminalSession::enter()?;
    let (rows, cols) = session.size()?;

    let mut controller = ExplorerController::new(
        ExplorerConfig::default(),
        rows,
        cols,
        TerminalFrameSink::new(),
        TerminalKeySource::new(),
    )?;

    controller.run()?;

    Ok(())
}
