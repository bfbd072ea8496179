mod common;
mod selector;

use log::{debug, error};
use selector::LogSelector;
use std::io;

fn try_main() -> anyhow::Result<()> {
    env_logger::init();
    let selector = LogSelector::new();
    debug!("selecting lines from {}", selector.input_path().display());
    let stdout = io::stdout();
    selector.run(io::BufWriter::new(stdout.lock()))?;
    Ok(())
}

fn main() {
    if let Err(error) = try_main() {
        let mut msg = format!("{}", error);
        for cause in error.chain().skip(1) {
            msg += &format!("\n\tCaused by: {}", cause);
        }
        error!("{}", msg);
        std::process::exit(1);
    }
}
