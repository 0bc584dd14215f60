use std::path::Path;

use worldclock_core::Config;

use super::CmdResult;
use crate::tui;

pub fn run(config_path: &Path) -> CmdResult {
    let config = Config::load_from(config_path)?;
    tui::run(config, config_path.to_path_buf())
}
