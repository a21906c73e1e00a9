//! Menu command - the interactive campaign log

use std::io;

use gloomlog::menu::Menu;
use gloomlog::storage::FileSaveStore;

/// Run the interactive menu on the terminal
pub fn menu(store: &FileSaveStore) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(store, stdin.lock(), io::stdout());
    menu.run()?;
    Ok(())
}
