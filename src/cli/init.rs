use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{expand_home, load_settings, save_settings};

pub fn run(data_dir: Option<String>, user: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = expand_home(&dir).to_string_lossy().to_string();
    }
    if let Some(name) = user {
        settings.user_name = name;
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(resolved.join("statements"))?;
    std::fs::create_dir_all(resolved.join("exports"))?;

    println!("Initialized tally at {}", resolved.display());
    Ok(())
}
