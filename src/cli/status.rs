use crate::error::Result;
use crate::settings::{load_settings, settings_path};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let path = settings_path();

    println!(
        "User:       {}",
        if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
    );
    println!("Data dir:   {}", settings.data_dir);
    println!("Format:     {}", settings.default_format);
    if path.exists() {
        println!("Settings:   {}", path.display());
    } else {
        println!();
        println!("No settings file yet. Run `tally init` to create one.");
    }
    Ok(())
}
