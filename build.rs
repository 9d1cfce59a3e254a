use camino::Utf8Path;
use std::{error::Error, fs};
use tgmbk_cfg::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let cfg = Config::default();

    let toml_path = Utf8Path::new("demos/config.toml");
    if let Some(parent) = toml_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string(&cfg)?;
    fs::write(toml_path, toml)?;

    println!("cargo:rerun-if-changed=tgmbk-cfg/src/config.rs");
    Ok(())
}
