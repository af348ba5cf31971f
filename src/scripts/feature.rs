// src/scripts/feature.rs
use crate::config::ScaffoldKind;
use std::ffi::OsString;
use crate::scripts::scaffold;

pub fn run(name: OsString) -> anyhow::Result<()> {
    // Undecodable bytes become U+FFFD, which naming treats as a separator.
    let name = name.to_string_lossy();
    let report = scaffold::run_in_current_dir(ScaffoldKind::Feature, &name)?;

    println!();
    println!("🎉 Feature '{}' structure created in {}", name, report.relative_dir.display());
    println!("   View:       {}", report.names.view_class);
    println!("   Controller: {}", report.names.controller_class);
    Ok(())
}
