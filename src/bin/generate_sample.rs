use std::path::PathBuf;

use anyhow::Result;

use ram_clocker::data::sample::write_sample_data;

fn main() -> Result<()> {
    env_logger::init();

    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data"));

    let paths = write_sample_data(&dir)?;
    for path in &paths {
        log::info!("wrote {}", path.display());
    }
    println!("Wrote {} sample CSV files to {}", paths.len(), dir.display());
    Ok(())
}
