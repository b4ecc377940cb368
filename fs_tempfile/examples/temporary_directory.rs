//! Showcasing temporary directory creation.

fn main() -> std::io::Result<()> {
    env_logger::init();

    let dir = fs_tempfile::temporary_directory(Some("workdir-"))?;
    println!("Created {}", dir.display());

    // Files can go right inside it
    let file = fs_tempfile::empty_file_in(&dir, &fs_tempfile::NameSpec::new(), 10)?;
    println!("Created {}", file.display());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
