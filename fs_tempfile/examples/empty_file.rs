//! Showcasing empty file creation in a chosen directory.
//!
//! Run with `RUST_LOG=debug` to see the attempts.

use fs_tempfile::{NameSpec, DEFAULT_MAX_TRY};

fn main() -> std::io::Result<()> {
    env_logger::init();

    // Creating an empty file in the current working directory
    let name = NameSpec::new().prefix("romain").suffix("neutron").extension("io");
    let path = fs_tempfile::empty_file_in(".", &name, DEFAULT_MAX_TRY)?;
    println!("Created {}", path.display());

    // The file is ours, nobody deletes it for us
    std::fs::remove_file(&path)?;

    // A missing directory fails without any attempts
    if let Err(err) = fs_tempfile::empty_file_in("./no-such-dir", &name, DEFAULT_MAX_TRY) {
        println!("Expected failure: {}", err);
    }

    Ok(())
}
