//! Showcasing batch creation in the default temporary directory.

use fs_tempfile::{Error, NameSpec, DEFAULT_MAX_TRY};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let name = NameSpec::new().prefix("batch-").extension("tmp");
    let paths = fs_tempfile::temporary_files(3, &name, DEFAULT_MAX_TRY)?;
    for path in &paths {
        println!("Created {}", path.display());
        std::fs::remove_file(path)?;
    }

    // Zero attempts per file can never succeed
    match fs_tempfile::temporary_files(3, &name, 0) {
        Err(Error::Io(failure)) => {
            println!("Expected failure: {}", failure);
            // Nothing to roll back, the first file already failed
            for path in failure.created() {
                std::fs::remove_file(path)?;
            }
        }
        other => println!("Unexpected result: {:?}", other),
    }

    Ok(())
}
