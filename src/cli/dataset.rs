//! flowboard dataset command implementation.

use crate::error::Result;
use crate::output::OutputOptions;

use super::Session;

/// The dataset in the `--data` file format. `--json` wraps it in the
/// usual envelope; otherwise the bare file is printed.
pub fn run(session: Session, output: OutputOptions) -> Result<()> {
    let file = session.data.to_file();
    if output.json {
        return crate::output::emit_success(output, "dataset", &file, None);
    }
    if !output.quiet {
        println!("{}", serde_json::to_string_pretty(&file)?);
    }
    Ok(())
}
