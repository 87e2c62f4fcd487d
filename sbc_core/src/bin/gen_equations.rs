//! Regenerate EQUATIONS.md from the equation registry.
//!
//! ```bash
//! cargo run -p sbc_core --bin gen-equations
//! ```
//!
//! Run from the workspace root; writes `sbc_core/src/equations/EQUATIONS.md`.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use sbc_core::equations::generate_equations_markdown;

const OUTPUT_PATH: &str = "sbc_core/src/equations/EQUATIONS.md";

fn main() -> ExitCode {
    let markdown = generate_equations_markdown();
    let output_path = Path::new(OUTPUT_PATH);

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            ExitCode::FAILURE
        }
    }
}
