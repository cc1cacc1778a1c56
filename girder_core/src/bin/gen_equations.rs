//! Generate EQUATIONS.md from the equation registry.
//!
//! This binary generates the equations reference documentation from the
//! centralized equation registry in girder_core.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! The generated file is written to `girder_core/src/equations/EQUATIONS.md`.

use std::path::Path;

use girder_core::equations::generate_equations_markdown;
use girder_core::file_io::write_atomic;

fn main() {
    println!("Generating EQUATIONS.md...");

    let markdown = generate_equations_markdown();

    // Relative to the workspace root
    let output_path = Path::new("girder_core/src/equations/EQUATIONS.md");

    match write_atomic(output_path, markdown.as_bytes()) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
