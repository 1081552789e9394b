//! CLI logic for the deparc dependency diagram tool.
//!
//! Reads a dependency document from a file or standard input and writes
//! the rendered SVG to a file or standard output.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::info;

use deparc::{DepArcError, DiagramBuilder};

/// Run the deparc CLI application
///
/// # Errors
///
/// Returns `DepArcError` for:
/// - I/O errors reading the input or writing the output
/// - Configuration loading errors
/// - Parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), DepArcError> {
    info!(
        input_path = args.input_path().unwrap_or("<stdin>"),
        output_path = args.output.as_deref().unwrap_or("<stdout>");
        "Processing document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = read_input(args.input_path())?;

    let builder = DiagramBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let svg = builder.render_svg(&document)?;

    write_output(args.output.as_deref(), &svg)?;

    info!("SVG exported successfully");

    Ok(())
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().lock().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn write_output(path: Option<&str>, svg: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, svg),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()
        }
    }
}
