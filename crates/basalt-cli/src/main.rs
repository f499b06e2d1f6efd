//! Basalt CLI - inspect the operator catalogue and render kernel units.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use basalt_codegen::{resolve_data_type, resolve_form, resolve_operator, KernelRequest};
use basalt_core::DataType;
use basalt_operators::BinaryOperator;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "basalt")]
#[command(about = "Binary-operation kernel source generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the operator catalogue
    Catalogue,
    /// Render a specialized kernel translation unit
    Render {
        /// Operator name (exact catalogue name, e.g. "Add", "RSub")
        #[arg(value_name = "OPERATOR")]
        operator: String,

        /// Output element type (e.g. "f64")
        #[arg(long, default_value = "f64")]
        out: String,

        /// Left operand element type
        #[arg(long, default_value = "f64")]
        lhs: String,

        /// Right operand element type
        #[arg(long, default_value = "f64")]
        rhs: String,

        /// Kernel form: vv, vs or sv
        #[arg(long, default_value = "vv")]
        form: String,

        /// Trait preamble file to prepend (driver-supplied header)
        #[arg(long, value_name = "FILE")]
        preamble: Option<PathBuf>,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalogue => cmd_catalogue(),
        Commands::Render {
            operator,
            out,
            lhs,
            rhs,
            form,
            preamble,
            output,
        } => cmd_render(&operator, &out, &lhs, &rhs, &form, preamble, output)?,
    }

    Ok(())
}

/// Print every operator with its reflection and classification.
fn cmd_catalogue() {
    println!("{:<16} {:<16} {:<12} {}", "name", "reflected", "family", "commutes");
    for op in BinaryOperator::ALL {
        let family = if op.is_comparison() {
            "comparison"
        } else {
            "arithmetic"
        };
        println!(
            "{:<16} {:<16} {:<12} {}",
            op.name(),
            op.reflected().name(),
            family,
            if op.commutes() { "yes" } else { "no" }
        );
    }
    println!();
    println!("element types: {}", type_names().join(", "));
}

fn type_names() -> Vec<&'static str> {
    DataType::ALL.iter().map(|t| t.name()).collect()
}

/// Render one specialized translation unit.
fn cmd_render(
    operator: &str,
    out: &str,
    lhs: &str,
    rhs: &str,
    form: &str,
    preamble: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let request = KernelRequest::new(
        resolve_operator(operator)?,
        resolve_data_type(out)?,
        resolve_data_type(lhs)?,
        resolve_data_type(rhs)?,
        resolve_form(form)?,
    );

    let preamble_text = match preamble {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preamble {}", path.display()))?,
        None => String::new(),
    };

    let unit = request.assemble(&preamble_text);

    match output {
        Some(path) => fs::write(&path, unit)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{unit}"),
    }

    Ok(())
}
