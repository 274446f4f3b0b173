use std::path::Path;

use blockmap_blocks::{MappingTable, ShapeReport};
use blockmap_io::{Result, load_records, write_mapping};

use crate::cli::{Cli, Command};
use crate::paths;

/// Execute the selected command and print its operator output. Errors are
/// returned unprinted; the caller reports them once.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Generate(args) => {
            let input = paths::resolve_input(args.input);
            let output = paths::resolve_output(args.output);
            let count = generate(&input, &output)?;
            println!("Generated mappings for {} blocks", count);
        }
        Command::Analyze(args) => {
            let input = paths::resolve_input(args.input);
            println!("{}", analyze(&input)?);
        }
    }
    Ok(())
}

/// Build the mapping table from `input` and write it to `output`.
/// Returns the number of entries written, null ones included.
pub fn generate(input: &Path, output: &Path) -> Result<usize> {
    let records = load_records(input)?;
    let table = MappingTable::from_records(&records);
    log::info!(
        "{} block(s) mapped to a category, {} without one",
        table.categorized_count(),
        table.len() - table.categorized_count()
    );
    write_mapping(output, &table)?;
    Ok(table.len())
}

pub fn analyze(input: &Path) -> Result<ShapeReport> {
    let records = load_records(input)?;
    Ok(ShapeReport::from_records(&records))
}
