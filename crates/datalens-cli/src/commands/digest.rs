//! Digest command - print the plain-text digest.

use crate::cli::DataArgs;

pub fn run(data: DataArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_, summary) = super::summarize(&data)?;
    println!("{}", summary.digest());
    Ok(())
}
