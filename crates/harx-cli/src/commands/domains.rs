use anyhow::Result;
use std::path::Path;

/// Unique domains in a HAR file, sorted
pub fn sorted_domains(file: &Path) -> Result<Vec<String>> {
    let har = super::load_har(file)?;
    let mut domains: Vec<String> = harx_core::list_domains(&har).into_iter().collect();
    domains.sort();
    Ok(domains)
}

pub fn execute(file: &Path) -> Result<()> {
    tracing::info!("Listing domains in HAR file: {}", file.display());

    let domains = sorted_domains(file)?;

    println!("{}", console::style("Unique domains found:").bold());
    for domain in &domains {
        println!("  - {}", domain);
    }

    Ok(())
}
