//! New Agent Command
//!
//! Scaffold an agent package that passes the content gates.

use std::path::PathBuf;

use crate::config::ConfigLoader;
use crate::lint::{AgentTemplate, create_agent};
use crate::types::Result;

pub fn run(name: &str, description: Option<&str>, agents_dir: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load()?.lint;
    let agents_dir = agents_dir.unwrap_or_else(|| config.agents_dir.clone());

    let template = AgentTemplate::new(name, description)?;
    let dir = create_agent(&agents_dir, &config, &template)?;

    println!("✓ Created agent package '{}'", template.name);
    println!("  Directory: {}", dir.display());
    println!("  Prompt:    {}", dir.join(&config.prompt_file).display());
    println!(
        "  Agent:     {}",
        dir.join(&config.implementation_file).display()
    );
    println!();
    println!("Run 'dotagents lint --agent {}' to check it.", template.name);
    Ok(())
}
