//! `krishictl domains` - domain table with registered agents

use anyhow::Result;
use krishi_router::Config;
use krishi_shared::Domain;

pub fn run(config: &Config) -> Result<()> {
    let registry = config.build_registry()?;

    println!("{:<18} {:<24} {:<12} AGENTS", "DOMAIN", "TOPIC", "CLASS");
    for domain in Domain::ALL {
        let class = domain
            .class()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let agents = registry.lookup(domain);
        let agents = if agents.is_empty() {
            "-".to_string()
        } else {
            agents.join(", ")
        };
        println!(
            "{:<18} {:<24} {:<12} {}",
            domain.as_str(),
            domain.label(),
            class,
            agents
        );
    }
    Ok(())
}
