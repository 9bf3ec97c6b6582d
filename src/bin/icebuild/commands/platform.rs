//! `icebuild platform` command

use anyhow::Result;

use icebuild::{HostEnvironment, Platform};

pub fn execute() -> Result<()> {
    let platform = Platform::detect()?;
    let host = HostEnvironment::current();

    println!("Platform: {}", platform);
    println!("  Arch:   {}", std::env::consts::ARCH);
    println!("  CPUs:   {}", host.cpu_count);

    if let Some(jobs) = host.num_jobs_override {
        println!("  Jobs:   {} (environment override)", jobs);
    }

    Ok(())
}
