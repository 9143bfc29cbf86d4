//! Info command - show the active configuration and dataset schema.

use std::path::Path;

use windlab_ai::{GenConfig, PromptStyle};

pub(crate) fn run(data_path: &Path, config: &GenConfig) -> miette::Result<()> {
    println!("Windlab - Wind Tunnel Data Explorer\n");

    println!("Inference endpoint: {}/api/generate", config.base_url);
    println!("Model:              {}", config.model);
    println!("Timeout:            {:?}", config.timeout);
    let style = match config.style {
        PromptStyle::Verbose => "verbose (unconstrained answers)",
        PromptStyle::Concise => "concise (2-3 sentences, capped length)",
    };
    println!("Prompt style:       {}", style);
    if let Some(n) = config.num_predict {
        println!("Max tokens:         {}", n);
    }
    if let Some(t) = config.temperature {
        println!("Temperature:        {}", t);
    }

    println!("\nDataset: {}", data_path.display());
    println!("  AoA (deg)  - angle of attack in degrees");
    println!("  Lift (mN)  - lift force in millinewtons");
    println!("  Cl         - lift coefficient (dimensionless)");
    println!("  Drag (mN)  - drag force in millinewtons");
    println!("  Cd         - drag coefficient (dimensionless)");

    Ok(())
}
