//! Ping command - verify the local inference service is reachable.

use windlab_ai::{GenConfig, OllamaClient};

pub(crate) async fn run(config: GenConfig) -> miette::Result<()> {
    println!(
        "Testing connection to {} (model {})...",
        config.base_url, config.model
    );

    let client = OllamaClient::new(config);
    match client.ping().await {
        Ok(response) => {
            println!("AI Connection Test: SUCCESS\n");
            println!("Response: {}", response);
        }
        Err(e) => {
            println!("AI Connection Test: FAILED\n");
            println!("Error: {}", e);
        }
    }

    Ok(())
}
