//! Ask command - one question, one answer.

use std::path::Path;

use windlab_ai::{AnalysisSession, GenConfig, OllamaClient};

pub(crate) async fn run(data_path: &Path, question: &str, config: GenConfig) -> miette::Result<()> {
    let summary = super::load_summary(data_path)?;

    let style = config.style;
    let client = OllamaClient::new(config);
    let session = AnalysisSession::new(client, style, summary.text());

    println!("AI is analyzing your data...\n");

    // Inference failures are shown in place of the answer; retry is
    // re-running the command.
    match session.ask(question).await {
        Ok(answer) => println!("{}", answer),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
