//! Chat command - interactive question/answer loop with history.

use std::io::{self, BufRead, Write};
use std::path::Path;

use windlab_ai::{AnalysisSession, ConversationEntry, GenConfig, OllamaClient};

pub(crate) async fn run(data_path: &Path, config: GenConfig) -> miette::Result<()> {
    let summary = super::load_summary(data_path)?;

    println!("{}", summary.text());
    println!("Ask questions about the data. Commands: history, quit\n");

    let style = config.style;
    let client = OllamaClient::new(config);
    let mut session = AnalysisSession::new(client, style, summary.text());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| miette::miette!("{}", e))?;

        let Some(line) = lines.next() else { break };
        let question = line.map_err(|e| miette::miette!("{}", e))?;
        let question = question.trim();

        match question {
            "" => continue,
            "quit" | "exit" => break,
            "history" => {
                if session.history().next().is_none() {
                    println!("(no questions asked yet)\n");
                }
                for entry in session.history() {
                    println!("Q: {}", entry.question);
                    println!("A: {}\n", entry.response);
                }
                continue;
            }
            _ => {}
        }

        println!("AI is analyzing your data...");

        // Failures land in the history too, rendered as the message the
        // user saw; retry is just asking again.
        let response = match session.ask(question).await {
            Ok(answer) => answer,
            Err(e) => e.to_string(),
        };
        println!("\n{}\n", response);

        session.push(ConversationEntry {
            question: question.to_string(),
            response,
        });
    }

    Ok(())
}
