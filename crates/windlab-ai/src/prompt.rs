//! Prompt composition for wind tunnel analysis.

use crate::config::PromptStyle;

/// Fixed prompt for the connectivity probe; trivial on purpose so a reply
/// proves the server and model are reachable.
pub const PROBE_PROMPT: &str = "Hello, respond with 'AI is working!'";

const PREAMBLE: &str = "You are analyzing wind tunnel test data. Here is the dataset summary:";

const VERBOSE_DIRECTIVE: &str = "Please provide a clear, technical analysis based on this \
aerodynamic data. Focus on relationships between angle of attack (AoA), lift, drag, and \
aerodynamic coefficients (Cl, Cd).";

const CONCISE_DIRECTIVE: &str = "Please provide a clear, CONCISE technical analysis based on \
this aerodynamic data. Keep your response brief (2-3 sentences max). Focus on key relationships \
between angle of attack (AoA), lift, drag, and aerodynamic coefficients (Cl, Cd). Be direct \
and specific.";

/// Compose the full prompt: preamble, dataset summary, the literal user
/// question, and the style's closing directive.
///
/// Deterministic string concatenation; identical inputs always yield an
/// identical prompt.
pub fn compose(style: PromptStyle, summary_text: &str, question: &str) -> String {
    let directive = match style {
        PromptStyle::Verbose => VERBOSE_DIRECTIVE,
        PromptStyle::Concise => CONCISE_DIRECTIVE,
    };

    format!(
        "{PREAMBLE}\n\n{summary_text}\n\nUser question: {question}\n\n{directive}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_contains_all_parts() {
        let prompt = compose(
            PromptStyle::Verbose,
            "- Data Points: 2",
            "What AoA gives max lift?",
        );

        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.contains("- Data Points: 2"));
        assert!(prompt.contains("User question: What AoA gives max lift?"));
        assert!(prompt.ends_with(VERBOSE_DIRECTIVE));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose(PromptStyle::Concise, "summary", "question");
        let b = compose(PromptStyle::Concise, "summary", "question");
        assert_eq!(a, b);
    }

    #[test]
    fn test_styles_differ_only_in_directive() {
        let verbose = compose(PromptStyle::Verbose, "s", "q");
        let concise = compose(PromptStyle::Concise, "s", "q");

        assert_ne!(verbose, concise);
        assert!(concise.contains("2-3 sentences max"));
        assert!(!verbose.contains("2-3 sentences max"));
        // Same shape up to the closing directive
        assert_eq!(
            verbose.strip_suffix(VERBOSE_DIRECTIVE),
            concise.strip_suffix(CONCISE_DIRECTIVE)
        );
    }
}
