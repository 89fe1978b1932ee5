//! Console output formatter for boardroom results

use boardroom_domain::{
    Answer, Ballot, CredentialSet, OutputFormat, ProviderSpec, ResultBundle,
};
use colored::Colorize;

/// Formats boardroom results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a result in the requested format
    pub fn render(result: &ResultBundle, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Winner => Self::format_winner_only(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result
    pub fn format(result: &ResultBundle) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Boardroom Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            result.query
        ));

        output.push_str(&Self::banner(result));
        output.push_str("\n\n");
        output.push_str(&result.winner_text);
        output.push_str("\n\n---\n");

        output.push_str(&format!(
            "{}\n",
            format!("**All {} Proposals:**", result.all_answers.len()).bold()
        ));
        for answer in result.all_answers.answers() {
            output.push_str(&Self::proposal(answer));
        }

        output.push_str(&Self::section_header("Vote Tally"));
        for (index, votes) in result.tally.iter() {
            let name = result
                .all_answers
                .candidate(index)
                .map(|a| a.provider.display_name())
                .unwrap_or_default();
            let line = format!("  {}. {:<10} {}", index, name, Self::votes(votes));
            if index == result.winner_index {
                output.push_str(&format!("{}\n", line.green().bold()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        let dropped: Vec<&Ballot> = result
            .ballots
            .iter()
            .filter(|b| b.choice().is_none())
            .collect();
        if !dropped.is_empty() {
            output.push_str(&format!("\n{}\n", "Uncounted votes:".yellow().bold()));
            for ballot in dropped {
                if let Ballot::Dropped { voter, reason } = ballot {
                    output.push_str(&format!("  * {}: {}\n", voter.display_name(), reason));
                }
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &ResultBundle) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the winner only (concise output)
    pub fn format_winner_only(result: &ResultBundle) -> String {
        format!("{}\n\n{}\n", Self::banner(result), result.winner_text)
    }

    /// Format the provider table for `--list-providers`
    pub fn format_providers(specs: &[ProviderSpec], credentials: &CredentialSet) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Configured providers:".cyan().bold()));

        for (position, spec) in specs.iter().enumerate() {
            let status = if credentials.is_active(&spec.id) {
                "active".green()
            } else {
                "no key".dimmed()
            };
            output.push_str(&format!(
                "  {}. {:<10} {:<14} {:<28} {}\n",
                position + 1,
                spec.id.as_str(),
                spec.transport.as_str(),
                spec.model_name,
                status
            ));
            if let Some(var) = &spec.api_key_env {
                output.push_str(&format!("     {} {}\n", "key:".dimmed(), var));
            }
        }

        output
    }

    fn banner(result: &ResultBundle) -> String {
        format!(
            "{} {} wins!",
            format!("**Boardroom Decision ({} votes):**", result.winning_votes)
                .cyan()
                .bold(),
            result.winner_provider.display_name().yellow().bold()
        )
    }

    fn proposal(answer: &Answer) -> String {
        let name = format!("**{}:**", answer.provider.display_name());
        let name = if answer.is_text() {
            name.yellow().bold()
        } else {
            name.red().bold()
        };
        format!("\n{}\n{}\n", name, answer.content())
    }

    fn votes(count: usize) -> String {
        if count == 1 {
            "1 vote".to_string()
        } else {
            format!("{} votes", count)
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_domain::{ProviderId, Question, RoundResult, VoteTally, default_specs};

    fn id(s: &str) -> ProviderId {
        ProviderId::from(s)
    }

    fn bundle() -> ResultBundle {
        colored::control::set_override(false);

        let round = RoundResult::new(vec![
            Answer::text(id("openai"), "Paris."),
            Answer::text(id("gemini"), "The capital of France is Paris."),
            Answer::error(id("mistral"), "Timeout after 30s"),
        ]);
        let ballots = vec![
            Ballot::from_reply(id("openai"), "2", 3),
            Ballot::from_reply(id("gemini"), "2", 3),
            Ballot::from_reply(id("mistral"), "banana", 3),
        ];
        let tally = VoteTally::from_ballots(3, &ballots);
        let question = Question::new("What is the capital of France?").unwrap();
        ResultBundle::assemble(&question, round, tally, ballots).unwrap()
    }

    #[test]
    fn test_format_full() {
        let output = ConsoleFormatter::format(&bundle());

        assert!(output.contains("**Boardroom Decision (2 votes):** GEMINI wins!"));
        assert!(output.contains("**All 3 Proposals:**"));
        assert!(output.contains("**OPENAI:**\nParis."));
        assert!(output.contains("**MISTRAL:**\nError from MISTRAL: Timeout after 30s"));
        assert!(output.contains("2. GEMINI"));
        assert!(output.contains("Uncounted votes:"));
        assert!(output.contains("MISTRAL: not a number"));
    }

    #[test]
    fn test_format_winner_only() {
        let output = ConsoleFormatter::format_winner_only(&bundle());

        assert_eq!(
            output,
            "**Boardroom Decision (2 votes):** GEMINI wins!\n\nThe capital of France is Paris.\n"
        );
    }

    #[test]
    fn test_format_json_round_trips_fields() {
        let output = ConsoleFormatter::render(&bundle(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["winner_index"], 2);
        assert_eq!(value["winner_provider"], "gemini");
        assert_eq!(value["all_answers"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_format_providers_marks_active() {
        colored::control::set_override(false);
        let creds = CredentialSet::new().with("openai", "sk-test");

        let output = ConsoleFormatter::format_providers(&default_specs(), &creds);

        let openai = output.lines().find(|l| l.contains("openai")).unwrap();
        assert!(openai.contains("active"));
        let groq = output.lines().find(|l| l.contains("groq")).unwrap();
        assert!(groq.contains("no key"));
        assert!(!output.contains("sk-test"));
    }
}
