//! Console output formatter for review results

use colored::{ColoredString, Colorize};
use reviewng_application::{
    EditDetails, ImportSummary, ReconcileReport, SubmitVoteOutcome,
};
use reviewng_domain::{Classification, Edit, EditStatus, StatisticsReport, UserId};
use serde::Serialize;

/// Formats use case results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_next(user: UserId, edit: Option<&Edit>) -> String {
        match edit {
            Some(edit) => format!(
                "{} {} (needs {} matching votes)\n",
                "Next edit:".cyan().bold(),
                edit.id.to_string().bold(),
                edit.required
            ),
            None => format!(
                "{}\n",
                format!("Nothing left to review for user {user}").dimmed()
            ),
        }
    }

    pub fn format_vote_outcome(outcome: &SubmitVoteOutcome) -> String {
        match outcome {
            SubmitVoteOutcome::Accepted { vote_id } => {
                format!("{} vote {} recorded\n", "v".green(), vote_id)
            }
            SubmitVoteOutcome::RequiresConfirmation { current } => format!(
                "{} this edit is already settled as {}; re-run with --confirm to record anyway\n",
                "!".yellow().bold(),
                Self::classification(*current)
            ),
        }
    }

    pub fn format_edit_details(details: &EditDetails) -> String {
        let review = &details.review;
        let tally = &review.tally;
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Edit {}", review.edit.id)));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            Self::status(review.status())
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Consensus:".cyan().bold(),
            Self::classification(review.consensus())
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Administrative:".cyan().bold(),
            review.edit.classification
        ));
        output.push_str(&format!(
            "{} constructive {} / vandalism {} / skip {} (required {})\n",
            "Votes:".cyan().bold(),
            tally.constructive,
            tally.vandalism,
            tally.skip,
            review.edit.required
        ));

        if !details.votes.is_empty() {
            output.push_str(&Self::section_header("Votes"));
            for vote in &details.votes {
                output.push_str(&format!(
                    "  #{:<6} user {:<8} {}",
                    vote.id,
                    vote.user_id,
                    Self::classification(vote.classification)
                ));
                if !vote.comment.is_empty() {
                    output.push_str(&format!("  {}", vote.comment.dimmed()));
                }
                output.push('\n');
            }
        }

        output
    }

    pub fn format_reconcile(report: &ReconcileReport) -> String {
        let mut output = format!(
            "{} {} settled, {} already cached, {} fetched, {} failed\n",
            "Reconcile:".cyan().bold(),
            report.candidates,
            report.already_cached,
            report.fetched.len().to_string().green(),
            if report.failed.is_empty() {
                "0".normal()
            } else {
                report.failed.len().to_string().red()
            }
        );
        for (edit, reason) in &report.failed {
            output.push_str(&format!("  {} edit {}: {}\n", "x".red(), edit, reason));
        }
        output
    }

    pub fn format_import(summary: &ImportSummary) -> String {
        format!(
            "{} {} created, {} already known, {} invalid lines\n",
            "Import:".cyan().bold(),
            summary.created.len().to_string().green(),
            summary.already_known,
            summary.invalid
        )
    }

    pub fn format_stats(report: &StatisticsReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Review Statistics"));
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            format!(
                "Generated {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S %Z")
            )
            .dimmed()
        ));

        output.push_str(&Self::section_header("Edit Groups"));
        output.push_str(&format!(
            "  {:<32} {:>6} {:>8} {:>8} {:>8}\n",
            "Name", "Weight", "Pending", "Partial", "Done"
        ));
        for group in &report.groups {
            output.push_str(&format!(
                "  {:<32} {:>6} {:>8} {:>8} {:>8}\n",
                group.name, group.weight, group.not_started, group.partial, group.done
            ));
        }

        output.push_str(&Self::section_header("Reviewers"));
        output.push_str(&format!(
            "  {:<24} {:>8} {:>10}\n",
            "Username", "Edits", "Accuracy"
        ));
        for user in &report.users {
            let accuracy = match user.accuracy_percentage {
                Some(pct) => format!("{:.1}% ({})", pct, user.accuracy_count),
                None => "-".to_string(),
            };
            let name = if user.admin {
                format!("{} (admin)", user.username)
            } else {
                user.username.clone()
            };
            output.push_str(&format!(
                "  {:<24} {:>8} {:>10}\n",
                name, user.edit_count, accuracy
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn classification(c: Classification) -> ColoredString {
        let text = c.to_string();
        match c {
            Classification::Constructive => text.green(),
            Classification::Vandalism => text.red(),
            Classification::Skip => text.yellow(),
            Classification::Unknown => text.dimmed(),
        }
    }

    fn status(s: EditStatus) -> ColoredString {
        let text = s.to_string();
        match s {
            EditStatus::Done => text.green(),
            EditStatus::Partial => text.yellow(),
            EditStatus::NotStarted => text.dimmed(),
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
