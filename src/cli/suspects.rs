use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use detective_quest::{
    Config, SuspectRegistry, case,
    domain::{ClueText, SuspectView, registry::BUCKET_COUNT},
    report,
    terminal::{Colorize, is_narrow},
};
use serde_json::json;
use tracing::instrument;

#[derive(Debug, Default, Parser)]
#[command(about = "Show the suspects on file and the clues citing them")]
pub struct Suspects {
    /// Show only the suspect with this exact name
    #[arg(long, conflicts_with = "most_cited")]
    name: Option<String>,

    /// Show only the most cited suspect
    #[arg(long)]
    most_cited: bool,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Suspects {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let registry = case::registry(config.overflow)?;

        let Some(selected) = self.select(&registry) else {
            eprintln!(
                "Suspect '{}' was not found.",
                self.name.as_deref().unwrap_or_default()
            );
            process::exit(1);
        };

        self.write(&registry, &selected, is_narrow(), &mut io::stdout().lock())
    }

    /// The suspects to report, or `None` when a named suspect is not on file.
    fn select<'a>(&self, registry: &'a SuspectRegistry) -> Option<Vec<SuspectView<'a>>> {
        if let Some(name) = &self.name {
            registry.find_suspect(name).map(|suspect| vec![suspect])
        } else if self.most_cited {
            Some(registry.most_cited().into_iter().collect())
        } else {
            Some(registry.iter().collect())
        }
    }

    fn write(
        &self,
        registry: &SuspectRegistry,
        selected: &[SuspectView<'_>],
        narrow: bool,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => Self::output_json(selected, out)?,
            OutputFormat::Table if self.most_cited => {
                report::write_most_cited(out, selected.first().copied())?;
            }
            OutputFormat::Table if narrow => Self::output_narrow(selected, out)?,
            OutputFormat::Table => Self::output_table(registry, selected, out)?,
        }
        Ok(())
    }

    fn output_json(selected: &[SuspectView<'_>], out: &mut impl Write) -> anyhow::Result<()> {
        let suspects: Vec<_> = selected
            .iter()
            .map(|suspect| {
                json!({
                    "name": suspect.name(),
                    "citations": suspect.citations(),
                    "bucket": suspect.bucket(),
                    "clues": suspect.clues().collect::<Vec<_>>(),
                })
            })
            .collect();

        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&json!({ "suspects": suspects }))?
        )?;
        Ok(())
    }

    fn output_narrow(selected: &[SuspectView<'_>], out: &mut impl Write) -> io::Result<()> {
        if selected.is_empty() {
            return writeln!(out, "No suspects registered yet.");
        }

        for suspect in selected {
            writeln!(out, "{}: {}", suspect.name(), suspect.citations())?;
            for clue in suspect.clues() {
                writeln!(out, "  - {clue}")?;
            }
        }
        Ok(())
    }

    fn output_table(
        registry: &SuspectRegistry,
        selected: &[SuspectView<'_>],
        out: &mut impl Write,
    ) -> io::Result<()> {
        if selected.is_empty() {
            return writeln!(out, "No suspects registered yet.");
        }

        writeln!(out, "{:<6} {:<12} {:<9} Clues", "Bucket", "Suspect", "Citations")?;
        writeln!(out, "{}", "─".repeat(60).dim())?;
        for suspect in selected {
            let clues: Vec<_> = suspect.clues().map(ClueText::as_str).collect();
            writeln!(
                out,
                "{:<6} {:<12} {:<9} {}",
                suspect.bucket(),
                suspect.name(),
                suspect.citations(),
                clues.join("; ")
            )?;
        }
        writeln!(out)?;

        let used = (0..BUCKET_COUNT)
            .filter(|&bucket| registry.bucket(bucket).next().is_some())
            .count();
        writeln!(
            out,
            "{}",
            format!(
                "{} suspect(s), {} citation(s), {used}/{BUCKET_COUNT} buckets in use",
                registry.len(),
                registry.total_citations()
            )
            .dim()
        )
    }
}

#[cfg(test)]
mod tests {
    use detective_quest::domain::OverflowPolicy;
    use test_case::test_case;

    use super::*;

    fn seeded() -> SuspectRegistry {
        case::registry(OverflowPolicy::Reject).unwrap()
    }

    fn parse(args: &[&str]) -> Suspects {
        Suspects::try_parse_from(std::iter::once("suspects").chain(args.iter().copied())).unwrap()
    }

    fn render(command: &Suspects, registry: &SuspectRegistry, narrow: bool) -> String {
        let selected = command.select(registry).unwrap();
        let mut buffer = Vec::new();
        command
            .write(registry, &selected, narrow, &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test_case(&["--name", "Dr. Silva"], &["Dr. Silva"]; "named suspect")]
    #[test_case(&["--most-cited"], &["Carlos"]; "most cited")]
    #[test_case(&[], &["Marina", "Dr. Silva", "Carlos"]; "everyone in bucket order")]
    fn selects(args: &[&str], expected: &[&str]) {
        let registry = seeded();
        let selected = parse(args).select(&registry).unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn unknown_name_selects_nothing() {
        let registry = seeded();
        assert!(parse(&["--name", "Nobody"]).select(&registry).is_none());
    }

    #[test]
    fn most_cited_as_json() {
        let registry = seeded();
        let text = render(&parse(&["--most-cited", "--output", "json"]), &registry, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            json!({
                "suspects": [{
                    "name": "Carlos",
                    "citations": 3,
                    "bucket": 2,
                    "clues": ["Pneu furado", "Carta amorosa", "Faca ensanguentada"],
                }]
            })
        );
    }

    #[test]
    fn empty_json_lists_no_suspects() {
        let registry = SuspectRegistry::new();
        let text = render(&parse(&["--output", "json"]), &registry, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, json!({ "suspects": [] }));
    }

    #[test]
    fn wide_table_has_a_row_per_suspect() {
        let registry = seeded();
        let text = render(&Suspects::default(), &registry, false);

        assert!(text.starts_with("Bucket Suspect      Citations Clues\n"));
        assert!(text.contains("2      Carlos       3         Pneu furado; Carta amorosa; Faca ensanguentada\n"));
        assert!(text.contains("0      Marina       2"));
        assert!(text.contains("3 suspect(s), 7 citation(s), 3/10 buckets in use"));
    }

    #[test]
    fn narrow_table_lists_clues_below_each_name() {
        let registry = seeded();
        let text = render(&parse(&["--name", "Carlos"]), &registry, true);

        assert_eq!(
            text,
            "Carlos: 3\n  - Pneu furado\n  - Carta amorosa\n  - Faca ensanguentada\n"
        );
    }

    #[test_case(true; "narrow")]
    #[test_case(false; "wide")]
    fn empty_table_says_so(narrow: bool) {
        let registry = SuspectRegistry::new();
        let text = render(&Suspects::default(), &registry, narrow);
        assert_eq!(text, "No suspects registered yet.\n");
    }

    #[test]
    fn most_cited_table_uses_the_analysis_box() {
        let registry = seeded();
        let text = render(&parse(&["--most-cited"]), &registry, false);

        assert!(text.contains("MOST LIKELY SUSPECT"));
        assert!(text.contains("Clues citing them: 3"));
    }
}
