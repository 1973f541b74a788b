//! Output formatters for tag reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, TagExtractorError};
use crate::output::report::TagReport;
use colored::{Color, Colorize};
use log::info;
use std::path::Path;

/// Trait for rendering a tag report
pub trait OutputFormatter {
    fn format_report(&self, report: &TagReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Aligned table for the terminal
pub struct ConsoleFormatter {
    use_colors: bool,
    column_width: usize,
}

/// Tab-separated layout used when saving to disk
pub struct TextFormatter;

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    text_formatter: TextFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, column_width: usize) -> Self {
        Self { use_colors, column_width }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn pad(&self, text: &str) -> String {
        format!("{:<width$}", text, width = self.column_width)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &TagReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Extracting from: {}\n\n",
            self.colorize(&report.metadata.document_name, Color::Cyan)
        ));

        // Pad before coloring so escape codes don't skew the columns
        output.push_str(&format!(
            "{} {}\n",
            self.colorize(&self.pad("Tag"), Color::Blue),
            self.colorize("Frequency", Color::Blue)
        ));
        output.push_str(&format!("{} {}\n", self.pad("----"), "---------"));

        for entry in &report.tags {
            output.push_str(&format!("{} {}\n", self.pad(&entry.tag), entry.frequency));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &TagReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Extracting from: {}\n", report.metadata.document_name));
        output.push('\n');
        output.push_str("Tag\tFrequency\n");
        for entry in &report.tags {
            output.push_str(&format!("{}\t{}\n", entry.tag, entry.frequency));
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &TagReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &TagReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# Tags: `{}`\n\n", report.metadata.document_name));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Stop words:** {} ({} entries)\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.stop_words,
                report.metadata.stop_word_count
            ));
            output.push_str(&format!(
                "**Distinct tags:** {} | **Total occurrences:** {}\n\n",
                report.summary.distinct_tags, report.summary.total_occurrences
            ));
        }

        output.push_str("| Tag | Frequency |\n");
        output.push_str("|-----|----------:|\n");
        for entry in &report.tags {
            output.push_str(&format!("| {} | {} |\n", entry.tag, entry.frequency));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, 20)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, column_width: usize) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, column_width),
            text_formatter: TextFormatter,
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::with_options(output.color_output, output.pretty_json, output.tag_column_width)
    }

    pub fn generate_report(&self, report: &TagReport, format: OutputFormat) -> Result<String> {
        self.formatter_for(format).format_report(report)
    }

    /// Write `report` to `path`. Console output is saved in the text layout.
    pub fn save_report(&self, report: &TagReport, format: OutputFormat, path: &Path) -> Result<()> {
        if report.is_empty() {
            return Err(TagExtractorError::EmptyReport);
        }

        let format = match format {
            OutputFormat::Console => OutputFormat::Text,
            other => other,
        };
        let content = self.generate_report(report, format)?;
        save_report_to_file(&content, path)?;
        info!("Saved {} tags to {}", report.tags.len(), path.display());
        Ok(())
    }

    fn formatter_for(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Text => &self.text_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TagExtractorError::io_at(parent, e))?;
        }
    }
    fs::write(file_path, content).map_err(|e| TagExtractorError::io_at(file_path, e))?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Console | OutputFormat::Text => "tags_output.txt",
        OutputFormat::Json => "tags_output.json",
        OutputFormat::Markdown => "tags_output.md",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StopWordSource;
    use crate::processing::{ExtractionResult, TagFrequencyMap};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_report(words: &[&str]) -> TagReport {
        let mut tags = TagFrequencyMap::new();
        for word in words {
            tags.record(word);
        }
        TagReport::from_result(&ExtractionResult {
            document_name: "story.txt".to_string(),
            document_path: PathBuf::from("story.txt"),
            stop_word_source: StopWordSource::Bundled(PathBuf::from("stops.txt")),
            stop_word_count: 2,
            tags,
        })
    }

    #[test]
    fn test_text_layout() {
        let report = sample_report(&["sat", "cat", "mat", "cat", "ran"]);
        let text = TextFormatter.format_report(&report).unwrap();

        assert_eq!(
            text,
            "Extracting from: story.txt\n\nTag\tFrequency\ncat\t2\nmat\t1\nran\t1\nsat\t1\n"
        );
    }

    #[test]
    fn test_console_layout_without_colors() {
        let report = sample_report(&["cat", "cat", "mat"]);
        let console = ConsoleFormatter::new(false, 20).format_report(&report).unwrap();

        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines[0], "Extracting from: story.txt");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], format!("{:<20} {}", "Tag", "Frequency"));
        assert_eq!(lines[3], format!("{:<20} {}", "----", "---------"));
        assert_eq!(lines[4], format!("{:<20} {}", "cat", 2));
        assert_eq!(lines[5], format!("{:<20} {}", "mat", 1));
    }

    #[test]
    fn test_json_contains_ordered_tags() {
        let report = sample_report(&["zebra", "apple", "apple"]);
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tags"][0]["tag"], "apple");
        assert_eq!(value["tags"][0]["frequency"], 2);
        assert_eq!(value["tags"][1]["tag"], "zebra");
        assert_eq!(value["summary"]["total_occurrences"], 3);
        assert_eq!(value["metadata"]["stop_words"]["kind"], "bundled");
    }

    #[test]
    fn test_markdown_table() {
        let report = sample_report(&["cat"]);
        let markdown = MarkdownFormatter::new(false).format_report(&report).unwrap();

        assert!(markdown.starts_with("# Tags: `story.txt`"));
        assert!(markdown.contains("| Tag | Frequency |"));
        assert!(markdown.contains("| cat | 1 |"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, true, 20);
        let report = sample_report(&["cat"]);

        let text = generator.generate_report(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("Tag\tFrequency"));
        assert_eq!(generator.formatter_for(OutputFormat::Json).supports_format(), OutputFormat::Json);
    }

    #[test]
    fn test_save_console_uses_text_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("tags_output.txt");
        let generator = ReportGenerator::with_options(true, true, 20);
        let report = sample_report(&["cat", "mat"]);

        generator.save_report(&report, OutputFormat::Console, &path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "Extracting from: story.txt\n\nTag\tFrequency\ncat\t1\nmat\t1\n");
    }

    #[test]
    fn test_save_refuses_empty_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags_output.txt");
        let report = sample_report(&[]);

        let result = ReportGenerator::default().save_report(&report, OutputFormat::Text, &path);
        assert!(matches!(result, Err(TagExtractorError::EmptyReport)));
        assert!(!path.exists());
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(OutputFormat::Console), "tags_output.txt");
        assert_eq!(suggest_filename(OutputFormat::Json), "tags_output.json");
        assert_eq!(suggest_filename(OutputFormat::Markdown), "tags_output.md");
    }
}
