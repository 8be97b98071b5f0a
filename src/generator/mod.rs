//! # Generator Module
//!
//! Application state for producing one letter per table row: the loaded rows, the current
//! template, the position of the next row to use, and the last generated letter.
//! Every call to [`LetterGenerator::generate`] renders the current row and moves on to the
//! next one, wrapping around after the last row.
pub(crate) mod exporter;
pub(crate) mod options;

pub use exporter::{DirectoryExporter, Exporter};
pub use options::{GeneratorOptions, NamedParam, OptionsError, DEFAULT_TEMPLATE};

use crate::error::{ResultMessage, RustyLetterError};
use crate::helpers::decoder::decode_template;
use crate::table::{normalize_rows, RawRow, Row};
use crate::template::Template;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No record survived normalization
    #[error("No valid data found in the uploaded table")]
    NoValidRows,

    /// The exporter failed to save the letter
    #[error("Export '{file_name}' failed: {source}")]
    ExportError {
        file_name: String,
        source: anyhow::Error,
    },
}

/// A rendered letter paired with the row it was produced from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLetter {
    pub content: String,
    pub row: Row,
}

/// Holds the state of one letter-generation session.
#[derive(Clone, Debug)]
pub struct LetterGenerator {
    options: GeneratorOptions,
    rows: Vec<Row>,
    columns: Vec<String>,
    template: Template,
    position: usize,
    letter: Option<GeneratedLetter>,
}

impl Default for LetterGenerator {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl LetterGenerator {
    /// Creates a session with no rows and the configured initial template.
    pub fn new(options: GeneratorOptions) -> Self {
        let template = Template::new(options.template.as_str());
        Self {
            options,
            rows: Vec::new(),
            columns: Vec::new(),
            template,
            position: 0,
            letter: None,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Replaces the loaded rows with the normalized form of `raw_rows`.
    ///
    /// The last letter is discarded and cycling restarts at the first row.
    ///
    /// # Returns
    ///
    /// * `Result<usize, RustyLetterError>` - Number of usable rows
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NoValidRows`] if no row survives normalization;
    /// the session is then left without rows.
    pub fn load_rows<'a, I>(&mut self, raw_rows: I) -> Result<usize, RustyLetterError>
    where
        I: IntoIterator<Item = &'a RawRow>,
    {
        self.letter = None;
        self.position = 0;
        self.rows = normalize_rows(raw_rows);
        if self.rows.is_empty() {
            warn!("table has no usable rows");
            Err(GeneratorError::NoValidRows)?;
        }
        debug!(rows = self.rows.len(), "loaded rows");
        Ok(self.rows.len())
    }

    /// Like [`LetterGenerator::load_rows`], also recording the table's header names.
    pub fn load_table<'a, H, I>(&mut self, headers: H, raw_rows: I) -> Result<usize, RustyLetterError>
    where
        H: IntoIterator<Item = &'a str>,
        I: IntoIterator<Item = &'a RawRow>,
    {
        let count = self.load_rows(raw_rows)?;
        self.columns = headers.into_iter().map(str::to_owned).collect();
        Ok(count)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Header names of the loaded table.
    pub fn available_columns(&self) -> &[String] {
        &self.columns
    }

    /// Pairs every available column with whether the template refers to it.
    pub fn column_usage(&self) -> Vec<(&str, bool)> {
        self.columns
            .iter()
            .map(|column| (column.as_str(), self.template.uses_column(column)))
            .collect()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn set_template(&mut self, text: impl Into<String>) {
        self.template = Template::new(text);
    }

    /// Replaces the template with the decoded contents of an uploaded file.
    pub fn load_template_bytes(&mut self, bytes: &[u8], code_page: Option<u16>) -> Result<(), RustyLetterError> {
        let text = decode_template(bytes, code_page).with_prefix("Read template failed")?;
        self.set_template(text);
        Ok(())
    }

    /// Index of the row the next [`LetterGenerator::generate`] call renders.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Renders the template against the first row without advancing.
    pub fn preview(&self) -> Option<String> {
        if self.template.is_empty() {
            return None;
        }
        self.rows.first().map(|row| self.template.render(row))
    }

    pub fn can_generate(&self) -> bool {
        !self.rows.is_empty() && !self.template.is_empty()
    }

    /// Renders the current row, remembers the result and advances to the next row.
    /// Does nothing when no rows are loaded.
    pub fn generate(&mut self) -> Option<&GeneratedLetter> {
        let row = self.rows.get(self.position)?.clone();
        let content = self.template.render(&row);
        debug!(position = self.position, "generated letter");
        self.position = (self.position + 1) % self.rows.len();
        self.letter = Some(GeneratedLetter { content, row });
        self.letter.as_ref()
    }

    pub fn last_letter(&self) -> Option<&GeneratedLetter> {
        self.letter.as_ref()
    }

    /// Suggested file name for the last letter, built from its row's values.
    pub fn export_name(&self) -> Option<String> {
        self.letter
            .as_ref()
            .map(|letter| self.options.file_name(letter.row.values()))
    }

    /// Hands the last letter to `exporter`.
    ///
    /// # Returns
    ///
    /// * `Result<Option<String>, RustyLetterError>` - The file name used, None if nothing
    ///   has been generated yet
    pub fn export<E: Exporter + ?Sized>(&self, exporter: &mut E) -> Result<Option<String>, RustyLetterError> {
        let Some(letter) = self.letter.as_ref() else {
            return Ok(None);
        };
        let file_name = self.options.file_name(letter.row.values());
        exporter
            .export(&letter.content, &file_name)
            .map_err(|source| GeneratorError::ExportError {
                file_name: file_name.to_owned(),
                source,
            })?;
        Ok(Some(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawCell;

    #[derive(Default)]
    struct MemoryExporter {
        files: Vec<(String, String)>,
    }

    impl Exporter for MemoryExporter {
        fn export(&mut self, content: &str, file_name: &str) -> anyhow::Result<()> {
            self.files.push((file_name.to_owned(), content.to_owned()));
            Ok(())
        }
    }

    struct FailingExporter;

    impl Exporter for FailingExporter {
        fn export(&mut self, _content: &str, _file_name: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn raw(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), RawCell::from(*value)))
            .collect()
    }

    fn people() -> Vec<RawRow> {
        vec![
            raw(&[("NAME", "Ann"), ("COMPANY", "Acme")]),
            raw(&[("NAME", "Bob"), ("COMPANY", "Bolt")]),
            raw(&[("NAME", "Cy"), ("COMPANY", "")]),
        ]
    }

    fn generator() -> LetterGenerator {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let mut generator = LetterGenerator::default();
        generator.set_template("Dear [NAME],\n\nCompany: [COMPANY]");
        generator
    }

    #[test]
    fn generate_without_rows_is_noop() {
        let mut generator = generator();

        assert!(!generator.can_generate());
        assert!(generator.generate().is_none());
        assert!(generator.last_letter().is_none());
        assert_eq!(generator.position(), 0);
    }

    #[test]
    fn generate_cycles_through_rows() {
        let mut generator = generator();
        assert_eq!(generator.load_rows(&people()).unwrap(), 3);

        let names = (0..4)
            .map(|_| generator.generate().unwrap().row.get("NAME").unwrap().to_owned())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["Ann", "Bob", "Cy", "Ann"]);
        assert_eq!(generator.position(), 1);
    }

    #[test]
    fn generate_renders_current_row() {
        let mut generator = generator();
        generator.load_rows(&people()).unwrap();

        let first = generator.generate().unwrap().content.clone();
        generator.generate();
        let third = generator.generate().unwrap().content.clone();

        assert_eq!(first, "Dear Ann,\n\nCompany: Acme");
        assert_eq!(third, "Dear Cy,\n\nCompany: [COMPANY]");
    }

    #[test]
    fn load_rows_resets_session() {
        let mut generator = generator();
        generator.load_rows(&people()).unwrap();
        generator.generate();
        generator.generate();

        generator.load_rows(&people()[1..]).unwrap();

        assert_eq!(generator.position(), 0);
        assert!(generator.last_letter().is_none());
        assert_eq!(generator.generate().unwrap().row.get("NAME"), Some("Bob"));
    }

    #[test]
    fn load_rows_without_valid_data() {
        let mut generator = generator();
        generator.load_rows(&people()).unwrap();

        let rows = vec![raw(&[("a", ""), ("b", "")])];
        let error = generator.load_rows(&rows).unwrap_err();

        assert_eq!(error.to_string(), "No valid data found in the uploaded table");
        assert!(generator.rows().is_empty());
        assert!(generator.generate().is_none());
    }

    #[test]
    fn load_table_records_column_usage() {
        let mut generator = generator();
        generator
            .load_table(["NAME", "COMPANY", "CITY"], &people())
            .unwrap();

        assert_eq!(
            generator.column_usage(),
            vec![("NAME", true), ("COMPANY", true), ("CITY", false)]
        );
    }

    #[test]
    fn preview_uses_first_row() {
        let mut generator = generator();
        assert!(generator.preview().is_none());

        generator.load_rows(&people()).unwrap();
        generator.generate();

        assert_eq!(generator.preview().unwrap(), "Dear Ann,\n\nCompany: Acme");
        generator.set_template("");
        assert!(generator.preview().is_none());
        assert!(!generator.can_generate());
    }

    #[test]
    fn default_template_is_used_initially() {
        let generator = LetterGenerator::default();

        assert_eq!(generator.template().text(), DEFAULT_TEMPLATE);
        assert_eq!(generator.template().placeholders(), ["NAME", "COMPANY"]);
    }

    #[test]
    fn load_template_bytes_replaces_template() {
        let mut generator = generator();

        generator.load_template_bytes(b"\xEF\xBB\xBFHi [NAME]", None).unwrap();
        assert_eq!(generator.template().text(), "Hi [NAME]");

        let error = generator.load_template_bytes(b"Hi", Some(1)).unwrap_err();
        assert_eq!(error.to_string(), "Read template failed: Invalid Code page '1'");
        assert_eq!(generator.template().text(), "Hi [NAME]");
    }

    #[test]
    fn export_last_letter() {
        let mut generator = generator();
        let mut exporter = MemoryExporter::default();
        assert_eq!(generator.export(&mut exporter).unwrap(), None);

        generator.load_rows(&people()).unwrap();
        generator.generate();

        assert_eq!(generator.export_name().unwrap(), "cover-letter-Ann-Acme.txt");
        assert_eq!(
            generator.export(&mut exporter).unwrap(),
            Some("cover-letter-Ann-Acme.txt".to_owned())
        );
        assert_eq!(
            exporter.files,
            vec![(
                "cover-letter-Ann-Acme.txt".to_owned(),
                "Dear Ann,\n\nCompany: Acme".to_owned()
            )]
        );
    }

    #[test]
    fn export_name_skips_dropped_columns() {
        let mut generator = generator();
        generator.load_rows(&people()).unwrap();
        generator.generate();
        generator.generate();
        generator.generate();

        assert_eq!(generator.export_name().unwrap(), "cover-letter-Cy.txt");
    }

    #[test]
    fn export_reports_exporter_failure() {
        let mut generator = generator();
        generator.load_rows(&people()).unwrap();
        generator.generate();

        let error = generator.export(&mut FailingExporter).unwrap_err();

        assert_eq!(error.to_string(), "Export 'cover-letter-Ann-Acme.txt' failed: disk full");
    }
}
