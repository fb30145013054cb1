//! Import of job description catalogues exported as CSV.
//!
//! Expected columns are `Job Title` and `Job Description`; `Company` and `Location` are
//! optional. Exports are often Latin-1, so fields that are not valid UTF-8 are decoded
//! byte-for-byte as ISO-8859-1.

use std::io::Read;

use csv::ByteRecord;
use tracing::{debug, warn};

use super::domain::NewJob;
use super::extraction::parse_job_description;
use super::vocabulary::SkillVocabulary;

const TITLE_COLUMN: &str = "Job Title";
const DESCRIPTION_COLUMN: &str = "Job Description";
const COMPANY_COLUMN: &str = "Company";
const LOCATION_COLUMN: &str = "Location";

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("job catalogue is missing the '{0}' column")]
    MissingColumn(&'static str),
    #[error("failed to read job catalogue: {0}")]
    Csv(#[from] csv::Error),
}

struct Columns {
    title: usize,
    description: usize,
    company: Option<usize>,
    location: Option<usize>,
}

impl Columns {
    fn locate(headers: &ByteRecord) -> Result<Self, CatalogImportError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| decode_field(header).trim() == name)
        };

        Ok(Self {
            title: position(TITLE_COLUMN).ok_or(CatalogImportError::MissingColumn(TITLE_COLUMN))?,
            description: position(DESCRIPTION_COLUMN)
                .ok_or(CatalogImportError::MissingColumn(DESCRIPTION_COLUMN))?,
            company: position(COMPANY_COLUMN),
            location: position(LOCATION_COLUMN),
        })
    }
}

/// Reads a catalogue and derives skills and requirements for every row with a description.
pub fn import_job_catalog<R: Read>(
    reader: R,
    vocabulary: &SkillVocabulary,
) -> Result<Vec<NewJob>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = Columns::locate(csv_reader.byte_headers()?)?;

    let mut jobs = Vec::new();
    for (index, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let field = |column: usize| record.get(column).map(decode_field).unwrap_or_default();

        let description = field(columns.description);
        if description.trim().is_empty() {
            warn!(row = index + 1, "skipping catalogue row without a description");
            continue;
        }

        let signals = parse_job_description(&description, vocabulary);
        jobs.push(NewJob {
            title: field(columns.title),
            company: columns.company.map(field).unwrap_or_default(),
            location: columns.location.map(field).unwrap_or_default(),
            description,
            requirements: signals.requirements,
            skills: signals.skills,
        });
    }

    debug!(jobs = jobs.len(), "imported job catalogue");
    Ok(jobs)
}

fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&byte| char::from(byte)).collect(),
    }
}
