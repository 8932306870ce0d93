//! Interactive terminal form: collects the three fields from a line-oriented reader.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::FormFields;

/// Line that ends a multi-line block. Matched case-insensitively after trimming.
pub const END_MARKER: &str = "END";

const RESUME_PROMPT: &str = "Please paste your resume text (type 'END' on a new line when finished):";
const JOB_DESCRIPTION_PROMPT: &str =
    "Please paste the job description (type 'END' on a new line when finished):";
const PAGE_LENGTH_PROMPT: &str = "Enter the target resume length (number of pages): ";

/// Prompts on `out` and reads the resume, the job description, and the page
/// length from `input`.
///
/// Both text blocks are trimmed. The page length is the trimmed first line
/// that follows, forwarded without numeric checks.
pub fn collect_form<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<FormFields> {
    writeln!(out, "=== Resume Tailoring Tool ===")?;

    writeln!(out, "\n{RESUME_PROMPT}")?;
    out.flush()?;
    let resume = read_block(input).context("Failed to read resume text")?;

    writeln!(out, "\n{JOB_DESCRIPTION_PROMPT}")?;
    out.flush()?;
    let job_description = read_block(input).context("Failed to read job description")?;

    write!(out, "\n{PAGE_LENGTH_PROMPT}")?;
    out.flush()?;
    let mut page_length = String::new();
    input
        .read_line(&mut page_length)
        .context("Failed to read target page length")?;

    Ok(FormFields {
        resume,
        job_description,
        page_length: page_length.trim().to_string(),
    })
}

/// Reads lines up to the `END` marker (or end of input) and returns them
/// joined with newlines, trimmed.
fn read_block<R: BufRead>(input: &mut R) -> Result<String> {
    let mut block = String::new();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().eq_ignore_ascii_case(END_MARKER) {
            break;
        }
        block.push_str(line.trim_end_matches(&['\r', '\n'][..]));
        block.push('\n');
    }

    Ok(block.trim().to_string())
}
