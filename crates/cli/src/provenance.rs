//! Run record written next to an answer file: which input, which knobs,
//! which build produced it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use dicequest::api::{Answer, Part, SolveCfg};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Solver knobs as they were applied to the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CfgRecord {
    pub target: i64,
    pub accumulate_max_rounds: Option<u64>,
    pub race_max_rounds: Option<u64>,
    pub max_depth: Option<usize>,
}

impl From<&SolveCfg> for CfgRecord {
    fn from(cfg: &SolveCfg) -> Self {
        Self {
            target: cfg.accumulate.target,
            accumulate_max_rounds: cfg.accumulate.max_rounds,
            race_max_rounds: cfg.race.max_rounds,
            max_depth: cfg.visit.max_depth,
        }
    }
}

/// Contents of `<answer-stem>.run.json`.
#[derive(Debug, Serialize)]
pub struct RunRecord<'a> {
    /// `git rev-parse HEAD` at run time; `None` outside a checkout.
    pub code_rev: Option<String>,
    pub lib_version: &'static str,
    pub part: u8,
    pub input: String,
    /// SHA-256 of the input text the answer was computed from.
    pub input_sha256: String,
    pub cfg: CfgRecord,
    pub answer: &'a Answer,
}

impl<'a> RunRecord<'a> {
    pub fn new(part: Part, input: &Path, text: &str, cfg: &SolveCfg, answer: &'a Answer) -> Self {
        Self {
            code_rev: git_rev(),
            lib_version: dicequest::VERSION,
            part: part.index(),
            input: input.display().to_string(),
            input_sha256: text_sha256(text),
            cfg: CfgRecord::from(cfg),
            answer,
        }
    }
}

/// Write `record` next to `answer_file` and return the record's path.
pub fn write_record(answer_file: &Path, record: &RunRecord<'_>) -> Result<PathBuf> {
    let path = record_path(answer_file);
    let contents = serde_json::to_string_pretty(record).context("serialize run record")?;
    fs::write(&path, format!("{contents}\n"))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn record_path(answer_file: &Path) -> PathBuf {
    let stem = answer_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "answer".to_string());
    answer_file.with_file_name(format!("{stem}.run.json"))
}

fn text_sha256(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

pub fn git_rev() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
