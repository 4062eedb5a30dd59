mod provenance;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dicequest::api::{solve, Answer, Part, SolveCfg};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Die simulation puzzle runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one part and print the answer
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Puzzle part (1: accumulate, 2: race, 3: flood-fill)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    part: u8,
    /// Input file; defaults to data/q3/input<part>
    #[arg(long)]
    input: Option<PathBuf>,
    /// Point target for part 1
    #[arg(long)]
    target: Option<i64>,
    /// Give up after this many rounds (parts 1 and 2)
    #[arg(long)]
    max_rounds: Option<u64>,
    /// Cap on flood-fill depths per die (part 3); unbounded by default
    #[arg(long)]
    max_depth: Option<usize>,
    /// Also write the answer as JSON (plus a `<stem>.run.json` record)
    #[arg(long)]
    out: Option<PathBuf>,
}

impl RunArgs {
    fn part(&self) -> Result<Part> {
        Part::from_index(self.part).ok_or_else(|| anyhow!("unknown part {}", self.part))
    }

    fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("data/q3/input{}", self.part)))
    }

    fn solve_cfg(&self) -> SolveCfg {
        let mut cfg = SolveCfg::default();
        if let Some(target) = self.target {
            cfg.accumulate.target = target;
        }
        cfg.accumulate.max_rounds = self.max_rounds;
        cfg.race.max_rounds = self.max_rounds;
        cfg.visit.max_depth = self.max_depth;
        cfg
    }
}

#[derive(Serialize)]
struct AnswerFile<'a> {
    part: u8,
    answer: &'a Answer,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => {
            let answer = run(&args)?;
            println!("{answer}");
            Ok(())
        }
        Action::Report => report(),
    }
}

fn run(args: &RunArgs) -> Result<Answer> {
    let part = args.part()?;
    let input = args.input_path();
    tracing::info!(part = args.part, input = %input.display(), "run");
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    let answer = solve(part, &text, &args.solve_cfg())?;
    tracing::info!(%answer, "solved");

    if let Some(out) = &args.out {
        let record = provenance::RunRecord::new(part, &input, &text, &args.solve_cfg(), &answer);
        write_answer(out, &answer, &record)?;
    }
    Ok(answer)
}

fn write_answer(out: &Path, answer: &Answer, record: &provenance::RunRecord<'_>) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let file = AnswerFile {
        part: record.part,
        answer,
    };
    std::fs::write(out, serde_json::to_vec_pretty(&file)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let record_path = provenance::write_record(out, record)?;
    tracing::info!(out = %out.display(), record = %record_path.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::git_rev(),
        "lib_version": dicequest::VERSION,
        "parts": Part::ALL.iter().map(|p| p.index()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const RACE: &str = "1: faces=[1,2,3,4,5,6] seed=7
2: faces=[1,2,3,1,2,3] seed=13
3: faces=[6,1,5,2,4,3] seed=31
4: faces=[1,2,3,4,5,6] seed=11

2213
";

    fn args(part: u8, input: PathBuf) -> RunArgs {
        RunArgs {
            part,
            input: Some(input),
            target: None,
            max_rounds: None,
            max_depth: None,
            out: None,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_run_flags() {
        let cmd = Cmd::try_parse_from(["cli", "run", "--part", "1", "--target", "50"]).unwrap();
        let Action::Run(args) = cmd.action else {
            panic!("expected run");
        };
        assert_eq!(args.input_path(), PathBuf::from("data/q3/input1"));
        assert_eq!(args.solve_cfg().accumulate.target, 50);
        assert!(Cmd::try_parse_from(["cli", "run", "--part", "4"]).is_err());
    }

    #[test]
    fn run_writes_answer_and_run_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input2");
        fs::write(&input, RACE).unwrap();
        let out = dir.path().join("results/race.json");
        let mut a = args(2, input);
        a.out = Some(out.clone());

        let answer = run(&a).unwrap();
        assert_eq!(answer.to_string(), "2,4,3,1");

        let record: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(record["part"], 2);
        assert_eq!(record["answer"], serde_json::json!([2, 4, 3, 1]));
        let meta: Value =
            serde_json::from_slice(&fs::read(dir.path().join("results/race.run.json")).unwrap())
                .unwrap();
        assert_eq!(meta["part"], 2);
        assert_eq!(meta["answer"], serde_json::json!([2, 4, 3, 1]));
        assert_eq!(meta["input_sha256"].as_str().map(str::len), Some(64));
        assert!(meta["cfg"]["max_depth"].is_null());
    }

    #[test]
    fn run_reports_missing_input() {
        let dir = tempdir().unwrap();
        let err = run(&args(1, dir.path().join("nope"))).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }

    #[test]
    fn run_honours_round_limit() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input1");
        fs::write(&input, "1: faces=[0] seed=3\n").unwrap();
        let mut a = args(1, input);
        a.max_rounds = Some(10);
        let err = run(&a).unwrap_err();
        assert!(err.to_string().contains("10 rounds"), "{err}");
    }
}
