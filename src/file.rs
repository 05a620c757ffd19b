use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use subset_sum::subset::Sequence;

/// Reads one integer per line, skipping blank lines
pub fn read_integers(path: &Path) -> Result<Vec<i64>> {
    let file = File::open(path).with_context(|| format!("open file {}", path.display()))?;

    let mut values = vec![];
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("read file {}", path.display()))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value = line
            .parse::<i64>()
            .with_context(|| format!("{}:{}: invalid integer '{}'", path.display(), i + 1, line))?;
        values.push(value);
    }

    Ok(values)
}

pub fn load_sequence(path: &Path) -> Result<Sequence> {
    let values = read_integers(path)?;
    let sequence =
        Sequence::new(values).with_context(|| format!("invalid sequence in {}", path.display()))?;
    Ok(sequence)
}

pub fn load_targets(path: &Path) -> Result<Vec<i64>> {
    let targets = read_integers(path)?;
    if targets.is_empty() {
        bail!("no targets in {}", path.display());
    }
    Ok(targets)
}

pub fn save<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create dir {}", dir.display()))?;
        }
    }

    let file = File::create(path).with_context(|| format!("create file {}", path.display()))?;

    serde_json::to_writer_pretty(file, value).context("serialize to file")?;

    Ok(())
}
