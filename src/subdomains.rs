use regex::Regex;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("valid ANSI regex"));

/// Strip color codes and surrounding whitespace from one line of tool output.
/// Returns `None` for lines that are blank after cleaning.
pub fn clean_line(line: &str) -> Option<String> {
    let stripped = ANSI_ESCAPE.replace_all(line, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Deduplicated set of hostnames, iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubdomainSet {
    hosts: BTreeSet<String>,
}

impl SubdomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw line; returns true when it added a new host.
    pub fn insert(&mut self, line: &str) -> bool {
        match clean_line(line) {
            Some(host) => self.hosts.insert(host),
            None => false,
        }
    }

    /// Fold every non-blank line of `text` into the set.
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        text.lines().filter(|line| self.insert(line)).count()
    }

    /// Fold every non-blank line of a file into the set.
    pub fn extend_from_file(&mut self, path: &Path) -> io::Result<usize> {
        let reader = BufReader::new(File::open(path)?);
        let mut added = 0;
        for line in reader.lines() {
            if self.insert(&line?) {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn merge(&mut self, other: SubdomainSet) {
        self.hosts.extend(other.hosts);
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.hosts.iter()
    }

    /// Write the set sorted, one host per line.
    pub fn write_sorted(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for host in &self.hosts {
            writeln!(writer, "{}", host)?;
        }
        writer.flush()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SubdomainSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SubdomainSet::new();
        for line in iter {
            set.insert(line.as_ref());
        }
        set
    }
}

/// Count lines in a file; a missing file counts as zero.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(reader.lines().count())
}
