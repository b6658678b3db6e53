use crate::consts;
use std::cmp::Reverse;
use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One line of the high score table
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreEntry {
    pub(crate) name: String,
    pub(crate) score: u32,
}

impl HighScoreEntry {
    pub(crate) fn new<S: Into<String>>(name: S, score: u32) -> HighScoreEntry {
        HighScoreEntry {
            name: name.into(),
            score,
        }
    }

    /// Parse a `name,score` line.  `lineno` is only used for error messages.
    fn parse_line(line: &str, lineno: usize) -> Result<HighScoreEntry, ParseError> {
        let text = line.trim();
        let Some((name, score)) = text.split_once(',') else {
            return Err(ParseError::MissingComma {
                lineno,
                text: text.to_owned(),
            });
        };
        match score.parse::<u32>() {
            Ok(score) => Ok(HighScoreEntry::new(name, score)),
            Err(source) => Err(ParseError::InvalidScore {
                lineno,
                text: text.to_owned(),
                source,
            }),
        }
    }
}

impl fmt::Display for HighScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.score)
    }
}

/// The top-three table persisted as a text file of `name,score` lines.
///
/// The file is opened & closed on each call; nothing is cached between calls.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub(crate) fn new<P: Into<PathBuf>>(path: P) -> HighScoreStore {
        HighScoreStore { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table, sorted by descending score.  A missing file is an
    /// empty table.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if any line of it is
    /// not of the form `name,score`.
    pub(crate) fn load(&self) -> Result<Vec<HighScoreEntry>, LoadError> {
        let src = match fs_err::read_to_string(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LoadError::read(e)),
        };
        let mut entries = src
            .lines()
            .enumerate()
            .map(|(i, line)| HighScoreEntry::parse_line(line, i + 1))
            .collect::<Result<Vec<_>, _>>()
            .map_err(LoadError::parse)?;
        entries.sort_by_key(|e| Reverse(e.score));
        Ok(entries)
    }

    /// Would `score` earn a place in the table?
    pub(crate) fn is_high_score(&self, score: u32) -> Result<bool, LoadError> {
        let entries = self.load()?;
        Ok(entries
            .get(consts::HIGH_SCORE_SLOTS - 1)
            .is_none_or(|lowest| score > lowest.score))
    }

    /// Insert an entry, keep the best three, and rewrite the file.  Returns
    /// the new table.
    ///
    /// Ties keep their existing order, so an older entry stays ahead of a new
    /// one with the same score.
    pub(crate) fn add(&self, name: &str, score: u32) -> Result<Vec<HighScoreEntry>, SaveError> {
        let mut entries = self.load().map_err(SaveError::load)?;
        entries.push(HighScoreEntry::new(sanitize_name(name), score));
        entries.sort_by_key(|e| Reverse(e.score));
        entries.truncate(consts::HIGH_SCORE_SLOTS);
        self.save(&entries)?;
        log::info!(
            "Recorded high score {score} for {name:?} in {}",
            self.path.display()
        );
        Ok(entries)
    }

    fn save(&self, entries: &[HighScoreEntry]) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let src = entries.iter().fold(String::new(), |mut s, e| {
            s.push_str(&e.to_string());
            s.push('\n');
            s
        });
        fs_err::write(&self.path, src).map_err(SaveError::write)?;
        Ok(())
    }
}

/// Make `name` storable: no commas or control characters, no surrounding
/// whitespace, at most [`consts::MAX_NAME_LENGTH`] characters, and not empty
pub(crate) fn sanitize_name(name: &str) -> String {
    let cleaned = name
        .chars()
        .filter(|&c| c != ',' && !c.is_control())
        .collect::<String>();
    let trimmed = cleaned
        .trim()
        .chars()
        .take(consts::MAX_NAME_LENGTH)
        .collect::<String>();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        String::from(consts::ANONYMOUS)
    } else {
        trimmed.to_owned()
    }
}

#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("line {lineno}: expected `name,score`, got {text:?}")]
    MissingComma { lineno: usize, text: String },
    #[error("line {lineno}: invalid score in {text:?}")]
    InvalidScore {
        lineno: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
#[error("Failed to read high scores")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn parse(e: ParseError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high scores file")]
    Read(#[source] std::io::Error),
    #[error("high scores file is corrupt")]
    Parse(#[source] ParseError),
}

#[derive(Debug, Error)]
#[error("Failed to save high score")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn load(e: LoadError) -> Self {
        SaveError(SaveErrorSource::Load(e))
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("could not load existing high scores")]
    Load(#[source] LoadError),
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high scores to disk")]
    Write(#[source] std::io::Error),
}
