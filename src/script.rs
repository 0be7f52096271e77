//! Script line source.
//!
//! Streams newline-delimited command lines from a file lazily. Opening the
//! same path again restarts from the top.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{KvError, Result};

/// Lazy iterator over the lines of a script file.
#[derive(Debug)]
pub struct Script {
    lines: Lines<BufReader<File>>,
}

impl Script {
    /// Open a script for reading.
    ///
    /// A missing file is a distinct condition from a file with no lines: the
    /// former is [`KvError::ScriptNotFound`], the latter opens fine and
    /// yields an immediately exhausted iterator.
    pub fn open(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(KvError::ScriptNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for Script {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| line.map_err(KvError::from))
    }
}
