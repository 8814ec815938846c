use crate::model::Task;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Field separator between title and description on each stored line.
/// Neither field may contain this token or a newline; the format has no
/// escaping, so such a value would corrupt the line on the next read.
pub const SEPARATOR: &str = "<-$->";

/// Placeholder written in place of an empty description, so that an empty
/// description and a truncated line stay distinguishable.
pub const EMPTY_DESC: &str = "-$-";

/// Durable mapping between the in-memory task list and one plain-text file.
/// The handle is opened once and held for the lifetime of the value; every
/// mutation rewrites the whole file.
pub struct Storage {
    file: File,
    path: PathBuf,
}

impl Storage {
    pub fn default_path() -> Result<PathBuf> {
        let proj = ProjectDirs::from("", "", "task-list")
            .context("could not resolve a home directory for the task file")?;
        Ok(proj.data_dir().join("list"))
    }

    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating data directory {}", dir.display()))?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)
            .with_context(|| format!("opening task file {}", path.display()))?;

        debug!("task file: {}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file back into a task list. An empty file is an
    /// empty list; a line without the separator token is an error.
    pub fn read(&mut self) -> Result<Vec<Task>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut data = String::new();
        self.file
            .read_to_string(&mut data)
            .with_context(|| format!("reading task file {}", self.path.display()))?;

        let tasks = decode(&data)?;
        debug!("loaded {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Rewrites the whole file from the given list: truncate, seek to the
    /// start, write the full buffer. Not transactional.
    pub fn write(&mut self, tasks: &[Task]) -> Result<()> {
        let buf = encode(tasks);

        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file
            .write_all(buf.as_bytes())
            .with_context(|| format!("writing task file {}", self.path.display()))?;
        self.file.flush()?;

        debug!("wrote {} tasks", tasks.len());
        Ok(())
    }
}

fn encode(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let desc = if task.description.is_empty() {
            EMPTY_DESC
        } else {
            &task.description
        };
        out.push_str(&format!("{}{}{}\n", task.title, SEPARATOR, desc));
    }
    out
}

fn decode(data: &str) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    if data.is_empty() {
        return Ok(tasks);
    }

    let lines: Vec<&str> = data.split('\n').collect();
    // The trailing newline leaves one empty segment after the last record.
    for line in &lines[..lines.len() - 1] {
        let Some((title, desc)) = line.split_once(SEPARATOR) else {
            bail!("malformed task record: {line}");
        };
        let description = if desc == EMPTY_DESC { "" } else { desc };
        tasks.push(Task::new(title, description));
    }
    Ok(tasks)
}
