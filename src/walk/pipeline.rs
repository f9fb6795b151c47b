//! Single-pass walk that filters entries and dispatches the configured actions

use std::io::{self, Write};
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, info};

use crate::actions::{DeletionLog, archive_file, delete_file, list_file};
use crate::error::Result;

use super::config::RunConfig;
use super::filter::{EntryInfo, FileFilter};
use super::plan::{Action, ActionPlan};

/// Walks a tree once, applying the filter and then the action plan to every
/// eligible file. The first error from the walk or from an action stops the run.
pub struct Pipeline<L: Write = io::Stderr> {
    config: RunConfig,
    filter: FileFilter,
    plan: ActionPlan,
    log: DeletionLog<L>,
}

impl Pipeline {
    /// Deletion records go to standard error until `with_log_writer` says otherwise.
    pub fn new(config: RunConfig) -> Self {
        Self {
            filter: FileFilter::from_config(&config),
            plan: ActionPlan::from_config(&config),
            config,
            log: DeletionLog::stderr(),
        }
    }
}

impl<L: Write> Pipeline<L> {
    pub fn with_log_writer<W: Write>(self, writer: W) -> Pipeline<W> {
        Pipeline {
            config: self.config,
            filter: self.filter,
            plan: self.plan,
            log: DeletionLog::new(writer),
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Walk `root` depth-first in lexical order, writing listings to `out`.
    pub fn run<W: Write + ?Sized>(&mut self, root: &Path, out: &mut W) -> Result<()> {
        info!(root = %root.display(), actions = ?self.plan.actions(), "starting walk");

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut acted = 0usize;
        for result in walker {
            let entry = result?;
            let path = entry.path();
            let info = EntryInfo::from(&entry.metadata()?);

            if self.filter.should_skip(path, &info) {
                continue;
            }

            self.dispatch(path, root, out)?;
            acted += 1;
        }

        info!(files = acted, "walk finished");
        Ok(())
    }

    fn dispatch<W: Write + ?Sized>(&mut self, path: &Path, root: &Path, out: &mut W) -> Result<()> {
        for action in self.plan.actions() {
            debug!(path = %path.display(), ?action, "applying");
            match action {
                Action::List => list_file(path, out)?,
                Action::Archive => {
                    if let Some(dest) = &self.config.archive_dir {
                        archive_file(path, root, dest)?;
                    }
                }
                Action::Delete => delete_file(path, &mut self.log)?,
            }
        }
        Ok(())
    }
}

/// Run one walk over `root` with `config`, logging deletions to `log`.
pub fn run<W: Write + ?Sized, L: Write>(
    root: &Path,
    out: &mut W,
    config: RunConfig,
    log: L,
) -> Result<()> {
    Pipeline::new(config).with_log_writer(log).run(root, out)
}
