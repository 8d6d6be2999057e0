use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunModeError {
    #[error("found {links} select-link and {lines} select-line files; a project is either a roadway (one select-link file) or a transit (one select-line file) project")]
    AmbiguousSelection { links: usize, lines: usize },
    #[error("{rsp_id} is a no-build scenario but {links} select-link and {lines} select-line files were found")]
    NoBuildWithSelection {
        rsp_id: String,
        links: usize,
        lines: usize,
    },
    #[error("failure reading selection directory {path}: {msg}")]
    SelectionDirectory { path: String, msg: String },
}
