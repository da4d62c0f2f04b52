use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a rendering invocation.
///
/// Unknown tags are not in here: the dispatcher absorbs them into a
/// diagnostic node and a build warning instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing config setting {0}")]
    MissingConfig(&'static str),

    #[error("cannot read doxygen xml {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse doxygen xml {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("invalid doxygen reference id {refid:?}")]
    InvalidReference { refid: String },

    #[error("cannot handle {tag} kind={kind}")]
    UnknownKind { tag: String, kind: String },

    #[error("cannot handle {tag} kind={kind} (prot={prot})")]
    NonPublic {
        tag: String,
        kind: String,
        prot: String,
    },

    #[error("unexpected doxygen markup in {tag}: {message}")]
    Schema { tag: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unknown_kind(tag: &str, kind: Option<&str>) -> Self {
        Error::UnknownKind {
            tag: tag.to_string(),
            kind: kind.unwrap_or("None").to_string(),
        }
    }

    pub fn schema(tag: &str, message: impl Into<String>) -> Self {
        Error::Schema {
            tag: tag.to_string(),
            message: message.into(),
        }
    }
}
