use std::backtrace::Backtrace;
use std::fmt::Display;
use std::fmt::{self, Formatter};
use std::io;
use std::panic::Location;
use std::sync::PoisonError;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::error;

pub type DrawlyResult<T> = Result<T, DrawlyErr>;

#[derive(Debug)]
pub struct DrawlyErr {
    pub kind: DrawlyErrKind,
    pub backtrace: Option<Backtrace>,
}

impl Serialize for DrawlyErr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = format!("{:?}", self);
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for DrawlyErr {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(DrawlyErr {
            kind: DrawlyErrKind::Unexpected("Deserializing DrawlyErr".to_string()),
            backtrace: None,
        })
    }
}

impl Display for DrawlyErr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// The purpose of this Display implementation is to provide uniformity for
/// the description of errors that a customer may see, and a productivity
/// boost for the client developer showing them. The storage messages match
/// the alerts drawly has always shown.
impl Display for DrawlyErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DrawlyErrKind::StorageFull => write!(
                f,
                "Unable to save tutorial. Please try clearing some tutorials from your library."
            ),
            DrawlyErrKind::StorageQuotaExceeded => {
                write!(f, "There is not enough storage space left")
            }
            DrawlyErrKind::TutorialNonexistent => write!(f, "That tutorial does not exist"),
            DrawlyErrKind::ImageNonexistent => write!(f, "Could not find that image file"),
            DrawlyErrKind::DiskPathInvalid => write!(f, "That disk path is invalid"),
            DrawlyErrKind::Unexpected(msg) => write!(f, "Unexpected error: {msg}"),
        }
    }
}

impl From<DrawlyErrKind> for DrawlyErr {
    fn from(kind: DrawlyErrKind) -> Self {
        Self { kind, backtrace: Some(Backtrace::force_capture()) }
    }
}

pub trait Unexpected<T> {
    fn log_and_ignore(self) -> Option<T>;
    fn map_unexpected(self) -> DrawlyResult<T>;
}

impl<T, E: std::fmt::Debug> Unexpected<T> for Result<T, E> {
    #[track_caller]
    fn map_unexpected(self) -> DrawlyResult<T> {
        let location = Location::caller();
        self.map_err(|err| {
            DrawlyErrKind::Unexpected(format!(
                "unexpected error at {}:{} {err:?}",
                location.file(),
                location.line(),
            ))
            .into()
        })
    }

    #[track_caller]
    fn log_and_ignore(self) -> Option<T> {
        let location = Location::caller();
        if let Err(e) = &self {
            error!("error ignored at {}:{} {e:?}", location.file(), location.line());
        }

        self.ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawlyErrKind {
    /// A commit could not complete even after the degraded retry. The library
    /// on disk and in memory is unchanged from before the operation.
    StorageFull,

    /// The blob was refused by the platform store for its size, or its
    /// serialized form crossed the ceiling. Commits consume this internally
    /// to enter the degraded write path; it only escapes through the disk
    /// surface itself.
    StorageQuotaExceeded,

    TutorialNonexistent,
    ImageNonexistent,
    DiskPathInvalid,

    /// If no programmer in any part of the stack (including tests) expects
    /// to see a particular error, we debug format the underlying error to
    /// keep the number of error types in check. Commonly used for errors
    /// originating in other crates.
    Unexpected(String),
}

pub fn core_err_unexpected<T: fmt::Debug>(err: T) -> DrawlyErrKind {
    DrawlyErrKind::Unexpected(format!("{:?}", err))
}

impl<G> From<PoisonError<G>> for DrawlyErr {
    fn from(err: PoisonError<G>) -> Self {
        core_err_unexpected(err).into()
    }
}

impl From<io::Error> for DrawlyErr {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::InvalidInput => DrawlyErrKind::DiskPathInvalid,
            io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded => {
                DrawlyErrKind::StorageQuotaExceeded
            }
            _ => core_err_unexpected(e),
        }
        .into()
    }
}

impl From<serde_json::Error> for DrawlyErr {
    fn from(err: serde_json::Error) -> Self {
        DrawlyErrKind::Unexpected(format!("{err}")).into()
    }
}
