use std::ffi::OsStr;
use std::fmt;
use std::ops::Div;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Clone, Debug, Default, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct FilePath {
    buf: PathBuf,
}

impl FilePath {
    pub fn new() -> FilePath {
        FilePath {
            buf: PathBuf::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.buf.is_file()
    }

    pub fn has_extension<S: AsRef<OsStr>>(&self, ext: S) -> bool {
        self.buf.extension().map_or(false, |e| e == ext.as_ref())
    }

    /// Extracts the stem (non-extension) portion of the file name.
    ///
    /// Returns an empty string if the path has no file name, e.g. when it
    /// terminates in `..`.
    pub fn file_stem(&self) -> String {
        self.buf
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns the filepath of the parent directory
    pub fn dir(&self) -> FilePath {
        FilePath {
            buf: self
                .buf
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.buf.display())
    }
}

impl From<PathBuf> for FilePath {
    fn from(buf: PathBuf) -> FilePath {
        FilePath { buf }
    }
}

impl From<&Path> for FilePath {
    fn from(p: &Path) -> FilePath {
        FilePath { buf: p.into() }
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> FilePath {
        FilePath { buf: s.into() }
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> FilePath {
        FilePath { buf: s.into() }
    }
}

impl FromStr for FilePath {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<FilePath, &'static str> {
        Ok(FilePath { buf: s.into() })
    }
}

impl<T: AsRef<Path>> Div<T> for FilePath {
    type Output = FilePath;

    fn div(self, rhs: T) -> Self::Output {
        FilePath {
            buf: self.buf.join(rhs),
        }
    }
}

impl<'a, T: AsRef<Path>> Div<T> for &'a FilePath {
    type Output = FilePath;

    fn div(self, rhs: T) -> Self::Output {
        FilePath {
            buf: self.buf.join(rhs),
        }
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.buf.as_path()
    }
}

#[cfg(test)]
mod pathlib_tests {
    use super::FilePath;

    #[test]
    fn joins_with_div() {
        let root = FilePath::from("/opt/hj");
        assert_eq!((&root / "config.toml").to_string(), "/opt/hj/config.toml");
        assert_eq!((root / "lib" / "std").to_string(), "/opt/hj/lib/std");
    }

    #[test]
    fn stem_and_extension() {
        let fp = FilePath::from("src/day01.hj");
        assert_eq!(fp.file_stem(), "day01");
        assert!(fp.has_extension("hj"));
        assert_eq!(fp.dir().to_string(), "src");
        assert!(!fp.has_extension("s"));
        assert_eq!(FilePath::from("main").dir().to_string(), "");
    }
}
