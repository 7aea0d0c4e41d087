use log::{debug, trace};

use crate::{
    error::LocateError,
    platform::Platform,
    probe::{HostFs, Probe},
    version::VersionDir,
};

/// Conventional install directories, probed in this order.
pub const SEARCH_ROOTS: [&str; 6] = [
    "C:/fpc",
    "C:/Program Files/fpc",
    "C:/Program Files (x86)/fpc",
    "C:/lazarus/fpc",
    "C:/Program Files/lazarus/fpc",
    "C:/Program Files (x86)/lazarus/fpc",
];

/// Toolchain subdirectories under `<version>/bin`, most preferred first.
pub const ARCH_CANDIDATES: [&str; 3] = ["x86_64-win64", "x86_64-win32", "i386-win32"];

pub const WINDOWS_EXECUTABLE: &str = "fpc.exe";

/// Left for the process launcher to resolve through `PATH`.
pub const COMMAND_NAME: &str = "fpc";

#[derive(Debug, Clone)]
pub struct Locator<P: Probe> {
    platform: Platform,
    probe: P,
    roots: Vec<String>,
}

impl Locator<HostFs> {
    pub fn host() -> Locator<HostFs> {
        Locator::new(Platform::current(), HostFs)
    }
}

impl<P: Probe> Locator<P> {
    pub fn new(platform: Platform, probe: P) -> Locator<P> {
        Locator {
            platform,
            probe,
            roots: SEARCH_ROOTS.iter().map(|root| root.to_string()).collect(),
        }
    }

    /// Replaces the default search roots. Order is preserved.
    pub fn with_roots<I, S>(mut self, roots: I) -> Locator<P>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Returns how to invoke the compiler.
    ///
    /// Outside Windows this is the bare command name and the filesystem is not
    /// touched. On Windows the first existing `<root>/<version>/bin/<arch>/fpc.exe`
    /// wins, walking roots in order, versions newest first, then architectures
    /// in preference order.
    pub fn locate(&self) -> Result<String, LocateError> {
        if !self.platform.is_windows() {
            debug!("platform {} resolves `{COMMAND_NAME}` through PATH", self.platform);
            return Ok(COMMAND_NAME.to_string());
        }

        let found = self
            .candidates()
            .inspect(|path| trace!("probing {path}"))
            .find(|path| self.probe.file_exists(path));

        match found {
            Some(path) => {
                debug!("found compiler at {path}");
                Ok(path)
            }
            None => Err(LocateError::CompilerNotFound {
                executable: WINDOWS_EXECUTABLE.to_string(),
            }),
        }
    }

    /// Every executable path [`Locator::locate`] would probe, in probe order.
    ///
    /// Roots and version directories are read lazily, so stopping early stops
    /// the directory scans too. Empty outside Windows.
    pub fn candidates(&self) -> impl Iterator<Item = String> + '_ {
        let roots: &[String] = if self.platform.is_windows() {
            &self.roots
        } else {
            &[]
        };

        roots
            .iter()
            .filter(move |root| {
                let exists = self.probe.dir_exists(root);
                if !exists {
                    debug!("skipping missing search root {root}");
                }
                exists
            })
            .flat_map(move |root| {
                self.versions_newest_first(root)
                    .into_iter()
                    .flat_map(move |version| {
                        ARCH_CANDIDATES.iter().map(move |arch| {
                            format!("{root}/{version}/bin/{arch}/{WINDOWS_EXECUTABLE}")
                        })
                    })
            })
    }

    fn versions_newest_first(&self, root: &str) -> Vec<VersionDir> {
        let mut versions: Vec<VersionDir> = self
            .probe
            .subdirs(root)
            .iter()
            .filter_map(|name| VersionDir::parse(name))
            .collect();
        versions.sort_by(|a, b| b.cmp(a));
        debug!("search root {root} has {} version directories", versions.len());
        versions
    }
}

/// Locates the compiler for the running host on the real filesystem.
pub fn find_fpc() -> Result<String, LocateError> {
    Locator::host().locate()
}
