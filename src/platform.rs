use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Host operating system family, identified by its conventional platform string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, AsRefStr, Display)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    #[strum(to_string = "win32", serialize = "windows")]
    Win32,
    #[strum(serialize = "linux")]
    Linux,
    #[strum(to_string = "darwin", serialize = "macos")]
    Darwin,
    #[strum(serialize = "freebsd")]
    FreeBsd,
    #[strum(serialize = "openbsd")]
    OpenBsd,
    #[strum(serialize = "netbsd")]
    NetBsd,
    #[strum(serialize = "android")]
    Android,
    #[strum(serialize = "aix")]
    Aix,
    #[strum(to_string = "sunos", serialize = "solaris", serialize = "illumos")]
    SunOs,
    #[strum(serialize = "other")]
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Platform {
        match std::env::consts::OS {
            "windows" => Platform::Win32,
            "linux" => Platform::Linux,
            "macos" => Platform::Darwin,
            "freebsd" => Platform::FreeBsd,
            "openbsd" => Platform::OpenBsd,
            "netbsd" => Platform::NetBsd,
            "android" => Platform::Android,
            "aix" => Platform::Aix,
            "solaris" | "illumos" => Platform::SunOs,
            _ => Platform::Other,
        }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Win32
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parse_identifiers() -> anyhow::Result<()> {
        assert_eq!(Platform::from_str("win32")?, Platform::Win32);
        assert_eq!(Platform::from_str("Windows")?, Platform::Win32);
        assert_eq!(Platform::from_str("DARWIN")?, Platform::Darwin);
        assert_eq!(Platform::from_str("linux")?, Platform::Linux);
        assert!(Platform::from_str("beos").is_err());
        Ok(())
    }

    #[test]
    fn display_uses_canonical_identifier() {
        assert_eq!(Platform::Win32.to_string(), "win32");
        assert_eq!(Platform::SunOs.as_ref(), "sunos");
    }

    #[test]
    fn only_win32_is_windows() {
        let windows: Vec<_> = Platform::iter().filter(|p| p.is_windows()).collect();
        assert_eq!(windows, vec![Platform::Win32]);
    }

    #[test]
    fn current_matches_target() {
        assert_eq!(Platform::current().is_windows(), cfg!(windows));
    }
}
