//! Target platform types and utilities.

use std::{fmt, str::FromStr};

/// Target platform for the native launcher and bundled JRE.
///
/// Parsing is case-insensitive and accepts both the build-tool spellings
/// (`Windows64`, `MacOS`) and packr's own identifiers (`windows64`, `mac`).
///
/// # Examples
///
/// ```
/// use packr_bundle::bundler::Platform;
///
/// let platform: Platform = "linux64".parse().unwrap();
/// assert_eq!(platform, Platform::Linux64);
/// assert_eq!(platform.packr_name(), "linux64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Platform {
    /// 32-bit Windows
    Windows32,
    /// 64-bit Windows
    Windows64,
    /// 32-bit Linux
    Linux32,
    /// 64-bit Linux
    Linux64,
    /// macOS (.app bundle)
    MacOS,
}

impl Platform {
    /// All supported platforms, in declaration order.
    pub const ALL: [Platform; 5] = [
        Platform::Windows32,
        Platform::Windows64,
        Platform::Linux32,
        Platform::Linux64,
        Platform::MacOS,
    ];

    /// Identifier understood by the packr engine.
    pub fn packr_name(self) -> &'static str {
        match self {
            Platform::Windows32 => "windows32",
            Platform::Windows64 => "windows64",
            Platform::Linux32 => "linux32",
            Platform::Linux64 => "linux64",
            Platform::MacOS => "mac",
        }
    }

    /// Whether `iconResource` and `bundleIdentifier` apply to this platform.
    pub fn supports_app_bundle(self) -> bool {
        matches!(self, Platform::MacOS)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows32 => "Windows32",
            Platform::Windows64 => "Windows64",
            Platform::Linux32 => "Linux32",
            Platform::Linux64 => "Linux64",
            Platform::MacOS => "MacOS",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows32" => Ok(Platform::Windows32),
            "windows64" => Ok(Platform::Windows64),
            "linux32" => Ok(Platform::Linux32),
            "linux64" => Ok(Platform::Linux64),
            "macos" | "mac" => Ok(Platform::MacOS),
            _ => Err(format!(
                "Invalid platform: {s}. Valid platforms: Windows32, Windows64, Linux32, Linux64, MacOS"
            )),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_tool_and_packr_spellings() {
        assert_eq!("Windows32".parse::<Platform>(), Ok(Platform::Windows32));
        assert_eq!("WINDOWS64".parse::<Platform>(), Ok(Platform::Windows64));
        assert_eq!("MacOS".parse::<Platform>(), Ok(Platform::MacOS));
        assert_eq!("mac".parse::<Platform>(), Ok(Platform::MacOS));
        assert!("solaris".parse::<Platform>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
            assert_eq!(platform.packr_name().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn only_macos_takes_app_bundle_fields() {
        let bundled: Vec<_> = Platform::ALL
            .into_iter()
            .filter(|p| p.supports_app_bundle())
            .collect();
        assert_eq!(bundled, vec![Platform::MacOS]);
    }
}
