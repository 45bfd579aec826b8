//! Package-version extraction from plugin library paths.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

/// Extract a four-part package version from a store-package-style path,
/// e.g. `1.8.63.0` out of
/// `...WinML.Intel.OpenVINO.EP.1.8_1.8.63.0_x64__8wekyb3d8bbwe\openvino_ep.dll`.
///
/// Not every plugin ships from a versioned package path, so `None` is a
/// normal answer.
pub fn version_from_path(path: &Path) -> Option<String> {
    let re = VERSION_RE
        .get_or_init(|| Regex::new(r"_(\d+\.\d+\.\d+\.\d+)_").expect("version pattern compiles"));
    let text = path.to_string_lossy();
    re.captures(&text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extracts_store_package_version() {
        let path = PathBuf::from(
            "C:\\Program Files\\WindowsApps\\MicrosoftCorporationII.WinML.Intel.OpenVINO.EP.1.8_1.8.63.0_x64__8wekyb3d8bbwe\\openvino_ep.dll",
        );
        assert_eq!(version_from_path(&path).as_deref(), Some("1.8.63.0"));
    }

    #[test]
    fn unversioned_path_yields_none() {
        let path = PathBuf::from("/usr/lib/openvino_ep.so");
        assert_eq!(version_from_path(&path), None);
    }

    #[test]
    fn partial_version_does_not_match() {
        let path = PathBuf::from("pkg_1.8.63_x64/ep.dll");
        assert_eq!(version_from_path(&path), None);
    }
}
