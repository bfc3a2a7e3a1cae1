use crate::error::Result;
use crate::link::{Link, Yanked};
use crate::names::canonicalize_name;
use crate::results::PackageData;
use crate::utils::splitext;
use pep440_rs::Version;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::str::FromStr;
use std::sync::LazyLock;
use url::Url;

static WHEEL_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>.+?)-(?P<ver>\d.*?)(?:-(?P<build>\d.*?))?-(?P<pyver>.+?)-(?P<abi>.+?)-(?P<plat>.+?)\.whl$",
    )
    .expect("wheel filename pattern should be valid")
});

static SDIST_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)-(?P<ver>\d.*?)(?:\.sdist)?\.(?:zip|tar(?:\.(?:gz|bz2|xz|Z))?)$")
        .expect("sdist filename pattern should be valid")
});

static NAME_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>[a-z0-9_\-.]+?)-(?P<ver>\d[a-z0-9_.!+-]*)")
        .expect("name-version pattern should be valid")
});

/// Infers project name and version from a link's filename.
///
/// Wheel names are tried first, then sdist names, then a loose
/// `<name>-<version>` prefix of the extension-less filename. Links whose
/// version is not valid PEP 440 yield nothing.
pub fn link_package_data(link: &Link) -> Option<PackageData> {
    let filename = link.filename();

    let (name, version) = match WHEEL_FILE
        .captures(&filename)
        .or_else(|| SDIST_FILE.captures(&filename))
    {
        Some(caps) => (caps["name"].to_string(), caps["ver"].to_string()),
        None => {
            let (stem, _) = splitext(&filename);
            let caps = NAME_VERSION.captures(stem)?;
            (caps["name"].to_string(), caps["ver"].to_string())
        }
    };

    let version = match Version::from_str(&version) {
        Ok(version) => version,
        Err(e) => {
            ::log::debug!("Invalid version {:?} in {}: {}", version, filename, e);
            return None;
        }
    };

    Some(PackageData::new(
        canonicalize_name(&name),
        version,
        link.url().clone(),
    ))
}

/// A page that lists downloadable files
pub trait LinkSource {
    /// URL the page was fetched from, as used for resolving hrefs
    fn url(&self) -> &Url;

    /// Supported distribution links in document order.
    ///
    /// Every call walks the parsed page again.
    fn links(&self) -> impl Iterator<Item = Result<Link>>;

    /// Every link whose filename names a project and version
    fn packages(&self) -> Result<Vec<PackageData>> {
        let mut packages = Vec::new();
        for link in self.links() {
            if let Some(package) = link_package_data(&link?) {
                packages.push(package);
            }
        }
        Ok(packages)
    }

    /// Distinct versions offered for a project, in first-seen order
    fn versions(&self, name: &str) -> Result<Vec<Version>> {
        let name = canonicalize_name(name);
        let mut seen = HashSet::new();
        let mut versions = Vec::new();
        for package in self.packages()? {
            if package.name == name && seen.insert(package.version.clone()) {
                versions.push(package.version);
            }
        }
        Ok(versions)
    }

    /// Links to the files of one release
    fn links_for_version(&self, name: &str, version: &Version) -> Result<Vec<Link>> {
        let name = canonicalize_name(name);
        let mut links = Vec::new();
        for link in self.links() {
            let link = link?;
            let matches = link_package_data(&link)
                .is_some_and(|package| package.name == name && &package.version == version);
            if matches {
                links.push(link);
            }
        }
        Ok(links)
    }

    /// Yank state of a whole release.
    ///
    /// A release is only yanked when every one of its files is; the reasons
    /// of all files are merged, sorted, one per line.
    fn yanked(&self, name: &str, version: &Version) -> Result<Yanked> {
        let mut reasons = BTreeSet::new();
        for link in self.links_for_version(name, version)? {
            match link.yanked() {
                Yanked::No => return Ok(Yanked::No),
                Yanked::Yes => {}
                Yanked::Reason(reason) => {
                    reasons.insert(reason.clone());
                }
            }
        }

        if reasons.is_empty() {
            Ok(Yanked::Yes)
        } else {
            Ok(Yanked::Reason(
                reasons.into_iter().collect::<Vec<_>>().join("\n"),
            ))
        }
    }
}
