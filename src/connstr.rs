//! Connection string parsing, normalization and canonical serialization.
//!
//! A connection string has the overall shape
//! `(<scheme>://)?<hostlist>(/<bucket>)?(?<options>)?`. Parsing never fails:
//! input that does not match a part of the grammar leaves that part of the
//! record absent, and normalization fills the gaps with defaults. The
//! composition of the two, [`normalize_str`], yields a canonical string that
//! is a fixed point of itself.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

/// Transport scheme filled in by normalization when the input carries none.
pub const DEFAULT_SCHEME: &str = "couchbase";

/// Bucket name filled in by normalization when the input carries none.
pub const DEFAULT_BUCKET: &str = "default";

lazy_static! {
    static ref CONNSTR: Regex = Regex::new(r"^(?:([^:/?]+)://)?([^/?]*)(?:/([^?]*))?(?:\?(.*))?$")
        .expect("invalid connection string pattern");
}

/// A structured connection descriptor.
///
/// As produced by [`ConnSpec::parse`] the record may be partial: `scheme` and
/// `bucket` can be absent and `hosts`/`options` empty. [`ConnSpec::normalize`]
/// returns a total record with every field populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnSpec {
    pub scheme: Option<String>,
    /// Host and port pairs, in input order. A port of `0` means unspecified.
    pub hosts: Vec<(String, u16)>,
    pub bucket: Option<String>,
    pub options: HashMap<String, String>,
}

impl ConnSpec {
    /// Parses a connection string into a (possibly partial) record.
    ///
    /// Parsing is lenient: an empty string yields an entirely empty record,
    /// host entries with a non-numeric port keep the hostname and drop the
    /// port, and option pairs without a `=` are skipped.
    pub fn parse(input: &str) -> Self {
        let Some(caps) = CONNSTR.captures(input) else {
            return ConnSpec::default();
        };

        let scheme = caps.get(1).map(|m| m.as_str().to_string());

        let mut hosts = Vec::new();
        if let Some(hostlist) = caps.get(2) {
            for entry in hostlist.as_str().split([',', ';']) {
                let (hostname, port) = match entry.split_once(':') {
                    Some((hostname, port)) => (hostname, port.parse().unwrap_or(0)),
                    None => (entry, 0),
                };
                if !hostname.is_empty() {
                    hosts.push((hostname.to_string(), port));
                }
            }
        }

        let bucket = caps
            .get(3)
            .map(|m| m.as_str())
            .filter(|bucket| !bucket.is_empty())
            .map(str::to_string);

        let mut options = HashMap::new();
        if let Some(query) = caps.get(4) {
            for pair in query.as_str().split(['&', '?']) {
                if let Some((key, value)) = pair.split_once('=') {
                    // Duplicate keys: the last occurrence wins.
                    options.insert(percent_decode(key), percent_decode(value));
                }
            }
        }

        ConnSpec {
            scheme,
            hosts,
            bucket,
            options,
        }
    }

    /// Returns a new record with defaults applied wherever this record is
    /// missing a value. `hosts` and `options` may still be empty.
    pub fn normalize(&self) -> Self {
        ConnSpec {
            scheme: Some(
                self.scheme
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            ),
            hosts: self.hosts.clone(),
            bucket: Some(
                self.bucket
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            ),
            options: self.options.clone(),
        }
    }
}

/// The canonical serialization. Options are written sorted by key so the
/// output is deterministic.
impl fmt::Display for ConnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}://", scheme)?;
        }

        write!(
            f,
            "{}",
            self.hosts
                .iter()
                .map(|(hostname, port)| match port {
                    0 => hostname.clone(),
                    port => format!("{}:{}", hostname, port),
                })
                .join(",")
        )?;

        if let Some(bucket) = &self.bucket {
            write!(f, "/{}", bucket)?;
        }

        if !self.options.is_empty() {
            write!(
                f,
                "?{}",
                self.options
                    .iter()
                    .sorted()
                    .map(|(key, value)| format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    ))
                    .join("&")
            )?;
        }

        Ok(())
    }
}

/// Parses `input`, applies defaults and re-serializes it in canonical form.
///
/// The result is a fixed point: `normalize_str(normalize_str(s))` equals
/// `normalize_str(s)` for any `s`.
pub fn normalize_str(input: &str) -> String {
    ConnSpec::parse(input).normalize().to_string()
}

fn percent_decode(text: &str) -> String {
    urlencoding::decode(text)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| text.to_string())
}
