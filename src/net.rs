//! Network value conversion: URIs, URLs and IP addresses.
//!
//! URI and URL conversion is purely syntactic. A URI may be any RFC 3986 URI
//! reference, relative ones included; a URL must be absolute. [`InetAddrConverter`] is the one
//! converter in the crate that may touch the environment: a token that is not
//! an IP literal is resolved as a host name through a [`HostResolver`], which by
//! default asks the operating system and may block.

use crate::{Convert, Error, Result};
use iri_string::types::{UriReferenceStr, UriReferenceString};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use tracing::debug;
use url::Url;

static HOST_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.?$")
        .unwrap()
});

/// Longest host name accepted for lookup.
const MAX_HOST_NAME_LEN: usize = 253;

/// Protocols a [`UrlConverter`] accepts unless configured otherwise.
pub const DEFAULT_URL_PROTOCOLS: &[&str] = &["http", "https", "ftp", "file", "jar", "mailto"];

fn parse_absolute(value: &str, expected: &str) -> Result<Url> {
    if value.is_empty() {
        return Err(Error::EmptyInput);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(Error::format_mismatch_with(expected, "whitespace is not allowed"));
    }
    Url::parse(value).map_err(|e| Error::format_mismatch_with(expected, e))
}

/// Converts a URI reference, absolute or relative, to a [`UriReferenceString`].
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, UriConverter};
///
/// let uri = UriConverter.convert("steam://connect/192.0.2.1:27015").unwrap();
/// assert_eq!(uri.scheme_str(), Some("steam"));
/// assert_eq!(UriConverter.convert("../up").unwrap().scheme_str(), None);
/// assert!(UriConverter.convert("Hello, world!").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UriConverter;

impl Convert for UriConverter {
    type Output = UriReferenceString;

    fn convert(&self, value: &str) -> Result<UriReferenceString> {
        if value.is_empty() {
            return Err(Error::EmptyInput);
        }
        UriReferenceStr::new(value)
            .map(ToOwned::to_owned)
            .map_err(|e| Error::format_mismatch_with("a URI reference", e))
    }
}

/// Converts a URL whose protocol is on an allow-list.
///
/// # Examples
///
/// ```rust
/// use config_converters::{Convert, UrlConverter};
///
/// let secure = UrlConverter::new().with_protocols(["https"]);
/// assert!(secure.convert("https://elypia.org/").is_ok());
/// assert!(secure.convert("http://elypia.org/").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct UrlConverter {
    protocols: Vec<String>,
}

impl Default for UrlConverter {
    fn default() -> Self {
        UrlConverter {
            protocols: DEFAULT_URL_PROTOCOLS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl UrlConverter {
    /// Creates a converter accepting [`DEFAULT_URL_PROTOCOLS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the accepted protocols; comparison ignores case.
    #[must_use]
    pub fn with_protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.protocols = protocols
            .into_iter()
            .map(|p| p.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    #[must_use]
    pub fn protocols(&self) -> &[String] {
        &self.protocols
    }
}

impl Convert for UrlConverter {
    type Output = Url;

    fn convert(&self, value: &str) -> Result<Url> {
        let url = parse_absolute(value, "a URL")?;
        if !self.protocols.iter().any(|p| p == url.scheme()) {
            return Err(Error::format_mismatch_with(
                "a URL",
                format!(
                    "protocol '{}' is not one of {}",
                    url.scheme(),
                    self.protocols.join(", ")
                ),
            ));
        }
        Ok(url)
    }
}

/// Resolves host names to addresses.
pub trait HostResolver: Send + Sync {
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolves host names with the operating system's resolver.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        (host, 0)
            .to_socket_addrs()
            .map(|addrs| addrs.map(|addr| addr.ip()).collect())
    }
}

/// Converts an IP literal or host name to an [`IpAddr`].
///
/// IPv6 literals may be wrapped in brackets. Host names are resolved and the
/// first address returned is used.
///
/// # Examples
///
/// ```rust
/// use std::net::{IpAddr, Ipv4Addr};
/// use config_converters::{Convert, InetAddrConverter};
///
/// let converter = InetAddrConverter::new();
/// assert_eq!(
///     converter.convert("192.168.0.1").unwrap(),
///     IpAddr::V4(Ipv4Addr::new(192, 168, 0, 1))
/// );
/// assert!(converter.convert("[::1]").unwrap().is_loopback());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InetAddrConverter<R = SystemResolver> {
    resolver: R,
}

impl InetAddrConverter {
    /// Creates a converter using the system resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: HostResolver> InetAddrConverter<R> {
    /// Creates a converter resolving host names with `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        InetAddrConverter { resolver }
    }
}

impl<R: HostResolver> Convert for InetAddrConverter<R> {
    type Output = IpAddr;

    fn convert(&self, value: &str) -> Result<IpAddr> {
        if value.is_empty() {
            return Err(Error::EmptyInput);
        }

        let literal = value
            .strip_prefix('[')
            .and_then(|v| v.strip_suffix(']'))
            .unwrap_or(value);
        if let Ok(addr) = literal.parse::<IpAddr>() {
            return Ok(addr);
        }

        if value.len() > MAX_HOST_NAME_LEN || !HOST_NAME_PATTERN.is_match(value) {
            return Err(Error::format_mismatch("an IP address or host name"));
        }

        debug!(host = value, "resolving host name");
        let addrs = self
            .resolver
            .resolve(value)
            .map_err(|e| Error::unresolvable(value, e))?;
        addrs
            .into_iter()
            .next()
            .ok_or_else(|| Error::unresolvable(value, "no addresses found for host"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::collections::HashMap;
    use std::net::{Ipv4Addr, Ipv6Addr};

    struct StaticResolver(HashMap<&'static str, IpAddr>);

    impl HostResolver for StaticResolver {
        fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
            self.0
                .get(host)
                .map(|addr| vec![*addr])
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "unknown host"))
        }
    }

    fn converter() -> InetAddrConverter<StaticResolver> {
        let hosts = HashMap::from([("localhost", IpAddr::V4(Ipv4Addr::LOCALHOST))]);
        InetAddrConverter::with_resolver(StaticResolver(hosts))
    }

    #[test]
    fn test_uri_schemes() {
        for input in [
            "mailto:java-net@java.sun.com",
            "news:comp.lang.java",
            "urn:isbn:096139210x",
            "steam://connect/192.0.2.1:27015",
        ] {
            assert!(UriConverter.convert(input).is_ok(), "input {}", input);
        }
    }

    #[test]
    fn test_relative_uri_references() {
        for input in ["relative/path", "../up", "//host/path", "#frag", "/abs/path", "?q=1"] {
            let uri = UriConverter.convert(input).unwrap();
            assert_eq!(uri.as_str(), input);
            assert_eq!(uri.scheme_str(), None, "input {}", input);
        }
        assert_eq!(
            UriConverter.convert("//host/path").unwrap().authority_str(),
            Some("host")
        );
    }

    #[test]
    fn test_uri_errors() {
        assert_eq!(UriConverter.convert("").unwrap_err(), Error::EmptyInput);
        for input in [" ", "Hello, world!", "%zz", "http://[::1", " http://padded.example/"] {
            assert_eq!(
                UriConverter.convert(input).unwrap_err().kind(),
                ErrorKind::FormatMismatch,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_url_protocols() {
        let url = UrlConverter::new().convert("https://elypia.org/").unwrap();
        assert_eq!(url.as_str(), "https://elypia.org/");

        let filtered = UrlConverter::new().with_protocols(["HTTP", "https"]);
        assert_eq!(filtered.protocols(), ["http", "https"]);
        assert!(filtered.convert("https://gitlab.com/").is_ok());

        let https_only = UrlConverter::new().with_protocols(["https"]);
        assert_eq!(
            https_only.convert("http://elypia.org/").unwrap_err().kind(),
            ErrorKind::FormatMismatch
        );
        assert!(UrlConverter::new().convert("steam://connect/1").is_err());
    }

    #[test]
    fn test_invalid_urls() {
        for input in ["Hello, world!", ":invalid.protocol"] {
            assert!(UrlConverter::new().convert(input).is_err(), "input {}", input);
        }
    }

    #[test]
    fn test_ip_literals() {
        assert_eq!(
            converter().convert("192.168.0.1").unwrap(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 0, 1))
        );
        assert_eq!(
            converter().convert("2001:db8:0:1234:0:567:8:1").unwrap(),
            IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0x1234, 0, 0x567, 8, 1))
        );
        assert_eq!(
            converter().convert("[::1]").unwrap(),
            IpAddr::V6(Ipv6Addr::LOCALHOST)
        );
    }

    #[test]
    fn test_host_lookup() {
        assert_eq!(
            converter().convert("localhost").unwrap(),
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        );
        assert_eq!(
            converter().convert("512.512.512.512").unwrap_err().kind(),
            ErrorKind::UnresolvableSymbol
        );
    }

    #[test]
    fn test_system_resolver_localhost() {
        let addr = InetAddrConverter::new().convert("localhost").unwrap();
        assert!(addr.is_loopback(), "resolved to {}", addr);
    }

    #[test]
    fn test_system_resolver_unknown_host() {
        // The .invalid top-level domain never resolves.
        assert_eq!(
            InetAddrConverter::new()
                .convert("nonexistent.invalid")
                .unwrap_err()
                .kind(),
            ErrorKind::UnresolvableSymbol
        );
    }

    #[test]
    fn test_invalid_host_names() {
        assert_eq!(converter().convert("").unwrap_err(), Error::EmptyInput);
        for input in ["Hello, world!", "-leading.example", "under_score.example"] {
            assert_eq!(
                converter().convert(input).unwrap_err().kind(),
                ErrorKind::FormatMismatch,
                "input {}",
                input
            );
        }
    }
}
