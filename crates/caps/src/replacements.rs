// Replacement pairs and the default acronym table

/// A camel/screaming spelling pair, e.g. `Http` / `HTTP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Replacement {
    pub camel: String,
    pub screaming: String,
}

impl Replacement {
    pub fn new(camel: impl Into<String>, screaming: impl Into<String>) -> Self {
        Self {
            camel: camel.into(),
            screaming: screaming.into(),
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Replacement {
    fn from((camel, screaming): (A, B)) -> Self {
        Self::new(camel, screaming)
    }
}

/// Acronyms recognized by default.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("Acl", "ACL"),
    ("Api", "API"),
    ("Ascii", "ASCII"),
    ("Cpu", "CPU"),
    ("Css", "CSS"),
    ("Dns", "DNS"),
    ("Eof", "EOF"),
    ("Guid", "GUID"),
    ("Html", "HTML"),
    ("Http", "HTTP"),
    ("Https", "HTTPS"),
    ("Id", "ID"),
    ("Ip", "IP"),
    ("Json", "JSON"),
    ("Lhs", "LHS"),
    ("Qps", "QPS"),
    ("Ram", "RAM"),
    ("Rhs", "RHS"),
    ("Rpc", "RPC"),
    ("Sla", "SLA"),
    ("Smtp", "SMTP"),
    ("Sql", "SQL"),
    ("Ssh", "SSH"),
    ("Tcp", "TCP"),
    ("Tls", "TLS"),
    ("Ttl", "TTL"),
    ("Udp", "UDP"),
    ("Ui", "UI"),
    ("Uid", "UID"),
    ("Uuid", "UUID"),
    ("Uri", "URI"),
    ("Url", "URL"),
    ("Utf8", "UTF8"),
    ("Vm", "VM"),
    ("Xml", "XML"),
    ("Xmpp", "XMPP"),
    ("Xsrf", "XSRF"),
    ("Xss", "XSS"),
];

/// The default table as owned pairs.
pub fn default_replacements() -> Vec<Replacement> {
    DEFAULT_REPLACEMENTS.iter().map(|&pair| Replacement::from(pair)).collect()
}
