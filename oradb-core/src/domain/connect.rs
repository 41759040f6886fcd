// oradb-core/src/domain/connect.rs

use crate::domain::credentials::Credentials;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Administrative role for the "AS" clause of the connect identifier.
/// Anything other than SYSDBA/SYSOPER is ignored, matching the behavior
/// Oracle's own tools tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Sysdba,
    Sysoper,
}

impl Role {
    /// Case-insensitive parse. `None` for unrecognized values, which the
    /// identifier builder silently drops.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "SYSDBA" => Some(Self::Sysdba),
            "SYSOPER" => Some(Self::Sysoper),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Sysdba => "SYSDBA",
            Self::Sysoper => "SYSOPER",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, validator::Validate)]
pub struct ConnectionConfig {
    #[serde(default = "default_hostname")]
    pub hostname: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(rename = "service-name", default)]
    #[validate(length(min = 1, message = "connection.service-name is required"))]
    pub service_name: String,

    /// Commonly used in Oracle RAC databases with multiple instances.
    #[serde(rename = "instance-name", default)]
    pub instance_name: String,

    /// Role for the "AS" clause. Possible values: SYSDBA and SYSOPER.
    /// Other values are ignored.
    #[serde(rename = "as-clause", default)]
    pub as_clause: String,

    /// Render the connect identifier in Easy Connect form instead of the
    /// full descriptor form.
    #[serde(rename = "easy-connect", default)]
    pub easy_connect: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            port: default_port(),
            service_name: String::new(),
            instance_name: String::new(),
            as_clause: String::new(),
            easy_connect: false,
        }
    }
}

fn default_hostname() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    1521
}

/// Builds the Oracle connect identifier for the command-line tools.
///
/// By default we specify the full descriptor instead of relying on
/// TNSNAMES resolution:
/// `user[/password]@(DESCRIPTION=(ADDRESS_LIST=(ADDRESS=(PROTOCOL=tcp)(HOST=h)(PORT=p)))(CONNECT_DATA=(SERVICE_NAME=s)))`
/// With `easy_connect` the short `user[/password]@//h:p/s` form is used.
pub fn connect_identifier(credentials: &Credentials, config: &ConnectionConfig) -> String {
    let mut identifier = String::new();
    // first the username
    identifier.push_str(&credentials.username);
    // then the password if given
    if !credentials.password.is_empty() {
        identifier.push('/');
        identifier.push_str(&credentials.password);
    }

    // now the connect_identifier itself
    if !config.easy_connect {
        let _ = write!(
            identifier,
            "@(DESCRIPTION=(ADDRESS_LIST=(ADDRESS=(PROTOCOL=tcp)(HOST={})(PORT={})))(CONNECT_DATA=(SERVICE_NAME={})",
            config.hostname, config.port, config.service_name
        );
        if !config.instance_name.is_empty() {
            let _ = write!(identifier, "(INSTANCE_NAME={})", config.instance_name);
        }
        identifier.push_str("))");
    } else {
        let _ = write!(
            identifier,
            "@//{}:{}/{}",
            config.hostname, config.port, config.service_name
        );
    }

    // add the AS clause if necessary
    if let Some(role) = Role::parse(&config.as_clause) {
        identifier.push_str(" AS ");
        identifier.push_str(role.as_str());
    }

    identifier
}
