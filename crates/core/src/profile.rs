//! INI rendering of the AWS CLI `config` and `credentials` files

use crate::R2Settings;
use secrecy::ExposeSecret;
use std::fmt;

/// Profile section written to both files
pub const DEFAULT_PROFILE: &str = "default";
/// R2 ignores the region, but the AWS CLI requires one
pub const R2_REGION: &str = "auto";
/// Output format for AWS CLI commands
pub const OUTPUT_FORMAT: &str = "json";

/// The two files making up an AWS CLI profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileFile {
    /// `~/.aws/config`
    Config,
    /// `~/.aws/credentials`
    Credentials,
}

impl ProfileFile {
    /// Both files, in write order
    pub const ALL: [Self; 2] = [Self::Config, Self::Credentials];

    /// File name inside the `.aws` directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Credentials => "credentials",
        }
    }

    /// Render this file's contents for `settings`
    #[must_use]
    pub fn render(self, settings: &R2Settings) -> String {
        match self {
            Self::Config => render_config(settings),
            Self::Credentials => render_credentials(settings),
        }
    }

    /// Permission bits for a newly created file.
    ///
    /// Credentials are readable by the owner only.
    #[cfg(unix)]
    #[must_use]
    pub const fn mode(self) -> u32 {
        match self {
            Self::Config => 0o644,
            Self::Credentials => 0o600,
        }
    }
}

impl fmt::Display for ProfileFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Render `~/.aws/config` with the endpoint, region and output format
#[must_use]
pub fn render_config(settings: &R2Settings) -> String {
    render_section(
        DEFAULT_PROFILE,
        &[
            ("endpoint_url", settings.endpoint.as_str()),
            ("region", R2_REGION),
            ("output", OUTPUT_FORMAT),
        ],
    )
}

/// Render `~/.aws/credentials` with the access key pair
#[must_use]
pub fn render_credentials(settings: &R2Settings) -> String {
    render_section(
        DEFAULT_PROFILE,
        &[
            ("aws_access_key_id", settings.access_key_id.as_str()),
            (
                "aws_secret_access_key",
                settings.secret_access_key.expose_secret(),
            ),
        ],
    )
}

fn render_section(name: &str, entries: &[(&str, &str)]) -> String {
    let mut out = format!("[{name}]\n");
    for (key, value) in entries {
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out
}
