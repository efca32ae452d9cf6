use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the dashboard fetches its JSON documents from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The bundled fixture server on this machine.
    #[default]
    Local,
    /// Any other server exposing the same `/data` paths.
    Custom { data_url: String },
}

impl Environment {
    /// Returns the base URL the data paths are resolved against.
    pub fn data_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Custom { data_url } => data_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    /// Accepts `local` or an `http(s)://` base URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            Ok(Environment::Local)
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Environment::Custom {
                data_url: trimmed.to_string(),
            })
        } else {
            Err(())
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.data_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_urls() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://dash.example.com/".parse::<Environment>().map(|e| e.data_url()),
            Ok("https://dash.example.com".to_string())
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn local_points_at_the_fixture_server() {
        assert_eq!(Environment::Local.data_url(), "http://localhost:3000");
        assert_eq!(
            format!("{:?}", Environment::Local),
            "Environment::Local, URL: http://localhost:3000"
        );
    }
}
