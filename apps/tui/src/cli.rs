use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "career-ladder",
    version,
    about = "Explore engineering career ladder roles on a radar chart"
)]
pub struct CliArgs {
    /// Print a report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON, radar layout included
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Restore a shared session (token or full share URL)
    #[arg(long, value_name = "TOKEN|URL")]
    pub state: Option<String>,

    /// Load roles and dimensions from a JSON catalog
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Radar radius in chart units
    #[arg(long, value_name = "UNITS")]
    pub radius: Option<f64>,

    /// Base URL for share links
    #[arg(long = "share-base", value_name = "URL")]
    pub share_base: Option<String>,

    /// Append logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(state) = &self.state {
            std::env::set_var("SESSION_STATE", state);
        }
        if let Some(path) = &self.catalog {
            std::env::set_var("CATALOG_PATH", path);
        }
        if let Some(radius) = self.radius {
            std::env::set_var("CANVAS_RADIUS", radius.to_string());
        }
        if let Some(url) = &self.share_base {
            std::env::set_var("SHARE_BASE_URL", url);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LADDER_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::parse_from([
            "career-ladder",
            "--headless",
            "--json",
            "--state",
            "http://localhost:3000/#%7B%7D",
            "--catalog",
            "ladder.json",
            "--radius",
            "160",
            "--share-base",
            "https://ladder.example/",
        ]);

        assert!(args.headless && args.json && !args.debug);
        assert_eq!(args.state.as_deref(), Some("http://localhost:3000/#%7B%7D"));
        assert_eq!(args.catalog.as_deref(), Some("ladder.json"));
        assert_eq!(args.radius, Some(160.0));
        assert_eq!(args.share_base.as_deref(), Some("https://ladder.example/"));
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn help_mentions_share_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--state"));
        assert!(help.contains("--share-base"));
    }
}
