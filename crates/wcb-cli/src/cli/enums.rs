use clap::ValueEnum;
use wcb_config::BuildMode;

/// Build mode selected on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Mode {
    /// One-shot build with tree-shaking, minification and a service worker
    #[value(name = "production")]
    Production,

    /// Rebuild-on-change development build
    ///
    /// Skips minification and service worker generation and disables
    /// tree-shaking.
    #[value(name = "watch")]
    Watch,
}

impl From<Mode> for BuildMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Production => BuildMode::Production,
            Mode::Watch => BuildMode::Watch,
        }
    }
}
