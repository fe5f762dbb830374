//! Configuration for the command shell.

use keystone_store::StoreConfig;

use crate::format::OutputFormat;

/// Settings for a [`Repl`](crate::Repl) and the store it drives.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Whether to print the welcome banner in interactive mode.
    pub show_banner: bool,

    /// Initial output format.
    pub output: OutputFormat,

    /// Validation limits for the session's store.
    pub store: StoreConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "keystone> ".to_string(),
            show_banner: true,
            output: OutputFormat::Text,
            store: StoreConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Builder method to set the store configuration.
    #[must_use]
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}
