// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{GlobalOption, TracingConfig, client_token};

/// Everything the commands need that comes from outside the program.
#[derive(Debug, Clone)]
pub struct ReadableConfig {
    pub api_url: String,
    pub token: String,
    /// [None] when logging is disabled.
    pub tracing_config: Option<TracingConfig>,
}

impl ReadableConfig {
    /// Uses the token given on the command line, or else the saved one (which is created
    /// on first use).
    pub fn resolve(global_options: &GlobalOption) -> Self {
        Self::resolve_with(global_options, client_token::load_token_or_generate_and_save_it)
    }

    pub fn resolve_with(
        global_options: &GlobalOption,
        load_token: impl FnOnce() -> String,
    ) -> Self {
        let token = match &global_options.token {
            Some(token) => token.clone(),
            None => load_token(),
        };
        let tracing_config = global_options
            .enable_logging
            .then(|| TracingConfig::new_file(global_options.log_file.clone()));
        Self {
            api_url: global_options.api_url.clone(),
            token,
            tracing_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CliArg, WriterConfig};

    #[test]
    fn test_token_flag_wins_over_saved_token() {
        let it =
            CliArg::try_parse_from(["readable", "browse", "--token", "zz99zz99"]).unwrap();
        let config = ReadableConfig::resolve_with(&it.global_options, || "saved000".into());
        assert_eq!(config.token, "zz99zz99");
        assert!(config.tracing_config.is_none());
    }

    #[test]
    fn test_saved_token_and_logging() {
        let it = CliArg::try_parse_from([
            "readable",
            "browse",
            "-l",
            "--log-file",
            "/tmp/r.log",
            "--api-url",
            "http://example.com:3001",
        ])
        .unwrap();
        let config = ReadableConfig::resolve_with(&it.global_options, || "saved000".into());
        assert_eq!(config.token, "saved000");
        assert_eq!(config.api_url, "http://example.com:3001");
        assert_eq!(
            config.tracing_config.map(|it| it.writer_config),
            Some(WriterConfig::File("/tmp/r.log".into()))
        );
    }
}
