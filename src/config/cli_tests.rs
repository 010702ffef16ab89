//! Tests for CLI argument parsing.

use super::cli::{Cli, Command, NotifierArg};
use crate::notify::NotifierKind;
use clap::Parser;

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args_leaves_everything_unset() {
        let cli = Cli::parse_from_iter(["externalipchecker"]);

        assert!(cli.command.is_none());
        assert!(cli.interval.is_none());
        assert!(cli.service.is_none());
        assert!(cli.notifier.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_interval_and_service() {
        let cli = Cli::parse_from_iter([
            "externalipchecker",
            "--interval",
            "120",
            "--service",
            "ifconfig.me",
        ]);

        assert_eq!(cli.interval, Some(120));
        assert_eq!(cli.service.as_deref(), Some("ifconfig.me"));
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter([
            "externalipchecker",
            "-i",
            "30",
            "-s",
            "api.ipify.org",
            "-c",
            "custom.toml",
            "-v",
        ]);

        assert_eq!(cli.interval, Some(30));
        assert_eq!(cli.service.as_deref(), Some("api.ipify.org"));
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("custom.toml"))
        );
        assert!(cli.verbose);
    }

    #[test]
    fn parse_notifier_values() {
        let desktop = Cli::parse_from_iter(["externalipchecker", "--notifier", "desktop"]);
        assert_eq!(desktop.notifier, Some(NotifierArg::Desktop));

        let log = Cli::parse_from_iter(["externalipchecker", "--notifier", "log"]);
        assert_eq!(log.notifier, Some(NotifierArg::Log));
    }

    #[test]
    fn invalid_interval_is_rejected() {
        let result = Cli::try_parse_from(["externalipchecker", "--interval", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_interval_is_rejected() {
        let result = Cli::try_parse_from(["externalipchecker", "--interval", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_notifier_is_rejected() {
        let result = Cli::try_parse_from(["externalipchecker", "--notifier", "email"]);
        assert!(result.is_err());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["externalipchecker", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, std::path::PathBuf::from("externalipchecker.toml"));
            }
            None => panic!("expected init command"),
        }
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["externalipchecker", "init", "--output", "/tmp/x.toml"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, std::path::PathBuf::from("/tmp/x.toml"));
            }
            None => panic!("expected init command"),
        }
    }

    #[test]
    fn run_mode_is_not_init() {
        let cli = Cli::parse_from_iter(["externalipchecker"]);
        assert!(!cli.is_init());
    }
}

mod notifier_arg {
    use super::*;

    #[test]
    fn converts_to_notifier_kind() {
        assert_eq!(
            NotifierKind::from(NotifierArg::Desktop),
            NotifierKind::Desktop
        );
        assert_eq!(NotifierKind::from(NotifierArg::Log), NotifierKind::Log);
    }
}
