use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("taskprune")
        .about(
            "Deregister ECS task definitions that no service uses, \
             keeping the newest per family",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("mark-inactive")
                .long("mark-inactive")
                .help("Actually deregister the selected task definitions (default is a dry run)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print the full removal list and enable info logs on stderr")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("keep")
                .long("keep")
                .help("Newest revisions to keep per family (default: 5)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("cluster")
                .long("cluster")
                .help("Cluster to scan for services; repeatable (default: all clusters)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .help("AWS region passed to the aws CLI"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("AWS profile passed to the aws CLI"),
        )
        .arg(
            Arg::new("aws-cli")
                .long("aws-cli")
                .value_name("PATH")
                .help("Path to the aws executable (default: aws)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Read configuration from FILE instead of ~/.taskprune and ./.taskprune")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_defaults_are_dry_run_and_quiet() {
        let matches = build_cli().try_get_matches_from(vec!["taskprune"]).unwrap();
        assert!(!matches.get_flag("mark-inactive"));
        assert_eq!(matches.get_count("verbose"), 0);
        assert!(matches.get_one::<usize>("keep").is_none());
        assert!(matches.get_many::<String>("cluster").is_none());
    }

    #[test]
    fn test_verbose_counts() {
        let matches = build_cli()
            .try_get_matches_from(vec!["taskprune", "-vv", "--verbose"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 3);
    }

    #[test]
    fn test_all_flags() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "taskprune",
                "--mark-inactive",
                "--keep",
                "3",
                "--cluster",
                "prod",
                "--cluster",
                "staging",
                "--region",
                "eu-west-1",
                "--profile",
                "ops",
                "--aws-cli",
                "/usr/local/bin/aws",
                "--config",
                "/tmp/taskprune.toml",
                "--no-color",
            ])
            .unwrap();

        assert!(matches.get_flag("mark-inactive"));
        assert_eq!(matches.get_one::<usize>("keep"), Some(&3));
        let clusters: Vec<&String> = matches.get_many::<String>("cluster").unwrap().collect();
        assert_eq!(clusters, vec!["prod", "staging"]);
        assert_eq!(
            matches.get_one::<String>("region").map(String::as_str),
            Some("eu-west-1")
        );
        assert_eq!(
            matches.get_one::<PathBuf>("config"),
            Some(&PathBuf::from("/tmp/taskprune.toml"))
        );
        assert!(matches.get_flag("no-color"));
    }

    #[test]
    fn test_keep_rejects_negative() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["taskprune", "--keep", "-1"])
                .is_err()
        );
    }
}
