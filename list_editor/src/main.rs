use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::config::Config;
use common::logger::init_logger;
use list_editor::input::{parse_lenient, parse_strict};
use list_editor::{SingleNodePolicy, run_edit};
use log::{info, warn};

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Remove,
    Keep,
}

impl From<PolicyArg> for SingleNodePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Remove => SingleNodePolicy::RemoveSole,
            PolicyArg::Keep => SingleNodePolicy::Keep,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Deletes the second-to-last node of a linked list built from the arguments")]
struct Args {
    /// List values, read like C's atoi unless --strict is given. Options go
    /// before the first value; everything from the first value on is a value.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    values: Vec<String>,
    /// Output format: text (two bracketed lines) or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// What to do with a one-node list. Defaults to SINGLE_NODE_POLICY or "remove"
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Reject arguments that are not complete decimal integers
    #[arg(long)]
    strict: bool,
    /// Log level for stderr (and LOG_FILE). Defaults to LOG_LEVEL or "warn"
    #[arg(long)]
    log_level: Option<String>,
    /// Path of the .env file to load
    #[arg(long, default_value = ".env")]
    env_file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::init(&args.env_file);

    let log_level = args.log_level.as_deref().unwrap_or(&config.log_level);
    // Not fatal: only --strict may exit non-zero.
    if let Err(e) = init_logger(log_level, config.log_file.as_deref()) {
        eprintln!("warning: logging disabled: {e}");
    }

    print!("{}", run(&args, config)?);
    Ok(())
}

/// `--policy` wins over the configured name; an unknown name falls back to
/// the default policy.
fn resolve_policy(arg: Option<PolicyArg>, config: &Config) -> SingleNodePolicy {
    match arg {
        Some(arg) => arg.into(),
        None => config
            .single_node_policy
            .parse::<SingleNodePolicy>()
            .unwrap_or_else(|e| {
                warn!("{e}; falling back to \"remove\"");
                SingleNodePolicy::default()
            }),
    }
}

/// Produces everything the binary writes to stdout.
fn run(args: &Args, config: &Config) -> Result<String> {
    let policy = resolve_policy(args.policy, config);

    let values = if args.strict {
        parse_strict(&args.values).context("parsing list values")?
    } else {
        parse_lenient(&args.values)
    };
    info!(
        "{}: editing {} value(s) with policy {policy}",
        config.project_name,
        values.len()
    );

    let report = run_edit(&values, policy);
    match args.format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => {
            let json = report.to_json().context("serializing report")?;
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_policy(policy: &str) -> Config {
        Config {
            project_name: "list-editor".to_string(),
            log_level: "warn".to_string(),
            log_file: None,
            single_node_policy: policy.to_string(),
        }
    }

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("list_editor").chain(argv.iter().copied())).unwrap()
    }

    fn run_with(argv: &[&str], policy: &str) -> Result<String> {
        run(&parse(argv), &config_with_policy(policy))
    }

    #[test]
    fn test_default_text_output() {
        assert_eq!(
            run_with(&["1", "2", "3"], "remove").unwrap(),
            "Original list: [1, 2, 3]\nModified list: [1, 3]\n"
        );
        assert_eq!(
            run_with(&[], "remove").unwrap(),
            "Original list: []\nModified list: []\n"
        );
    }

    #[test]
    fn test_hyphen_led_values_reach_atoi() {
        let args = parse(&["1", "-5x", "3"]);
        assert_eq!(args.values, vec!["1", "-5x", "3"]);
        assert_eq!(
            run(&args, &config_with_policy("remove")).unwrap(),
            "Original list: [1, -5, 3]\nModified list: [1, 3]\n"
        );
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(parse(&["-1", "-2"]).values, vec!["-1", "-2"]);
    }

    #[test]
    fn test_options_after_first_value_are_values() {
        let args = parse(&["1", "--strict"]);
        assert!(!args.strict);
        assert_eq!(args.values, vec!["1", "--strict"]);
        assert_eq!(
            run(&args, &config_with_policy("remove")).unwrap(),
            "Original list: [1, 0]\nModified list: [0]\n"
        );
    }

    #[test]
    fn test_policy_flag_overrides_config() {
        assert_eq!(
            run_with(&["--policy", "keep", "5"], "remove").unwrap(),
            "Original list: [5]\nModified list: [5]\n"
        );
        assert_eq!(
            run_with(&["--policy", "remove", "5"], "keep").unwrap(),
            "Original list: [5]\nModified list: []\n"
        );
    }

    #[test]
    fn test_config_policy_used_without_flag() {
        assert_eq!(
            run_with(&["5"], "keep").unwrap(),
            "Original list: [5]\nModified list: [5]\n"
        );
    }

    #[test]
    fn test_unknown_config_policy_falls_back_to_remove() {
        let config = config_with_policy("sometimes");
        assert_eq!(resolve_policy(None, &config), SingleNodePolicy::RemoveSole);
        assert_eq!(
            run(&parse(&["5"]), &config).unwrap(),
            "Original list: [5]\nModified list: []\n"
        );
    }

    #[test]
    fn test_strict_rejects_non_integers() {
        assert!(run_with(&["--strict", "1", "x"], "remove").is_err());
        assert_eq!(
            run_with(&["--strict", "1", "2"], "remove").unwrap(),
            "Original list: [1, 2]\nModified list: [2]\n"
        );
    }

    #[test]
    fn test_lenient_never_fails() {
        assert!(run_with(&["x", "", "9999999999999"], "remove").is_ok());
    }

    #[test]
    fn test_json_format() {
        let out = run_with(&["--format", "json", "1", "2", "3"], "remove").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["policy"], "remove");
        assert_eq!(json["original"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["modified"], serde_json::json!([1, 3]));
        assert_eq!(json["removed"], 2);
    }
}
