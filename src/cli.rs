use abacus_drill::generator::constants::{DEFAULT_MAX_WINDOW_DIGITS, WINDOW_DIGITS_LIMIT};
use abacus_drill::{ExpressionGenerator, GeneratorConfig, Operator, Problem, ProblemSettings};
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Abacus Drill - Generate arithmetic practice problems
#[derive(Parser, Debug)]
#[command(name = "abacus-drill")]
#[command(about = "Generate random arithmetic expressions that evaluate to a target value")]
#[command(version)]
pub struct CliArgs {
    /// Fixed target value; a random one is drawn when omitted
    #[arg(short, long, conflicts_with = "result_digits")]
    pub value: Option<u64>,

    /// Number of digits of the random target
    #[arg(short, long, default_value_t = 2)]
    pub result_digits: u32,

    /// Number of operators in each expression
    #[arg(short = 'n', long, default_value_t = 1)]
    pub operators: usize,

    /// Approximate digit width of each operand
    #[arg(short, long, default_value_t = 1)]
    pub digits: u32,

    /// Allowed operators, comma separated (e.g. "add,mul" or "+,*")
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = Operator::ALL.to_vec()
    )]
    pub ops: Vec<Operator>,

    /// Number of problems to print
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible problems
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the answer after each question
    #[arg(long)]
    pub show_answer: bool,

    /// Widest operand search window, in digits
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_WINDOW_DIGITS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(WINDOW_DIGITS_LIMIT))
    )]
    pub max_window_digits: u32,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub value: Option<u64>,
    pub settings: ProblemSettings,
    pub count: usize,
    pub seed: Option<u64>,
    pub show_answer: bool,
    pub generator: GeneratorConfig,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        if args.ops.is_empty() {
            bail!("At least one operator must be given");
        }
        if args.count == 0 {
            bail!("Count must be at least 1");
        }

        Ok(CliConfig {
            value: args.value,
            settings: ProblemSettings {
                result_digits: args.result_digits,
                num_operators: args.operators,
                expected_digits: args.digits,
                allowed_ops: args.ops,
            },
            count: args.count,
            seed: args.seed,
            show_answer: args.show_answer,
            generator: GeneratorConfig::new().with_max_window_digits(args.max_window_digits),
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse()).context("Invalid arguments")
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .init();
    Ok(())
}

/// Build the requested number of problems from one seeded generator
pub fn build_problems(config: &CliConfig) -> Result<Vec<Problem>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!("Generator limits: {:?}", config.generator);
    let generator = ExpressionGenerator::new(config.generator.clone());

    (0..config.count)
        .map(|_| {
            match config.value {
                Some(value) => Problem::with_target(value, &config.settings, &generator, &mut rng),
                None => Problem::generate(&config.settings, &generator, &mut rng),
            }
            .context("Could not build a problem with these parameters")
        })
        .collect()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    info!(
        "Generating {} problem(s) with {} operator(s) from {:?}",
        config.count, config.settings.num_operators, config.settings.allowed_ops
    );

    for problem in build_problems(&config)? {
        if config.show_answer {
            println!("{}{}", problem.question(), problem.answer());
        } else {
            println!("{}?", problem.question());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["abacus-drill"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&[]);
        assert_eq!(parsed.value, None);
        assert_eq!(parsed.result_digits, 2);
        assert_eq!(parsed.operators, 1);
        assert_eq!(parsed.digits, 1);
        assert_eq!(parsed.ops, Operator::ALL.to_vec());
        assert_eq!(parsed.count, 1);
        assert!(!parsed.show_answer);
        assert!(matches!(parsed.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_operator_list_parsing() {
        let parsed = args(&["--ops", "add,mul"]);
        assert_eq!(parsed.ops, vec![Operator::Add, Operator::Multiply]);

        let parsed = args(&["--ops", "-,/"]);
        assert_eq!(parsed.ops, vec![Operator::Subtract, Operator::Divide]);
    }

    #[test]
    fn test_unknown_operator_rejected() {
        let result = CliArgs::try_parse_from(["abacus-drill", "--ops", "pow"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_args() {
        let parsed = args(&["-v", "36", "-n", "3", "-d", "2", "--count", "4", "--seed", "9"]);
        let config = CliConfig::try_from(parsed);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.value, Some(36));
            assert_eq!(config.settings.num_operators, 3);
            assert_eq!(config.settings.expected_digits, 2);
            assert_eq!(config.count, 4);
            assert_eq!(config.seed, Some(9));
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        let parsed = args(&["--count", "0"]);
        assert!(CliConfig::try_from(parsed).is_err());
    }

    #[test]
    fn test_value_conflicts_with_result_digits() {
        let result = CliArgs::try_parse_from(["abacus-drill", "-v", "36", "-r", "3"]);
        assert!(result.is_err());

        let result = CliArgs::try_parse_from(["abacus-drill", "-v", "36"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_window_digits_bounded_at_parse() {
        let result = CliArgs::try_parse_from(["abacus-drill", "--max-window-digits", "10"]);
        assert!(result.is_err());

        let parsed = args(&["--max-window-digits", "5"]);
        let config = CliConfig::try_from(parsed);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.generator.window_digits(), 5);
        }
    }

    #[test]
    fn test_fixed_value_problems() {
        let parsed = args(&["-v", "36", "-n", "2", "--count", "3", "--seed", "17"]);
        let config = CliConfig::try_from(parsed);
        assert!(config.is_ok());
        if let Ok(config) = config {
            let problems = build_problems(&config);
            assert!(problems.is_ok(), "{:?}", problems.err());
            if let Ok(problems) = problems {
                assert_eq!(problems.len(), 3);
                for problem in problems {
                    assert_eq!(problem.answer(), 36);
                    assert_eq!(problem.expression().evaluate(), Ok(36));
                    assert!(problem.question().ends_with(" = "));
                }
            }
        }
    }

    #[test]
    fn test_random_targets_follow_result_digits() {
        let parsed = args(&["-r", "3", "--ops", "add,mul", "--count", "5", "--seed", "3"]);
        let config = CliConfig::try_from(parsed);
        assert!(config.is_ok());
        if let Ok(config) = config {
            let problems = build_problems(&config);
            assert!(problems.is_ok(), "{:?}", problems.err());
            if let Ok(problems) = problems {
                assert!(problems.iter().all(|p| (100..1000).contains(&p.answer())));
            }
        }
    }

    #[test]
    fn test_log_level_filter() {
        let filter: log::LevelFilter = (&LogLevel::Debug).into();
        assert_eq!(filter, log::LevelFilter::Debug);
    }
}
