//! resume-match CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use resume_match::{Cli, Commands, commands};
use resume_match_core::config::ConfigLoader;
use resume_match_core::{InputPolicy, Vocabulary};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let max_input = if config.disable_input_limit {
        None
    } else {
        config
            .max_input_bytes
            .or(Some(resume_match_core::DEFAULT_MAX_INPUT_BYTES))
    };

    let vocab = Vocabulary::from_config(&config).context("failed to build vocabulary")?;
    let policy = InputPolicy::from_config(&config);

    // Execute command
    let result = match command {
        Commands::Analyze(args) => commands::analyze::cmd_analyze(
            args,
            cli.json,
            &vocab,
            &policy,
            config.match_min_score,
            max_input,
        ),
        Commands::Score(args) => commands::score::cmd_score(
            args,
            cli.json,
            config.match_min_score,
            max_input,
        ),
        Commands::Skills(args) => commands::skills::cmd_skills(args, cli.json, &vocab, max_input),
        Commands::Ats(args) => {
            commands::ats::cmd_ats(args, cli.json, &vocab, config.ats_min_score, max_input)
        }
        Commands::Keywords(args) => commands::keywords::cmd_keywords(args, cli.json, max_input),
        Commands::Info(args) => {
            commands::info::cmd_info(args, cli.json, &config, &config_sources, &vocab)
        }
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            rt.block_on(commands::serve::cmd_serve(args, vocab, policy, max_input))
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
