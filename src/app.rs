use crate::cli::{Cli, Commands, SequenceArgs};
use anyhow::{Context, Result};
use image_sequencer::config::Config;
use image_sequencer::engine::{self, FfmpegRunner, Resolution, SequenceBuilder, SourceSelection};
use std::process;

pub fn run(cli: Cli) {
    let config = match cli.command {
        // init-config reports on the file itself, so don't create it implicitly first
        Commands::InitConfig => Config::default(),
        _ => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: {:#}", e);
            Config::default()
        }),
    };
    let program = cli
        .ffmpeg
        .clone()
        .unwrap_or_else(|| config.encoder.program.clone());

    let result = match cli.command {
        Commands::Manifest(args) => handle_manifest(&args, &config, &program),
        Commands::Command { sequence, json } => handle_command(&sequence, json, &config, &program),
        Commands::Run(args) => handle_run(&args, &config, &program),
        Commands::Summary(args) => handle_summary(&args, &config),
        Commands::CheckFfmpeg => handle_check_ffmpeg(&program),
        Commands::InitConfig => handle_init_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Expand inputs (files and folders) into the final ordered source list
fn collect_sources(args: &SequenceArgs) -> Result<SourceSelection> {
    let mut selection = SourceSelection::new();
    for input in &args.inputs {
        if input.is_dir() {
            selection.add_folder(input, true)?;
        } else {
            selection.add_files([input], true)?;
        }
    }
    Ok(selection)
}

/// Translate CLI flags + config into builder state. CLI wins over config.
fn configure(
    args: &SequenceArgs,
    config: &Config,
    program: &str,
) -> Result<SequenceBuilder<FfmpegRunner>> {
    let defaults = &config.defaults;
    let selection = collect_sources(args)?;

    let mut builder =
        SequenceBuilder::with_collaborators(FfmpegRunner::new(program), engine::LocalFs);
    builder.set_source_paths(selection.into_paths());
    builder.set_source_frame_rate(args.source_fps.unwrap_or(defaults.source_fps))?;
    builder.set_output_frame_rate(args.output_fps.unwrap_or(defaults.output_fps))?;
    builder.set_output_path(
        args.output
            .clone()
            .unwrap_or_else(|| defaults.output.clone().into()),
    );
    builder.set_manifest_path(
        args.manifest
            .clone()
            .unwrap_or_else(|| defaults.manifest.clone().into()),
    );

    let resolution = match (&args.resolution, &defaults.resolution) {
        (Some(res), _) => Some(*res),
        (None, Some(text)) => Some(
            text.parse::<Resolution>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid resolution in config: {}", text))?,
        ),
        (None, None) => None,
    };
    builder.set_output_resolution(resolution)?;
    builder.set_overwrite_existing(args.overwrite_override().unwrap_or(defaults.overwrite));

    Ok(builder)
}

fn handle_manifest(args: &SequenceArgs, config: &Config, program: &str) -> Result<()> {
    let builder = configure(args, config, program)?;
    let entries = builder.generate_manifest()?;
    println!(
        "Wrote {} entries to {}",
        entries,
        builder.manifest_path().display()
    );
    Ok(())
}

fn handle_command(args: &SequenceArgs, json: bool, config: &Config, program: &str) -> Result<()> {
    let builder = configure(args, config, program)?;

    if json {
        let mut tokens = vec![program.to_string()];
        tokens.extend(builder.build_command()?);
        println!(
            "{}",
            serde_json::to_string_pretty(&tokens).context("Failed to serialize command")?
        );
    } else {
        println!("{}", builder.format_command()?);
    }
    Ok(())
}

fn handle_run(args: &SequenceArgs, config: &Config, program: &str) -> Result<()> {
    let builder = configure(args, config, program)?;
    if builder.source_paths().is_empty() {
        eprintln!("Warning: no input images given; ffmpeg will most likely refuse the empty manifest");
    }

    println!(
        "Encoding {} images -> {}",
        builder.source_paths().len(),
        builder.output_path().display()
    );
    builder.run()?;
    println!("Done: {}", builder.output_path().display());
    Ok(())
}

fn handle_summary(args: &SequenceArgs, config: &Config) -> Result<()> {
    let selection = collect_sources(args)?;
    let source_fps = args.source_fps.unwrap_or(config.defaults.source_fps);

    println!("{}", selection.count_label());
    println!("{}", selection.length_label(source_fps));
    for path in selection.paths() {
        println!("- {}", path.display());
    }
    Ok(())
}

fn handle_check_ffmpeg(program: &str) -> Result<()> {
    let version = engine::encoder_version(program)?;
    println!("{} found: {}", program, version);
    Ok(())
}

fn handle_init_config() -> Result<()> {
    let path = Config::config_path()?;

    if Config::exists() {
        let cfg = Config::load()?;
        println!("Config loaded successfully from {}", path.display());
        println!("{:#?}", cfg);
    } else {
        println!("Config missing, creating default...");
        Config::default()
            .save()
            .context("Failed to save default config")?;
        println!("Default config saved to {}", path.display());
    }
    Ok(())
}
