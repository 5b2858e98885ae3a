use anyhow::{Context, Result};
use letter_pipeline::cli::commands::{CompareCommand, SendCommand, ValidateCommand};
use letter_pipeline::cli::output::*;
use letter_pipeline::cli::{compare_exit_code, send_exit_code, Cli, Command};
use letter_pipeline::{LetterPipeline, LetterRequest, PipelineConfig, Response};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Send(cmd) => send_letter(cmd, &cli)?,
        Command::Compare(cmd) => compare_disciplines(cmd, &cli)?,
        Command::Validate(cmd) => validate_config(cmd)?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("Failed to load pipeline config from {}", path)),
        None => Ok(PipelineConfig::default()),
    }
}

fn send_letter(cmd: &SendCommand, cli: &Cli) -> Result<()> {
    let mut config = load_config(cli)?;
    if let Some(discipline) = cmd.discipline {
        config = config.with_discipline(discipline.into());
    }

    let mut pipeline = LetterPipeline::from_config(&config);

    // Event output would interleave with the JSON document
    if !cmd.json {
        pipeline.add_event_handler(|event| println!("{}", format_event(&event)));
    }

    let request = LetterRequest::new(cmd.customer_id, cmd.body.clone());
    let report = pipeline.execute(&request);
    let response = Response::from_outcome(&report.outcome);

    if cmd.json {
        let data = serde_json::json!({
            "report": report,
            "response": response,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        println!("\n{}", format_response(&response));
    }

    let code = send_exit_code(&response);
    if code != 0 {
        error!("Letter was not sent: {}", response);
        std::process::exit(code);
    }

    Ok(())
}

fn compare_disciplines(cmd: &CompareCommand, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let pipeline = LetterPipeline::from_config(&config);

    let request = LetterRequest::new(cmd.customer_id, cmd.body.clone());
    let comparison = pipeline.compare(&request);

    if cmd.json {
        let responses: Vec<_> = comparison
            .responses()
            .into_iter()
            .map(|(discipline, response)| {
                serde_json::json!({ "discipline": discipline, "response": response })
            })
            .collect();
        let data = serde_json::json!({
            "request": comparison.request,
            "agree": comparison.agree(),
            "responses": responses,
            "reports": comparison.reports,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        println!(
            "{} Customer {} with body {:?}",
            INFO,
            style(request.customer_id).bold(),
            request.body
        );
        println!("{}", format_comparison(&comparison));
    }

    let code = compare_exit_code(&comparison);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

fn validate_config(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating pipeline configuration...", INFO);

    match PipelineConfig::from_file(&cmd.file) {
        Ok(config) => {
            println!("{} Pipeline configuration is valid!", CHECK);
            println!("  Discipline: {}", style(config.discipline).bold());
            println!(
                "  Business customers: {}",
                style(config.business_customers.len()).cyan()
            );
            match &config.work_address {
                Some(work) => println!(
                    "  Work address: {} {}, {}",
                    work.street, work.house_number, work.city
                ),
                None => println!("  Work address: {}", style("none").yellow()),
            }

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}
