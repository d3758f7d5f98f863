use clap::Parser;
use uuid::Uuid;

mod cli;
mod config;
mod errors;
mod language;
mod log;
mod pipeline;
mod prompt;
mod provider;
mod repair;
mod ux;
mod wire;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may already be exported.
    let _ = dotenvy::dotenv();

    let args = cli::Args::parse();
    log::init(args.debug);

    let cfg = args.apply_overrides(config::Config::load(args.config.as_deref())?);
    let request = args.to_request(&cfg, &language::WhatlangDetector::new());
    let request_id = Uuid::new_v4();
    tracing::debug!(%request_id, language = %request.language, model = %cfg.model, "request prepared");

    if args.show_prompt {
        ux::print_prompt(&prompt::build_prompt(&request));
    }

    let prov = match provider::make_provider(&cfg) {
        Ok(p) => p,
        Err(e) => {
            ux::print_error(&e);
            std::process::exit(1);
        }
    };

    let spinner = (args.output == cli::OutputFormat::Text).then(|| ux::spinner("Generating content..."));
    let outcome = pipeline::run(prov.as_ref(), request, request_id).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let generation = match outcome {
        Ok(g) => g,
        Err(e) => {
            ux::print_error(&e);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        prompt_chars = generation.prompt.chars().count(),
        raw = %generation.result.raw_text,
        "raw completion"
    );

    match args.output {
        cli::OutputFormat::Text => print!("{}", ux::render_generation(&generation)),
        cli::OutputFormat::Json => println!("{}", ux::render_report(&generation)?),
    }

    Ok(())
}
