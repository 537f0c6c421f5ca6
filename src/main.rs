use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use conjugador::{
    ConjugationProvider, ConjugationResult, ConsultVerbUseCase, GeminiClient, MockProvider, Tense,
};

#[derive(Parser)]
#[command(name = "conjugador")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verb to conjugate; omit to start the interactive interface
    verbo: Option<String>,

    /// Tense slug, e.g. "presente" or "preterito-perfeito"
    #[arg(short, long, default_value = "presente")]
    tempo: String,

    #[arg(short, long)]
    verbose: bool,

    /// Answer from a canned offline provider instead of the Gemini API
    #[arg(long)]
    mock: bool,

    /// Model identifier (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// API endpoint (overrides GEMINI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // In interactive mode keep the alternate screen clean unless asked.
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.verbo.is_some() {
        Level::INFO
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let provider: Arc<dyn ConjugationProvider> = if cli.mock {
        info!("Using canned offline provider");
        Arc::new(MockProvider::new())
    } else {
        let mut client = GeminiClient::from_env();
        if let Some(model) = cli.model {
            client = client.with_model(model);
        }
        if let Some(base_url) = cli.base_url {
            client = client.with_base_url(base_url);
        }
        Arc::new(client)
    };

    let use_case = Arc::new(ConsultVerbUseCase::new(provider));

    match cli.verbo {
        Some(verbo) => {
            let tempo: Tense = cli.tempo.parse()?;
            match use_case.execute(&verbo, tempo).await {
                Ok(result) => print_result(&result),
                Err(err) => {
                    eprintln!("{}", err.user_message());
                    std::process::exit(1);
                }
            }
        }
        None => conjugador::tui::run(use_case).await?,
    }

    Ok(())
}

fn print_result(result: &ConjugationResult) {
    println!("{} — {}", result.verb(), result.tense());
    println!();

    for entry in result.entries() {
        println!("  {:<12} {}", entry.person(), entry.form());
    }

    println!();
    println!("  Infinitivo:  {}", result.infinitive());
    println!("  Gerúndio:    {}", result.gerund());
    println!("  Particípio:  {}", result.past_participle());
    println!();
    println!("  Significado: {}", result.meaning());

    if let Some(trivia) = result.trivia() {
        println!("  Curiosidade: {}", trivia);
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn one_shot_args_parse() {
        let cli = Cli::try_parse_from(["conjugador", "cantar", "--tempo", "futuro-do-presente"])
            .unwrap();

        assert_eq!(cli.verbo.as_deref(), Some("cantar"));
        assert_eq!(cli.tempo.parse::<Tense>().unwrap(), Tense::FutureIndicative);
    }

    #[test]
    fn interactive_mode_needs_no_args() {
        let cli = Cli::try_parse_from(["conjugador"]).unwrap();

        assert!(cli.verbo.is_none());
        assert!(!cli.mock);
    }
}
