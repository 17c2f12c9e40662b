use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use prompt_master::render;
use prompt_master::{Config, GeminiClient, Orchestrator, PromptOptimizer, Session, Status};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Result,
    Chat,
}

/// Turn a rough idea into a polished prompt with Gemini.
#[derive(Debug, Parser)]
#[command(name = "prompt-master", version)]
struct Cli {
    /// The idea to optimize; words are joined with spaces
    idea: Vec<String>,

    /// How to print the outcome
    #[arg(long, value_enum, default_value_t = View::Result)]
    view: View,

    /// Read ideas line by line from stdin and answer as a chat
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let client = GeminiClient::new(Config::from_env()?)?;
    log::info!("Using model {} at {}", client.config().model, client.config().base_url);
    let optimizer = PromptOptimizer::new(client)?;
    let orchestrator = Orchestrator::new(optimizer);

    if cli.interactive {
        chat_loop(&orchestrator).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let idea = cli.idea.join(" ");
    let session = Session::new();
    if !session.can_submit(&idea) {
        eprintln!("Nothing to optimize: pass an idea, or use --interactive");
        return Ok(ExitCode::from(2));
    }

    let session = orchestrator.submit(&session, &idea).await?;
    match cli.view {
        View::Result => print!("{}", render::render_session(&session)),
        View::Chat => println!("{}", render::render_transcript(session.transcript())),
    }

    Ok(if session.status() == Status::Success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn chat_loop<G: prompt_master::TextGenerator>(
    orchestrator: &Orchestrator<G>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut session = Session::new();

    println!("Mô tả ý tưởng hoặc nhiệm vụ của bạn (gõ 'exit' để thoát):");
    while let Some(line) = lines.next_line().await? {
        let idea = line.trim();
        if idea.eq_ignore_ascii_case("exit") {
            break;
        }
        if !session.can_submit(idea) {
            continue;
        }

        let seen = session.transcript().len();
        println!("AI Master đang tư duy...");
        session = orchestrator.submit(&session, idea).await?;

        for message in &session.transcript()[seen..] {
            println!("{}", render::render_message(message));
        }
    }
    Ok(())
}
