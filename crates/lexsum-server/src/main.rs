//! LexSum: legal document summarization and analysis server.

use std::path::PathBuf;
use std::sync::Arc;

use lexsum_server::{bootstrap, build_router, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn resolve_data_dir() -> PathBuf {
    std::env::var("LEXSUM_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

fn print_help() {
    println!("LexSum: legal document summarization server");
    println!();
    println!("Usage: lexsum [command]");
    println!();
    println!("Commands:");
    println!("  (none)                     Start the server");
    println!("  analyze <file> [options]   Analyze a PDF, DOCX or TXT file and print JSON");
    println!("      --markdown             Print a Markdown report instead of JSON");
    println!("      --report               Also write a PDF report to the reports directory");
    println!("  help                       Show this help message");
}

/// `lexsum analyze <file> [--markdown] [--report]`
async fn run_analyze(args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.iter().find(|a| !a.starts_with("--")).map(PathBuf::from) else {
        eprintln!("Usage: lexsum analyze <file> [--markdown] [--report]");
        std::process::exit(1);
    };
    let with_report = args.iter().any(|a| a == "--report");
    let as_markdown = args.iter().any(|a| a == "--markdown");

    let state = bootstrap(&resolve_data_dir())?;
    let text = lexsum_ingest::extract_text(&path)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
    let result = state.analyzer().analyze(&text).await;

    let original = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if as_markdown {
        let md = report::render_markdown(&result, &original, chrono::Local::now().naive_local());
        print!("{}", md);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if with_report {
        let name = report::write_report(
            &state.config.data_paths.reports,
            &result,
            &original,
            chrono::Local::now().naive_local(),
        )?;
        eprintln!("Report: {}", state.config.data_paths.reports.join(name).display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "analyze" => return run_analyze(&args[2..]).await,
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'lexsum help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let state = Arc::new(bootstrap(&data_dir)?);
    let port = state.config.port;

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("LexSum server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
