use anyhow::Context;
use biz_directory::utils::error::ErrorSeverity;
use biz_directory::utils::{logger, validation::Validate};
use biz_directory::{
    BrowserError, CliConfig, DirectoryBrowser, HttpDirectoryApi, OutputFormat, ResultRenderer,
    UiEvent,
};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting biz-directory");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.validate().and_then(|_| config.settings()) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    tracing::debug!("Using backend at {}", settings.api.base_url);

    let api = match HttpDirectoryApi::new(&settings) {
        Ok(api) => api,
        Err(e) => fail(&e),
    };
    let browser = DirectoryBrowser::new(api, ResultRenderer::new(settings.render.clone()));

    if let Some(id) = config.business {
        match browser.show_business(id).await {
            Ok(detail) => emit(&config, &detail.render(config.format)).await?,
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    browser.set_controls(
        config.category.as_deref().unwrap_or(""),
        config.search.as_deref().unwrap_or(""),
    );
    browser.activate().await;

    if config.interactive {
        run_interactive(&browser, config.format).await?;
    }

    if config.emits_final_page() {
        emit(&config, &browser.render(config.format)).await?;
    }
    Ok(())
}

/// Reads one command per line until EOF or `:quit`.
///
/// Plain text is typed into the search field followed by Enter;
/// `:category [id]` changes the selection, `:search` clicks the search button
/// and `:show <id>` prints a business.
async fn run_interactive(
    browser: &DirectoryBrowser<HttpDirectoryApi>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    println!("{}", browser.render(format));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            ":quit" | ":q" => break,
            ":category" => {
                browser
                    .handle_event(UiEvent::CategoryChanged(argument.to_string()))
                    .await;
            }
            ":search" => {
                browser.handle_event(UiEvent::SearchClicked).await;
            }
            ":show" => {
                let id: i64 = match argument.parse() {
                    Ok(id) => id,
                    Err(_) => {
                        eprintln!("usage: :show <business id>");
                        continue;
                    }
                };
                match browser.show_business(id).await {
                    Ok(detail) => println!("{}", detail.render(format)),
                    Err(e) => eprintln!("❌ {}", e.user_friendly_message()),
                }
                continue;
            }
            _ => {
                browser
                    .handle_event(UiEvent::SearchInput(line.to_string()))
                    .await;
                browser
                    .handle_event(UiEvent::SearchKey("Enter".to_string()))
                    .await;
            }
        }

        println!("{}", browser.render(format));
    }

    Ok(())
}

async fn emit(config: &CliConfig, rendered: &str) -> anyhow::Result<()> {
    match &config.output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("writing page to {}", path))?;
            tracing::info!("📁 Page saved to: {}", path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn fail(e: &BrowserError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
