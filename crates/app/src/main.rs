use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use question_bank::{InMemoryQuestionBank, QuestionBank};
use quiz_core::model::Tier;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

/// Tiered multiple-choice quiz.
#[derive(Parser, Debug)]
#[command(name = "app")]
#[command(version)]
struct Args {
    /// JSON question catalog; the bundled Git catalog is used when omitted
    #[arg(long, env = "QUIZ_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = "Git Quiz", env = "QUIZ_TITLE")]
    title: String,

    /// Validate the catalog, print tier counts and exit without opening a window
    #[arg(long)]
    check: bool,
}

struct DesktopApp {
    title: String,
    bank: Arc<dyn QuestionBank>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> String {
        self.title.clone()
    }

    fn question_bank(&self) -> Arc<dyn QuestionBank> {
        Arc::clone(&self.bank)
    }
}

fn load_bank(path: Option<&PathBuf>) -> Result<InMemoryQuestionBank> {
    match path {
        Some(path) => InMemoryQuestionBank::from_path(path)
            .with_context(|| format!("failed to load question catalog {}", path.display())),
        None => InMemoryQuestionBank::bundled().context("bundled question catalog is invalid"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info,question_bank=info,ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let bank = load_bank(args.questions.as_ref())?;

    if args.check {
        for tier in Tier::ALL {
            println!("{tier}: {} questions", bank.len(tier));
        }
        return Ok(());
    }

    info!(title = %args.title, "starting quiz");
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title.clone(),
        bank: Arc::new(bank),
    });
    let context = build_app_context(&app);

    // Keep the window a normal, non-floating window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_bundled_catalog() {
        let args = Args::try_parse_from(["app"]).unwrap();
        assert!(args.questions.is_none() || std::env::var_os("QUIZ_QUESTIONS").is_some());
        assert!(!args.check);
    }

    #[test]
    fn args_accept_catalog_path() {
        let args =
            Args::try_parse_from(["app", "--questions", "bank.json", "--check"]).unwrap();
        assert_eq!(args.questions, Some(PathBuf::from("bank.json")));
        assert!(args.check);
    }

    #[test]
    fn bundled_bank_loads() {
        let bank = load_bank(None).unwrap();
        assert!(bank.len(Tier::Easy) > 0);
    }
}
