use std::sync::Arc;
use tokio::io::AsyncReadExt;
use crate::analysis::Analyzer;
use crate::cli::commands::CheckArgs;
use crate::config::{require_api_key, PhishGuardConfig};
use crate::errors::PhishGuardError;
use crate::llm::ChatCompletionsProvider;
use crate::models::EmailSubmission;
use crate::ui::terminal::render_result;
use crate::ui::view::{validate_submission, ResultView};

pub async fn handle_check(args: CheckArgs, config: PhishGuardConfig) -> Result<(), PhishGuardError> {
    let body = read_body(&args.body).await?;
    let submission = EmailSubmission::new(args.sender, args.subject, body);
    validate_submission(&submission)?;

    let api_key = require_api_key(&config)?;
    let provider = ChatCompletionsProvider::new(&api_key, &config.llm);
    let analyzer = Analyzer::new(Arc::new(provider));

    let extraction = analyzer.analyze(&submission).await;
    let value = extraction.into_value();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render_result(&ResultView::from_value(&value)));
    }
    Ok(())
}

async fn read_body(source: &str) -> Result<String, PhishGuardError> {
    if source == "-" {
        let mut body = String::new();
        tokio::io::stdin().read_to_string(&mut body).await?;
        Ok(body)
    } else {
        Ok(tokio::fs::read_to_string(source).await?)
    }
}
