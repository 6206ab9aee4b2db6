use colored::*;
use culturefy_core::{Recommendation, ViewState};
use serde_json::Value;

pub const LOADING_TEXT: &str = "Loading...";

/// Render a view state for the terminal
pub fn render_view(state: &ViewState) -> String {
    match state {
        ViewState::Loading => LOADING_TEXT.to_string(),
        ViewState::Error(message) => render_error(message),
        ViewState::Loaded(recommendation) => render_recommendation(recommendation),
    }
}

/// Print a settled view state to the terminal
pub fn print_view(state: &ViewState) {
    match state {
        ViewState::Error(_) => eprintln!("{}", render_view(state)),
        _ => println!("{}", render_view(state)),
    }
}

fn render_error(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message.red())
}

fn render_recommendation(recommendation: &Recommendation) -> String {
    let response = &recommendation.response;
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Recommendation Output".bright_cyan().bold()));
    output.push_str(&field_line("User Role", &response.user_role));
    output.push_str(&field_line("User ID", &response.user_id));
    output.push_str(&field_line("Business ID", &response.business_id));
    output.push_str(&field_line(
        "Recommendation Type",
        &response.recommendation_type,
    ));

    if let Some(company) = &recommendation.company {
        output.push('\n');
        output.push_str(&format!("{}\n", "Company Data".yellow().bold()));
        output.push_str(&"─".repeat(40).dimmed().to_string());
        output.push('\n');
        output.push_str(&pretty_json(company));
        output.push('\n');
        output.push_str(&"─".repeat(40).dimmed().to_string());
        output.push('\n');
    }

    output
}

fn field_line(label: &str, value: &str) -> String {
    format!("{} {}\n", format!("{}:", label).bold(), value)
}

/// Two-space indented JSON
fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
