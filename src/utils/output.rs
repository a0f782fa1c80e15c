use crate::models::Prompt;
use crate::utils::time_format::format_datetime;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", "═".repeat(50));
    }

    /// One numbered line per prompt, with a parameter-count suffix when
    /// the prompt has parameters
    pub fn print_prompt_line(index: usize, prompt: &Prompt) {
        let params = if prompt.parameters.is_empty() {
            String::new()
        } else {
            format!(" ({} parameters)", prompt.parameters.len())
        };
        println!(
            "{}. {}{}",
            Self::success(&(index + 1).to_string()),
            Self::name(&prompt.name),
            Self::warning(&params)
        );
    }

    pub fn print_prompt_details(prompt: &Prompt) {
        Self::print_header("Prompt Details");
        println!("{}: {}", Self::label("Name"), Self::name(&prompt.name));
        println!(
            "{}: {}",
            Self::label("Created"),
            Self::muted(&format_datetime(&prompt.created_at))
        );
        if let Some(updated_at) = &prompt.updated_at {
            println!(
                "{}: {}",
                Self::label("Updated"),
                Self::muted(&format_datetime(updated_at))
            );
        }
        println!("{}:", Self::label("Content"));
        println!("{}", Self::separator());
        println!("{}", Self::content(&prompt.content));
        println!("{}", Self::separator());

        if !prompt.parameters.is_empty() {
            println!("{}:", Self::label("Parameters"));
            for param in &prompt.parameters {
                if param.default.is_empty() {
                    println!("- {}", param.name);
                } else {
                    println!("- {} (default: \"{}\")", param.name, param.default);
                }
            }
        }
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_info(message: &str) {
    println!("{}", OutputStyle::info(message));
}
