use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, style,
    terminal::{self, ClearType},
};
use std::io::{self, Write};

/// Interactive input capability. Commands talk to the user only through
/// this trait, so the flows can be driven by a script in tests.
pub trait Interaction {
    /// Read a single line of input
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Read a single line; empty input yields `default`
    fn input_with_default(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Pick one item from a list; `None` means the user cancelled
    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>>;

    /// Read multi-line content
    fn multiline(&mut self, prompt: &str) -> Result<String>;
}

/// Real-terminal implementation: plain stdin line reads plus crossterm
/// raw mode for list selection and multiline entry
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for Terminal {
    fn input(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().to_string())
    }

    fn input_with_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        let shown = if default.is_empty() {
            format!("{prompt}: ")
        } else {
            format!("{prompt} [{default}]: ")
        };

        let input = self.input(&shown)?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let input = self.input(&format!("{prompt} {hint}: "))?;
            match input.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                "" => return Ok(default),
                _ => println!("Please enter 'y' or 'n'"),
            }
        }
    }

    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();

        // Raw mode is restored even when drawing or reading fails
        let result = (|| {
            let mut selected = 0;
            loop {
                execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

                println!("{title}\r");
                println!("Use arrow keys to navigate, Enter to select, q to quit\r");
                println!("\r");

                for (i, item) in items.iter().enumerate() {
                    if i == selected {
                        execute!(
                            stdout,
                            style::Print("> "),
                            style::SetForegroundColor(style::Color::Blue)
                        )?;
                    } else {
                        execute!(stdout, style::Print("  "))?;
                    }
                    println!("{item}\r");
                    execute!(stdout, style::ResetColor)?;
                }

                match event::read()? {
                    Event::Key(KeyEvent {
                        code: KeyCode::Up, ..
                    }) => {
                        if selected > 0 {
                            selected -= 1;
                        }
                    }
                    Event::Key(KeyEvent {
                        code: KeyCode::Down,
                        ..
                    }) => {
                        if selected < items.len() - 1 {
                            selected += 1;
                        }
                    }
                    Event::Key(KeyEvent {
                        code: KeyCode::Enter,
                        ..
                    }) => {
                        break Ok(Some(selected));
                    }
                    Event::Key(KeyEvent {
                        code: KeyCode::Char('q') | KeyCode::Esc,
                        ..
                    }) => {
                        break Ok(None);
                    }
                    _ => {}
                }
            }
        })();

        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0));

        result
    }

    fn multiline(&mut self, prompt: &str) -> Result<String> {
        println!("{prompt}");
        println!("Enter to save, Ctrl+J for a new line, Esc to cancel:");
        println!();

        terminal::enable_raw_mode()?;

        let result = (|| {
            let mut lines = Vec::new();
            let mut current_line = String::new();

            loop {
                let Event::Key(KeyEvent {
                    code, modifiers, ..
                }) = event::read()?
                else {
                    continue;
                };

                match code {
                    // Ctrl+J or Shift+Enter starts a new line
                    KeyCode::Char('j') if modifiers.contains(event::KeyModifiers::CONTROL) => {
                        lines.push(current_line.clone());
                        current_line.clear();
                        print!("\r\n");
                        io::stdout().flush()?;
                    }
                    KeyCode::Enter if modifiers.contains(event::KeyModifiers::SHIFT) => {
                        lines.push(current_line.clone());
                        current_line.clear();
                        print!("\r\n");
                        io::stdout().flush()?;
                    }
                    KeyCode::Enter => {
                        lines.push(current_line.clone());
                        break;
                    }
                    KeyCode::Char(c) => {
                        current_line.push(c);
                        print!("{c}");
                        io::stdout().flush()?;
                    }
                    KeyCode::Backspace => {
                        if !current_line.is_empty() {
                            current_line.pop();
                            execute!(
                                io::stdout(),
                                cursor::MoveLeft(1),
                                terminal::Clear(ClearType::UntilNewLine)
                            )?;
                            io::stdout().flush()?;
                        }
                    }
                    KeyCode::Esc => {
                        return Err(anyhow::anyhow!("Input cancelled by user"));
                    }
                    _ => {}
                }
            }

            Ok(lines.join("\n"))
        })();

        let _ = terminal::disable_raw_mode();
        println!();

        result
    }
}
