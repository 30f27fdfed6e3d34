//! REPL session management

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::domain::CourseCode;
use crate::session::{SessionController, SessionSnapshot};

/// Interactive planning shell
pub struct PlannerRepl {
    controller: SessionController,
}

enum CommandResult {
    Continue,
    Quit,
}

impl PlannerRepl {
    pub fn new(controller: SessionController) -> Self {
        Self { controller }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    match self.handle_command(input).await {
                        CommandResult::Continue => continue,
                        CommandResult::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Student Schedule Planner".bright_cyan().bold());
        println!(
            "Type {} for commands, {} to quit. Available courses: {}",
            "help".yellow(),
            "quit".yellow(),
            self.controller
                .catalog()
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    async fn handle_command(&mut self, input: &str) -> CommandResult {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match cmd {
            "add" | "a" => match self.controller.add_course(rest) {
                Ok(code) => println!("Added {}", code.to_string().bright_green()),
                Err(e) => println!("{}", e.to_string().red()),
            },
            "remove" | "rm" => match CourseCode::parse(rest) {
                Ok(code) => {
                    self.controller.remove_course(&code);
                    println!("Removed {}", code);
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            "lock" | "l" => match CourseCode::parse(rest) {
                Ok(code) => {
                    self.controller.toggle_lock(code.clone());
                    let state = if self.controller.snapshot().locked_courses.contains(&code) {
                        "locked"
                    } else {
                        "unlocked"
                    };
                    println!("{} {}", code, state.yellow());
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            "constraints" | "c" => {
                self.controller.set_constraints(rest);
                if rest.is_empty() {
                    println!("Constraints cleared.");
                } else {
                    println!("Constraints set.");
                }
            }
            "generate" | "g" => {
                println!("{}", "Generating schedule...".dimmed());
                self.controller.generate().await;
                self.render(&self.controller.snapshot());
            }
            "explain" | "e" => {
                println!("{}", "Asking for an explanation...".dimmed());
                let text = self.controller.explain().await;
                if text.is_empty() {
                    println!("{}", "(no explanation)".dimmed());
                } else {
                    println!("{}", text);
                }
            }
            "show" | "s" => self.render(&self.controller.snapshot()),
            "help" | "h" => self.print_help(),
            "quit" | "q" | "exit" => return CommandResult::Quit,
            _ => println!("Unknown command '{}'. Type {} for commands.", cmd, "help".yellow()),
        }

        CommandResult::Continue
    }

    fn render(&self, snapshot: &SessionSnapshot) {
        println!();
        println!(
            "Selected: {}",
            if snapshot.selected_courses.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                snapshot
                    .selected_courses
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        );
        if !snapshot.constraint_text.is_empty() {
            println!("Constraints: {}", snapshot.constraint_text);
        }

        match &snapshot.outcome {
            None => println!("{}", "No schedule generated yet.".dimmed()),
            Some(outcome) => {
                if let Some(reason) = outcome.fail_reason() {
                    println!(
                        "{} {}",
                        "Unable to generate a conflict-free schedule that includes every requested course. The blocking issue was:"
                            .yellow(),
                        reason.bold()
                    );
                }
                for entry in outcome.schedule() {
                    let lock_marker = if snapshot.locked_courses.contains(&entry.course) {
                        " [locked]".bright_green().to_string()
                    } else {
                        String::new()
                    };
                    print!(
                        "  {} - {} {}-{}{}",
                        entry.course.to_string().bold(),
                        entry.day,
                        entry.start_time,
                        entry.end_time,
                        lock_marker
                    );
                    match &entry.location {
                        Some(location) => println!("  ({location})"),
                        None => println!(),
                    }
                }
            }
        }
        println!();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  {}  add a course code to the selection", "add <code>".yellow());
        println!("  {}  remove a course from the selection", "remove <code>".yellow());
        println!("  {}  toggle a lock on a course", "lock <code>".yellow());
        println!("  {}  set free-text preferences (empty clears)", "constraints <text>".yellow());
        println!("  {}  generate a schedule", "generate".yellow());
        println!("  {}  explain the last generation attempt", "explain".yellow());
        println!("  {}  show the current session state", "show".yellow());
        println!("  {}  quit", "quit".yellow());
    }
}
