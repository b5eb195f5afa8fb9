use crate::cli::Host;
use crate::commands::add::AddCommand;
use crate::commands::delete::DeleteCommand;
use crate::commands::edit::EditCommand;
use crate::commands::misc::{InfoCommand, OpenCommand, PrintCommand};
use crate::commands::{AppContext, CommandEnum};
use crate::prompt::ReadlinePrompt;
use links_widget::error::{LinksError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub fn run(host: Host<'_>) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| LinksError::Other(e.to_string()))?;

    println!("links interactive mode - type '?' for help");

    loop {
        let readline = rl.readline("links> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)
                    .map_err(|e| LinksError::Other(e.to_string()))?;

                match line {
                    "q" | "quit" | "exit" => break,
                    "?" | "help" => print_help(),
                    _ => match parse_command(line) {
                        Ok(command) => {
                            let mut prompt = ReadlinePrompt::new(&mut rl, host.nc);
                            let mut ctx = AppContext {
                                widget: host.widget,
                                display: &mut *host.display,
                                prompt: &mut prompt,
                                opener: host.opener,
                                config: host.config,
                                state_path: host.state_path,
                                nc: host.nc,
                            };
                            if let Err(e) = command.execute(&mut ctx) {
                                eprintln!("Error: {}", e);
                            }
                        }
                        Err(e) => eprintln!("{}", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "
INTERACTIVE MODE COMMANDS:

    ls                     List bookmarks
    a                      Add a bookmark (prompts for title and URL)
    e <row>                Edit the bookmark at a row
    d <row>                Delete the bookmark at a row
    o <row>                Open the bookmark at a row in the browser
    <row>                  Shorthand for open
    info                   Show widget metadata

    ?  or help             Show this help
    q  or quit or exit     Exit interactive mode
    ^D or ^C               Exit interactive mode (cancels an open dialog)

Rows are numbered from 1 as shown by 'ls'. Every change is saved immediately.
"
    );
}

/// Map one line of interactive input onto a command
pub fn parse_command(line: &str) -> Result<CommandEnum> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&cmd, args)) = parts.split_first() else {
        return Err(LinksError::Other("Empty command".to_string()));
    };

    match cmd {
        "ls" | "list" | "p" => Ok(CommandEnum::Print(PrintCommand)),
        "info" => Ok(CommandEnum::Info(InfoCommand)),
        "a" | "add" => Ok(CommandEnum::Add(AddCommand)),
        "e" | "edit" => Ok(CommandEnum::Edit(EditCommand {
            row: parse_row(cmd, args)?,
        })),
        "d" | "del" | "delete" => Ok(CommandEnum::Delete(DeleteCommand {
            row: parse_row(cmd, args)?,
        })),
        "o" | "open" => Ok(CommandEnum::Open(OpenCommand {
            row: parse_row(cmd, args)?,
        })),
        _ => match cmd.parse::<usize>() {
            Ok(row) if args.is_empty() => Ok(CommandEnum::Open(OpenCommand { row })),
            _ => Err(LinksError::Other(format!(
                "Unknown command '{}'. Type '?' for help.",
                cmd
            ))),
        },
    }
}

fn parse_row(cmd: &str, args: &[&str]) -> Result<usize> {
    match args {
        [row] => row
            .parse::<usize>()
            .map_err(|_| LinksError::Other(format!("Invalid row '{}'", row))),
        _ => Err(LinksError::Other(format!("Usage: {} <row>", cmd))),
    }
}
