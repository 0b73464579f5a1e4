//! Command-line interface for tin-rocket.

use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Assemble a craft file into an entity world and print a summary.
    Assemble { filename: String },
    /// List a craft file's parts and staging without assembling.
    Describe { filename: String },
    /// No recognized command: print usage.
    Usage,
}

pub struct CLI {
    pub command: CliCommand,
}

impl CLI {
    /// Parse command-line arguments.
    ///
    /// Supported commands:
    /// - `./tin-rocket assemble <craft.json>` - Build the craft's entity graph
    /// - `./tin-rocket describe <craft.json>` - Show the craft's parts and stages
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().collect();

        let command = if args.len() >= 3 {
            match args[1].as_str() {
                "assemble" => CliCommand::Assemble {
                    filename: args[2].clone(),
                },
                "describe" => CliCommand::Describe {
                    filename: args[2].clone(),
                },
                _ => {
                    eprintln!("Unknown command: {}", args[1]);
                    CliCommand::Usage
                }
            }
        } else {
            CliCommand::Usage
        };

        CLI { command }
    }
}
