use clap::Parser;
use sealtoken::cli::commands::decrypt::DecryptArgs;
use sealtoken::cli::{Cli, Commands, EncryptAction, PasswordAction};

fn main() {
    let cli = Cli::parse();
    sealtoken::cli::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Encrypt { ref action } => match action {
            EncryptAction::File {
                ref path,
                ref mime_type,
                ref sink,
            } => sealtoken::cli::commands::encrypt::execute_file(path, mime_type.as_deref(), sink),
            EncryptAction::Text { ref text, ref sink } => {
                sealtoken::cli::commands::encrypt::execute_text(text.as_deref(), sink)
            }
        },
        Commands::Decrypt {
            ref token,
            ref token_file,
            ref output,
            force,
            copy,
        } => sealtoken::cli::commands::decrypt::execute(&DecryptArgs {
            token: token.as_deref(),
            token_file: token_file.as_deref(),
            output: output.as_deref(),
            force,
            copy,
        }),
        Commands::Password { ref action } => match action {
            PasswordAction::Generate { length } => {
                sealtoken::cli::commands::password::execute_generate(*length)
            }
            PasswordAction::Check => sealtoken::cli::commands::password::execute_check(),
        },
        Commands::Version => sealtoken::cli::commands::version::execute(),
        Commands::Completions { ref shell } => {
            sealtoken::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        sealtoken::cli::output::error(&e.to_string());
        if e.is_decrypt_failure() {
            sealtoken::cli::output::tip("Check the password and that the whole token was copied.");
        }
        std::process::exit(1);
    }
}
