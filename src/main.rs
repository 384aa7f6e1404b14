use clap::Parser;
use passvault::cli::commands::{edit::EntryChanges, generate::GenerateArgs};
use passvault::cli::{Cli, Commands};

fn main() {
    passvault::logging::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref title,
            ref username,
            ref url,
            ref notes,
            ref folder,
            generate,
        } => passvault::cli::commands::add::execute(
            &cli, title, username, url, notes, folder, generate,
        ),
        Commands::List {
            ref folder,
            ref search,
        } => passvault::cli::commands::list::execute(&cli, folder.as_deref(), search.as_deref()),
        Commands::Get { number, copy } => passvault::cli::commands::get::execute(&cli, number, copy),
        Commands::Edit {
            number,
            ref title,
            ref username,
            ref url,
            ref notes,
            ref folder,
            password,
            generate,
        } => passvault::cli::commands::edit::execute(
            &cli,
            number,
            EntryChanges {
                title: title.clone(),
                username: username.clone(),
                url: url.clone(),
                notes: notes.clone(),
                folder: folder.clone(),
                prompt_password: password,
                generate,
            },
        ),
        Commands::Delete { number, force } => {
            passvault::cli::commands::delete::execute(&cli, number, force)
        }
        Commands::Generate {
            length,
            no_uppercase,
            no_numbers,
            no_symbols,
            ref exclude,
        } => passvault::cli::commands::generate::execute(GenerateArgs {
            length,
            no_uppercase,
            no_numbers,
            no_symbols,
            exclude: exclude.clone(),
        }),
        Commands::Passphrase {
            words,
            ref separator,
        } => passvault::cli::commands::passphrase::execute(words, separator),
        Commands::Strength { ref password } => {
            passvault::cli::commands::strength::execute(password.as_deref())
        }
        Commands::ChangePassword => passvault::cli::commands::change_password::execute(&cli),
        Commands::Info => passvault::cli::commands::info::execute(&cli),
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
