use bloco::cli::{
    handle_add, handle_colors, handle_delete, handle_edit, handle_export, handle_init,
    handle_list, handle_show, Cli, Commands,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "bloco=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = cli.dir;
    let result = match cli.command {
        Commands::Init => handle_init(dir),
        Commands::Add {
            title,
            content,
            stdin,
            color,
            json,
        } => handle_add(dir, title, content, stdin, color, json),
        Commands::Edit {
            id,
            title,
            content,
            stdin,
            color,
            json,
        } => handle_edit(dir, id, title, content, stdin, color, json),
        Commands::Delete { id, force } => handle_delete(dir, id, force),
        Commands::List { search, json } => handle_list(dir, search, json),
        Commands::Show { id, json } => handle_show(dir, id, json),
        Commands::Export { id, out } => handle_export(dir, id, out),
        Commands::Colors => handle_colors(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
