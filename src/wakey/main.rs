use clap::Parser;
use std::io::Read;
use std::sync::Arc;
use wakey::config::WakeyConfig;
use wakey::error::{Result, WakeyError};
use wakey::init::{app_state, initialize, WakeyContext};

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = WakeyConfig::resolve(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => handle_serve(config, host, port).await,
        Some(Commands::List) => handle_list(&initialize(config)?),
        Some(Commands::Show { title, html }) => handle_show(&initialize(config)?, &title, html),
        Some(Commands::Write { title, contents }) => {
            handle_write(&initialize(config)?, &title, contents)
        }
        None => handle_serve(config, None, None).await,
    }
}

async fn handle_serve(
    mut config: WakeyConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let addr = config.bind_addr();
    let ctx = initialize(config)?;
    log::info!("Serving entries from {}", ctx.api.store().root().display());

    let state = Arc::new(app_state(ctx)?);
    wakey::web::serve(state, &addr).await
}

fn handle_list(ctx: &WakeyContext) -> Result<()> {
    let listing = ctx.api.list_entries()?;
    for title in &listing.entries {
        println!("{}", title);
    }
    Ok(())
}

fn handle_show(ctx: &WakeyContext, title: &str, html: bool) -> Result<()> {
    if html {
        let rendered = ctx.api.render_entry(title)?;
        print!("{}", rendered.html);
    } else {
        let entry = ctx.api.get_entry(title)?;
        print!("{}", entry.contents);
    }
    Ok(())
}

fn handle_write(ctx: &WakeyContext, title: &str, contents: Option<String>) -> Result<()> {
    let contents = match contents {
        Some(contents) => contents,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(WakeyError::Io)?;
            buf
        }
    };

    let entry = ctx.api.write_entry(title, &contents)?;
    let json = serde_json::to_string_pretty(&entry).map_err(WakeyError::Serialization)?;
    println!("{}", json);
    Ok(())
}
