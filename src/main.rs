use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = webresponse::cli::Cli::parse();
    if let Err(e) = webresponse::run::execute(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
