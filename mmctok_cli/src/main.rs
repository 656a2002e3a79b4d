use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
struct ActionGenerate {
    /// User agent mixed into the payload. Defaults to the built-in Chrome UA
    #[arg(short, long)]
    user_agent: Option<String>,

    /// Number of tokens to generate
    #[arg(short, long, default_value = "1")]
    count: u32,

    /// Print the timestamp and nonce alongside each token
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct ActionInspect {
    /// Token to split and decode
    #[arg(index = 1)]
    token: String,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Generate fingerprint tokens
    Generate(ActionGenerate),
    /// Recover the payload carried by an existing token
    Inspect(ActionInspect),
}

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    action: Action,
}

fn main() -> Result<(), mmctok::Error> {
    let args = Args::parse();

    match args.action {
        Action::Generate(args) => generate(args),
        Action::Inspect(args) => inspect(args),
    }
}

fn generate(args: ActionGenerate) -> Result<(), mmctok::Error> {
    for _ in 0..args.count {
        let mut builder = mmctok::TokenBuilder::new();
        if let Some(user_agent) = &args.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let token = builder.generate()?;
        if args.verbose {
            println!("token: {}", token.token);
            println!("timestamp: {}", token.timestamp);
            println!("nonce: {}", token.nonce);
        } else {
            println!("{}", token.token);
        }
    }
    Ok(())
}

fn inspect(args: ActionInspect) -> Result<(), mmctok::Error> {
    println!("{}", mmctok::recover_payload(&args.token)?);
    Ok(())
}
