mod cli;
mod ocr_cmd;
mod permute_cmd;
mod poker_cmd;
mod profit_cmd;
mod rects_cmd;
mod search_cmd;
mod shared;
mod shorten_cmd;
mod wrap_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Rects { ref file, ref format } => rects_cmd::run(file, format),
        cli::Commands::Ocr { ref file } => ocr_cmd::run(file),
        cli::Commands::Wrap { ref file, columns } => wrap_cmd::run(file, columns),
        cli::Commands::Poker { ref cards } => poker_cmd::run(cards),
        cli::Commands::Search { ref file, ref word } => search_cmd::run(file, word),
        cli::Commands::Permute { ref chars } => permute_cmd::run(chars),
        cli::Commands::Profit { ref prices } => profit_cmd::run(prices),
        cli::Commands::Shorten { ref urls } => shorten_cmd::run(urls),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
