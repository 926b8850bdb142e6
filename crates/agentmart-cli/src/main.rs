//! Agentmart CLI - Storefront demo for the simulated negotiation engine
//!
//! Chat with a built-in seller agent about a catalog product. All replies
//! are computed locally by the deterministic engine; the typing delay is
//! purely presentation.
//!
//! # Quick Start
//!
//! ```bash
//! agentmart sellers
//! agentmart products
//! agentmart chat --seller seller_haru --product prod_tumbler
//! ```

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};

use agentmart_storefront::{Conversation, ProductCatalog, SellerRegistry};

mod display;

/// Agentmart CLI - agent-to-agent commerce storefront demo
#[derive(Parser)]
#[command(name = "agentmart")]
#[command(author = "Agentmart Contributors")]
#[command(version)]
#[command(about = "Chat with simulated seller agents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in seller profiles
    Sellers,

    /// List the catalog products
    Products,

    /// Start an interactive chat session
    Chat {
        /// Seller id (see `agentmart sellers`)
        #[arg(long, default_value = "seller_haru")]
        seller: String,

        /// Product id (see `agentmart products`)
        #[arg(long, default_value = "prod_tumbler")]
        product: String,

        /// Simulated typing delay before each reply, in milliseconds
        #[arg(long, default_value_t = 600)]
        typing_delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let registry = SellerRegistry::builtin();
    let catalog = ProductCatalog::builtin();

    match cli.command {
        Commands::Sellers => {
            display::section("Sellers");
            for seller in registry.all() {
                display::seller_row(seller);
            }
        }

        Commands::Products => {
            display::section("Products");
            for product in catalog.all() {
                display::product_row(product);
            }
        }

        Commands::Chat { seller, product, typing_delay_ms } => {
            let seller = registry.get(&seller)?.clone();
            let product = catalog.get(&product)?.clone();
            chat(seller, product, typing_delay_ms, &registry).await?;
        }
    }

    Ok(())
}

async fn chat(
    seller: agentmart_types::SellerProfile,
    product: agentmart_types::Product,
    typing_delay_ms: u64,
    registry: &SellerRegistry,
) -> anyhow::Result<()> {
    display::section(&format!("{} — {}", seller.name, product.title));
    display::info("메시지를 입력하세요. /seller <id> 로 판매자 변경, /quit 으로 종료.");
    println!();

    let mut conversation = Conversation::open(seller, product);
    display::chat_message(&conversation.messages()[0]);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if input == "/quit" {
            break;
        }

        if let Some(seller_id) = input.strip_prefix("/seller ") {
            match registry.get(seller_id.trim()) {
                Ok(next) => {
                    conversation.switch_seller(next.clone());
                    display::info(&format!("판매자 변경: {}", next.name));
                    display::chat_message(&conversation.messages()[0]);
                }
                Err(err) => display::error(&err.to_string()),
            }
            continue;
        }

        // Presentation-only pause; the engine itself has no delay
        tokio::time::sleep(Duration::from_millis(typing_delay_ms)).await;

        let reply = conversation.send(input).clone();
        display::chat_message(&reply);
    }

    Ok(())
}
