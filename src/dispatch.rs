//! Command dispatch
//!
//! Branches on the parsed command, performs the single API call, and
//! prints the result. Invalid commands print help and never touch the
//! network.

use crate::api::client::StoreClient;
use crate::command::{self, Command};
use crate::model::NewProduct;
use crate::render;
use anyhow::{Context, Result};

/// Execute one parsed command against the store API
pub async fn execute(command: Command, client: &StoreClient) -> Result<()> {
    match command {
        Command::ListProducts => {
            let products = client.list_products().await?;
            tracing::info!("listed {} products", products.len());
            print!("{}", render::product_list(&products));
        }
        Command::GetProduct { id } => {
            let product = client.get_product(&id).await?;
            print!("{}", render::product(&product));
        }
        Command::CreateProduct {
            title,
            price,
            category,
        } => {
            let new_product = NewProduct::new(&title, price, &category);
            let created = client.create_product(&new_product).await?;
            tracing::info!("created product {}", created.id);
            println!("\nProduct created:");
            print!("{}", render::product(&created));
        }
        Command::DeleteProduct { id } => {
            let deleted = client.delete_product(&id).await?;
            let pretty =
                serde_json::to_string_pretty(&deleted).context("Failed to format response")?;
            println!("\nProduct deleted:");
            println!("{pretty}");
        }
        Command::MissingProductData => {
            println!("\n{}\n", command::missing_data_text());
        }
        Command::Invalid => {
            println!("\n{}\n", command::usage_text());
        }
    }

    Ok(())
}
