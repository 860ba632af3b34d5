//! Command parsing
//!
//! Turns the raw invocation tokens (`<METHOD> <RESOURCE> [PARAMS...]`)
//! into a typed [`Command`]. Parsing is total: anything that does not
//! match one of the four supported shapes comes back as an explicit
//! invalid variant instead of an error.

/// A single parsed invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `GET products`
    ListProducts,
    /// `GET products/<id>`
    GetProduct { id: String },
    /// `POST products <title> <price> <category>`
    CreateProduct {
        title: String,
        price: f64,
        category: String,
    },
    /// `DELETE products/<id>`
    DeleteProduct { id: String },
    /// POST with a missing, empty, or non-numeric-price parameter
    MissingProductData,
    /// Anything else
    Invalid,
}

/// Parse raw command tokens.
///
/// Methods are matched case-sensitively (`GET`, not `get`), and product
/// ids are carried as strings without local validation.
pub fn parse(args: &[String]) -> Command {
    let [method, resource, params @ ..] = args else {
        return Command::Invalid;
    };

    let segments: Vec<&str> = resource.split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["products"]) => Command::ListProducts,
        ("GET", ["products", id]) => Command::GetProduct { id: (*id).to_string() },
        ("POST", ["products"]) => parse_new_product(params),
        ("DELETE", ["products", id]) => Command::DeleteProduct { id: (*id).to_string() },
        _ => Command::Invalid,
    }
}

/// Check the positional POST params (title, price, category)
fn parse_new_product(params: &[String]) -> Command {
    let [title, price, category, ..] = params else {
        return Command::MissingProductData;
    };

    if title.is_empty() || category.is_empty() {
        return Command::MissingProductData;
    }

    let Ok(price) = price.parse::<f64>() else {
        return Command::MissingProductData;
    };

    Command::CreateProduct {
        title: title.clone(),
        price,
        category: category.clone(),
    }
}

/// Help text printed for unrecognized commands
pub fn usage_text() -> String {
    [
        "Invalid command.",
        "Valid formats:",
        "  storecli GET products",
        "  storecli GET products/<id>",
        "  storecli POST products \"<title>\" <price> <category>",
        "  storecli DELETE products/<id>",
    ]
    .join("\n")
}

/// Help text printed when POST parameters are missing or invalid
pub fn missing_data_text() -> String {
    [
        "Missing or invalid product data.",
        "Title and category must be non-empty; price must be a number.",
        "Usage: storecli POST products \"<title>\" <price> <category>",
    ]
    .join("\n")
}
