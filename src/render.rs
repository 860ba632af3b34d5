//! Console formatting for products
//!
//! Pure functions returning the formatted text; printing happens in the
//! dispatcher so these stay unit-testable.

use crate::model::Product;
use std::fmt::Write;

/// List descriptions are cut to this many characters
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// First 100 characters of the description, with a trailing ellipsis.
///
/// The ellipsis is always appended, even for short descriptions.
fn description_preview(description: &str) -> String {
    let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{preview}...")
}

/// Format a list of products: a header with the element count, then one
/// numbered block per product.
pub fn product_list(products: &[Product]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nProduct list ({} found):\n", products.len());

    for (i, product) in products.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, product.title);
        let _ = writeln!(out, "   Price: ${}", product.price);
        let _ = writeln!(out, "   Category: {}", product.category);
        let _ = writeln!(
            out,
            "   Description: {}\n",
            description_preview(&product.description)
        );
    }

    out
}

/// Format a single product with the full field dump
pub fn product(p: &Product) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nProduct:\n");
    let _ = writeln!(out, "ID: {}", p.id);
    let _ = writeln!(out, "Title: {}", p.title);
    let _ = writeln!(out, "Price: ${}", p.price);
    let _ = writeln!(out, "Category: {}", p.category);
    let _ = writeln!(out, "Description: {}", p.description);
    let _ = writeln!(out, "Image: {}", p.image);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, title: &str, description: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 19.5,
            category: "tools".to_string(),
            description: description.to_string(),
            image: "https://example.com/img.png".to_string(),
        }
    }

    #[test]
    fn list_header_contains_count() {
        let products = vec![sample(1, "Hammer", "hits nails"), sample(2, "Saw", "cuts wood")];
        let out = product_list(&products);
        assert!(out.contains("Product list (2 found):"));
    }

    #[test]
    fn list_has_one_numbered_block_per_product() {
        let products = vec![
            sample(1, "Hammer", "hits nails"),
            sample(2, "Saw", "cuts wood"),
            sample(3, "Drill", "makes holes"),
        ];
        let out = product_list(&products);
        assert!(out.contains("1. Hammer"));
        assert!(out.contains("2. Saw"));
        assert!(out.contains("3. Drill"));
        assert!(!out.contains("4. "));
    }

    #[test]
    fn empty_list_renders_zero_header() {
        let out = product_list(&[]);
        assert!(out.contains("Product list (0 found):"));
    }

    #[test]
    fn long_description_is_truncated_to_100_chars() {
        let long = "x".repeat(150);
        let out = product_list(&[sample(1, "Widget", &long)]);
        let expected = format!("Description: {}...", "x".repeat(100));
        assert!(out.contains(&expected));
        assert!(!out.contains(&"x".repeat(101)));
    }

    #[test]
    fn short_description_still_gets_ellipsis() {
        let out = product_list(&[sample(1, "Widget", "tiny")]);
        assert!(out.contains("Description: tiny..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(120);
        let out = product_list(&[sample(1, "Widget", &long)]);
        let expected = format!("Description: {}...", "é".repeat(100));
        assert!(out.contains(&expected));
    }

    #[test]
    fn single_product_dumps_all_fields() {
        let out = product(&sample(42, "Hammer", "hits nails"));
        assert!(out.contains("ID: 42"));
        assert!(out.contains("Title: Hammer"));
        assert!(out.contains("Price: $19.5"));
        assert!(out.contains("Category: tools"));
        assert!(out.contains("Description: hits nails"));
        assert!(out.contains("Image: https://example.com/img.png"));
    }

    #[test]
    fn single_product_does_not_truncate_description() {
        let long = "y".repeat(150);
        let out = product(&sample(1, "Widget", &long));
        assert!(out.contains(&long));
    }
}
