//! Exercise the MediaX tools against a live deployment.
//!
//! Run with: cargo run -p mediax-tools --example search_demo
//!
//! Expects MEDIAX_AK, MEDIAX_SK and MEDIAX_API_DOMAIN in the environment
//! (or a .env file); set ES_DOMAIN to also exercise the ES proxy tool.

use std::collections::HashMap;
use std::sync::Arc;

use mediax_tools::{default_registry, MediaxCredentials, ToolMessage, ToolRegistry};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mediax_tools=debug".parse().unwrap())
                .add_directive("mediax_client=debug".parse().unwrap()),
        )
        .init();

    println!("=== MediaX Tools Demo ===\n");

    let mut registry = default_registry();
    registry.set_credentials(Arc::new(MediaxCredentials::new(
        std::env::var("MEDIAX_AK")?,
        std::env::var("MEDIAX_SK")?,
        std::env::var("MEDIAX_API_DOMAIN")?,
    )));

    // List available tools
    println!("Registered tools:");
    for (name, desc) in registry.get_descriptions() {
        println!("  - {}: {}", name, desc);
    }
    println!();

    run_media_search(&registry).await?;

    if std::env::var("ES_DOMAIN").is_ok() {
        run_es_search(&registry).await?;
    }

    println!("\n=== Demo completed ===");
    Ok(())
}

async fn run_media_search(registry: &ToolRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- media_search ---");

    for return_type in ["json", "markdown", "image"] {
        let mut params = HashMap::new();
        params.insert("keyword".to_string(), Value::String("新闻".to_string()));
        params.insert("media_types".to_string(), Value::String("ALL".to_string()));
        params.insert("top_n".to_string(), Value::from(3));
        params.insert(
            "return_type".to_string(),
            Value::String(return_type.to_string()),
        );

        println!("\nreturn_type = {return_type}:");
        match registry.execute("media_search", params).await {
            Ok(output) => print_messages(&output.messages),
            Err(e) => println!("  error: {e}"),
        }
    }

    Ok(())
}

async fn run_es_search(registry: &ToolRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- es_search ---");

    let mut params = HashMap::new();
    params.insert("domain".to_string(), Value::String(std::env::var("ES_DOMAIN")?));
    params.insert("index_name".to_string(), Value::String("media".to_string()));
    params.insert(
        "query".to_string(),
        Value::String(r#"{"query": {"match_all": {}}, "size": 1}"#.to_string()),
    );

    match registry.execute("es_search", params).await {
        Ok(output) => print_messages(&output.messages),
        Err(e) => println!("  error: {e}"),
    }

    Ok(())
}

fn print_messages(messages: &[ToolMessage]) {
    for message in messages {
        match message {
            ToolMessage::Text { text } => println!("  text: {text}"),
            ToolMessage::Json { value } => println!("  json: {value}"),
            ToolMessage::ImageLink { url, mime_type } => {
                println!("  image: {url} ({})", mime_type.as_deref().unwrap_or("unknown"))
            }
        }
    }
}
