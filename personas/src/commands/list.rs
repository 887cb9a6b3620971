//! List command implementation

use anyhow::Result;

use crate::client::PersonasClient;

/// Display all personas as a table
pub async fn list(client: &PersonasClient) -> Result<()> {
    let personas = client.list().await?;

    if personas.is_empty() {
        println!("No personas");
        return Ok(());
    }

    println!(
        "{:<6} {:<16} {:<16} {:>5}  {}",
        "id", "nombre", "apellido", "edad", "email"
    );
    for persona in &personas {
        println!(
            "{:<6} {:<16} {:<16} {:>5}  {}",
            persona.id,
            persona.nombre,
            persona.apellido,
            persona.edad,
            persona.email.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
