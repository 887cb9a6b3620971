//! Show command implementation

use anyhow::Result;

use crate::client::PersonasClient;
use crate::commands::print_persona;

/// Display a single persona as a field/value table
pub async fn show(client: &PersonasClient, id: i64) -> Result<()> {
    let persona = client.get(id).await?;

    println!();
    print_persona(&persona);
    println!();

    Ok(())
}
