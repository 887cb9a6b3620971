//! Delete command implementation

use anyhow::Result;

use crate::client::PersonasClient;

/// Delete a persona by id
pub async fn delete(client: &PersonasClient, id: i64) -> Result<()> {
    client.delete(id).await?;
    println!("Deleted persona {}", id);
    Ok(())
}
