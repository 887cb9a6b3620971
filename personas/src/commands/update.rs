//! Update command implementation

use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};

use crate::client::PersonasClient;
use crate::commands::print_persona;

/// Fields for a partial persona update
#[derive(Args)]
pub struct UpdateOpts {
    /// Persona id
    pub id: i64,

    /// First name
    #[arg(long)]
    pub nombre: Option<String>,

    /// Last name
    #[arg(long)]
    pub apellido: Option<String>,

    /// Age in years
    #[arg(long)]
    pub edad: Option<u32>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub telefono: Option<String>,

    /// Street address
    #[arg(long)]
    pub direccion: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub fecha_nacimiento: Option<String>,
}

/// Update the supplied fields of an existing persona
pub async fn update(client: &PersonasClient, opts: UpdateOpts) -> Result<()> {
    let mut body = Map::new();

    if let Some(nombre) = opts.nombre {
        body.insert("nombre".to_string(), Value::String(nombre));
    }
    if let Some(apellido) = opts.apellido {
        body.insert("apellido".to_string(), Value::String(apellido));
    }
    if let Some(edad) = opts.edad {
        body.insert("edad".to_string(), Value::from(edad));
    }
    if let Some(email) = opts.email {
        body.insert("email".to_string(), Value::String(email));
    }
    if let Some(telefono) = opts.telefono {
        body.insert("telefono".to_string(), Value::String(telefono));
    }
    if let Some(direccion) = opts.direccion {
        body.insert("direccion".to_string(), Value::String(direccion));
    }
    if let Some(fecha_nacimiento) = opts.fecha_nacimiento {
        body.insert("fecha_nacimiento".to_string(), Value::String(fecha_nacimiento));
    }

    if body.is_empty() {
        anyhow::bail!("No fields to update; pass at least one field flag");
    }

    let persona = client.update(opts.id, &Value::Object(body)).await?;

    println!("Updated persona {}", persona.id);
    println!();
    print_persona(&persona);

    Ok(())
}
