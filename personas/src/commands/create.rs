//! Create command implementation

use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};

use crate::client::PersonasClient;
use crate::commands::print_persona;

/// Fields for creating a persona
#[derive(Args)]
pub struct CreateOpts {
    /// First name
    #[arg(long)]
    pub nombre: String,

    /// Last name
    #[arg(long)]
    pub apellido: String,

    /// Age in years
    #[arg(long)]
    pub edad: u32,

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

/// Create a new persona and display the stored record
pub async fn create(client: &PersonasClient, opts: CreateOpts) -> Result<()> {
    let mut body = Map::new();
    body.insert("nombre".to_string(), Value::String(opts.nombre));
    body.insert("apellido".to_string(), Value::String(opts.apellido));
    body.insert("edad".to_string(), Value::from(opts.edad));

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

    let persona = client.create(&Value::Object(body)).await?;

    println!("Created persona {}", persona.id);
    println!();
    print_persona(&persona);

    Ok(())
}
