//! CLI subcommand implementations

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

use personas_common::model::Persona;

/// Print a formatted field/value row
fn print_row(key: &str, value: &str) {
    println!("{:<18} {}", key, value);
}

/// Print a persona as a field/value table
fn print_persona(persona: &Persona) {
    print_row("id", &persona.id.to_string());
    print_row("nombre", &persona.nombre);
    print_row("apellido", &persona.apellido);
    print_row("edad", &persona.edad.to_string());
    print_row("email", persona.email.as_deref().unwrap_or("-"));
    print_row("telefono", persona.telefono.as_deref().unwrap_or("-"));
    print_row("direccion", persona.direccion.as_deref().unwrap_or("-"));
    print_row(
        "fecha_nacimiento",
        persona.fecha_nacimiento.as_deref().unwrap_or("-"),
    );
}
