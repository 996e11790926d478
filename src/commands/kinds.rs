use anyhow::Result;

use apidefaults::{Defaulter, ObjectKind, PolicyConfig};

pub fn cmd_kinds() -> Result<()> {
    let defaulter = Defaulter::new(&PolicyConfig::default());
    let registry = defaulter.registry();

    let width = ObjectKind::ALL
        .iter()
        .map(|kind| kind.name().len())
        .max()
        .unwrap_or_default();

    for &kind in ObjectKind::ALL {
        let names: Vec<&str> = registry
            .procedures_for(kind)
            .iter()
            .map(|procedure| procedure.name())
            .collect();
        let names = if names.is_empty() {
            "-".to_string()
        } else {
            names.join(", ")
        };
        println!("{:<width$}  {}", kind.name(), names, width = width);
    }
    Ok(())
}
