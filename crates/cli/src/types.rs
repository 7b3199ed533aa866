use std::path::PathBuf;

pub fn run(path: PathBuf, strict: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = crate::load_document(&path, strict)?;
    for name in doc.referenced_types() {
        println!("{}", name);
    }
    Ok(())
}
